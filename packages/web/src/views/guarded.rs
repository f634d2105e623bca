use dioxus::prelude::*;

use crate::Route;

/// Signed-in shell. Sends anonymous visitors to the login page.
#[component]
pub fn Guarded() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let state = auth.state();

    if state.loading {
        return rsx! {
            ui::components::Spinner { label: "Loading..." }
        };
    }
    if state.user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        ui::views::AppLayoutView {
            active: route.nav_item(),
            on_navigate: move |item| {
                nav.push(Route::for_nav(item));
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Page not found" }
                p { class: "muted", "/{path}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.replace(Route::Dashboard {});
                    },
                    "Back to Dashboard"
                }
            }
        }
    }
}
