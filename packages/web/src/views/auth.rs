use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Already signed in
    if !auth.state().loading && auth.user().is_some() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        ui::views::LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth.state().loading && auth.user().is_some() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        ui::views::SignupView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
