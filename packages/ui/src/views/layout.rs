use dioxus::prelude::*;

use crate::{messages, use_auth, use_toasts, DemoModeToggle, NavItem, Sidebar};

/// Shared chrome for signed-in pages.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn AppLayoutView(
    /// Page highlighted in the sidebar.
    active: NavItem,
    /// The router outlet for child routes.
    children: Element,
    on_navigate: EventHandler<NavItem>,
    /// Called once the session has been cleared.
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut collapsed = use_signal(|| false);

    let on_logout = move |_| {
        spawn(async move {
            auth.logout().await;
            toasts.success(auth.announce(messages::LOGOUT_SUCCESS));
            on_logged_out.call(());
        });
    };

    rsx! {
        div {
            class: "app-shell",
            Sidebar {
                active: active,
                collapsed: collapsed(),
                on_toggle: move |_| collapsed.set(!collapsed()),
                on_navigate: on_navigate,
                on_logout: on_logout,
            }
            main {
                class: if collapsed() { "main main-wide" } else { "main" },
                {children}
            }
            DemoModeToggle {}
        }
    }
}
