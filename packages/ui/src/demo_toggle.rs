//! Live/demo switch shown in the corner of every page.

use dioxus::prelude::*;

use crate::icons::{FaToggleOff, FaToggleOn};
use crate::{messages, use_auth, use_toasts, Icon};

/// Flipping the switch signs the user out; the login page then talks to
/// the newly selected backend.
#[component]
pub fn DemoModeToggle() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let state = auth.state();

    if state.loading {
        return rsx! {};
    }

    let onclick = move |_| {
        if auth.toggle_demo_mode() {
            toasts.info(messages::DEMO_MODE_SWITCH);
        } else {
            toasts.info(messages::REAL_MODE_SWITCH);
        }
    };

    rsx! {
        div {
            class: "demo-toggle",
            div {
                class: "demo-toggle-row",
                span { class: "demo-toggle-label", "Demo Mode" }
                button {
                    class: if state.demo_mode { "demo-toggle-switch on" } else { "demo-toggle-switch" },
                    onclick: onclick,
                    if state.demo_mode {
                        Icon { icon: FaToggleOn, width: 14, height: 14 }
                        span { "ON" }
                    } else {
                        Icon { icon: FaToggleOff, width: 14, height: 14 }
                        span { "OFF" }
                    }
                }
            }
            if state.demo_mode {
                p { class: "demo-toggle-hint", "Using demo credentials" }
            }
        }
    }
}
