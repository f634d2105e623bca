use api::Credentials;
use dioxus::prelude::*;
use store::{DEMO_EMAIL, DEMO_PASSWORD};

use crate::icons::{FaArrowRight, FaEye, FaEyeSlash, FaRightToBracket};
use crate::{messages, use_auth, use_toasts, DemoModeToggle, Icon};

#[component]
pub fn LoginView(on_success: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            match auth.login(credentials).await {
                Ok(_) => {
                    toasts.success(auth.announce(messages::LOGIN_SUCCESS));
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    toasts.error(e.user_message(messages::LOGIN_ERROR));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            DemoModeToggle {}
            div {
                class: "auth-column",
                div {
                    class: "auth-brand",
                    h1 { "Mychoice" }
                    p { "Admin Panel" }
                }
                div {
                    class: "auth-card",
                    div {
                        class: "auth-icon",
                        Icon { icon: FaRightToBracket, width: 20, height: 20 }
                    }
                    h2 { "Welcome Back" }
                    if auth.is_demo() {
                        p { class: "auth-hint", "Demo login: {DEMO_EMAIL} / {DEMO_PASSWORD}" }
                    }
                    form {
                        class: "form-stack",
                        onsubmit: onsubmit,
                        label {
                            class: "field",
                            span { class: "field-label", "Email Address" }
                            input {
                                class: "input",
                                r#type: "email",
                                required: true,
                                placeholder: "Enter your email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        label {
                            class: "field",
                            span { class: "field-label", "Password" }
                            div {
                                class: "input-with-action",
                                input {
                                    class: "input",
                                    r#type: if show_password() { "text" } else { "password" },
                                    required: true,
                                    placeholder: "Enter your password",
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "btn btn-ghost btn-icon",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                    } else {
                                        Icon { icon: FaEye, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: loading(),
                            if loading() { "Signing In..." } else { "Sign In" }
                        }
                    }
                    button {
                        class: "btn btn-link btn-block",
                        onclick: move |_| on_signup.call(()),
                        "Don't have an account? Sign up"
                        Icon { icon: FaArrowRight, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
