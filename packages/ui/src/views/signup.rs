use api::{validation, SignupRequest};
use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaUserPlus};
use crate::{messages, use_auth, use_toasts, DemoModeToggle, Icon};

#[component]
pub fn SignupView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(Vec::<String>::new);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = SignupRequest::admin(&full_name(), &email(), &password());
        if let Err(api::ApiError::Invalid(problems)) = validation::signup(&request, &confirm()) {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());
        spawn(async move {
            loading.set(true);
            match auth.signup(request).await {
                Ok(_) => {
                    toasts.success(auth.announce(messages::SIGNUP_SUCCESS));
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("signup failed: {e}");
                    toasts.error(e.user_message(messages::SIGNUP_ERROR));
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
                    p { "Create your admin account" }
                }
                div {
                    class: "auth-card",
                    div {
                        class: "auth-icon",
                        Icon { icon: FaUserPlus, width: 20, height: 20 }
                    }
                    h2 { "Sign Up" }
                    if !errors().is_empty() {
                        ul {
                            class: "form-errors",
                            for problem in errors() {
                                li { "{problem}" }
                            }
                        }
                    }
                    form {
                        class: "form-stack",
                        onsubmit: onsubmit,
                        label {
                            class: "field",
                            span { class: "field-label", "Full Name" }
                            input {
                                class: "input",
                                placeholder: "Enter your full name",
                                value: full_name(),
                                oninput: move |evt: FormEvent| full_name.set(evt.value()),
                            }
                        }
                        label {
                            class: "field",
                            span { class: "field-label", "Email Address" }
                            input {
                                class: "input",
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        label {
                            class: "field",
                            span { class: "field-label", "Password" }
                            input {
                                class: "input",
                                r#type: "password",
                                placeholder: "At least 6 characters",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                        label {
                            class: "field",
                            span { class: "field-label", "Confirm Password" }
                            input {
                                class: "input",
                                r#type: "password",
                                placeholder: "Repeat your password",
                                value: confirm(),
                                oninput: move |evt: FormEvent| confirm.set(evt.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: loading(),
                            if loading() { "Creating Account..." } else { "Create Account" }
                        }
                    }
                    button {
                        class: "btn btn-link btn-block",
                        onclick: move |_| on_login.call(()),
                        Icon { icon: FaArrowLeft, width: 12, height: 12 }
                        "Already have an account? Sign in"
                    }
                }
            }
        }
    }
}
