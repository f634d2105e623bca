use api::{validation, ApiError, PasswordChange, ProfileUpdate};
use dioxus::prelude::*;

use crate::format::short_date;
use crate::icons::{FaFloppyDisk, FaLock, FaPenToSquare, FaUser, FaXmark};
use crate::{messages, use_auth, use_toasts, Icon};

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let user = auth.user();

    let mut editing = use_signal(|| false);
    let mut changing_password = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    // Pull the latest profile once; demo mode keeps the stored user.
    let _ = use_resource(move || async move {
        if let Err(e) = auth.refresh_profile().await {
            auth.report(toasts, &e, "Failed to load profile.");
        }
    });

    let start_edit = {
        let user = user.clone();
        move |_| {
            if let Some(u) = &user {
                full_name.set(u.full_name.clone());
                email.set(u.email.clone());
            }
            editing.set(true);
        }
    };

    let save_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let update = ProfileUpdate {
            full_name: Some(full_name().trim().to_string()),
            email: Some(email().trim().to_string()),
        };
        spawn(async move {
            busy.set(true);
            match auth.update_profile(update).await {
                Ok(_) => {
                    toasts.success(auth.announce(messages::PROFILE_UPDATE_SUCCESS));
                    editing.set(false);
                }
                Err(e) => auth.report(toasts, &e, messages::PROFILE_UPDATE_ERROR),
            }
            busy.set(false);
        });
    };

    let mut reset_password_form = move || {
        current_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    };

    let save_password = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(ApiError::Invalid(problems)) =
            validation::password_change(&new_password(), &confirm_password())
        {
            toasts.error(problems.join(", "));
            return;
        }
        let change = PasswordChange {
            current_password: current_password(),
            new_password: new_password(),
        };
        spawn(async move {
            busy.set(true);
            match auth.change_password(change).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::PASSWORD_CHANGE_SUCCESS));
                    changing_password.set(false);
                    reset_password_form();
                }
                Err(e) => auth.report(toasts, &e, messages::PASSWORD_CHANGE_ERROR),
            }
            busy.set(false);
        });
    };

    let Some(user) = user else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "card",
                div {
                    class: "page-header",
                    h1 {
                        class: "page-title",
                        Icon { icon: FaUser, width: 18, height: 18 }
                        " Profile Settings"
                    }
                }

                section {
                    class: "profile-section",
                    div {
                        class: "section-header",
                        h2 { "Profile Information" }
                        if !editing() {
                            button {
                                class: "btn btn-outline btn-sm",
                                onclick: start_edit,
                                Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                " Edit"
                            }
                        }
                    }
                    if editing() {
                        form {
                            class: "form-grid",
                            onsubmit: save_profile,
                            label {
                                class: "field",
                                span { class: "field-label", "Full Name" }
                                input {
                                    class: "input",
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
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-actions",
                                button {
                                    r#type: "button",
                                    class: "btn btn-outline",
                                    onclick: move |_| editing.set(false),
                                    Icon { icon: FaXmark, width: 12, height: 12 }
                                    " Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: busy(),
                                    Icon { icon: FaFloppyDisk, width: 12, height: 12 }
                                    if busy() { " Saving..." } else { " Save Changes" }
                                }
                            }
                        }
                    } else {
                        dl {
                            class: "detail-grid",
                            dt { "Full Name" }
                            dd { "{user.display_name()}" }
                            dt { "Email Address" }
                            dd { "{user.email}" }
                            dt { "Role" }
                            dd { "{user.role}" }
                            dt { "Member Since" }
                            dd { "{short_date(&user.created_at)}" }
                        }
                    }
                }

                section {
                    class: "profile-section",
                    div {
                        class: "section-header",
                        h2 { "Security" }
                        if !changing_password() {
                            button {
                                class: "btn btn-outline btn-sm",
                                onclick: move |_| changing_password.set(true),
                                Icon { icon: FaLock, width: 12, height: 12 }
                                " Change Password"
                            }
                        }
                    }
                    if changing_password() {
                        form {
                            class: "form-grid",
                            onsubmit: save_password,
                            label {
                                class: "field",
                                span { class: "field-label", "Current Password" }
                                input {
                                    class: "input",
                                    r#type: "password",
                                    required: true,
                                    value: current_password(),
                                    oninput: move |evt: FormEvent| current_password.set(evt.value()),
                                }
                            }
                            label {
                                class: "field",
                                span { class: "field-label", "New Password" }
                                input {
                                    class: "input",
                                    r#type: "password",
                                    required: true,
                                    value: new_password(),
                                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                                }
                            }
                            label {
                                class: "field",
                                span { class: "field-label", "Confirm New Password" }
                                input {
                                    class: "input",
                                    r#type: "password",
                                    required: true,
                                    value: confirm_password(),
                                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-actions",
                                button {
                                    r#type: "button",
                                    class: "btn btn-outline",
                                    onclick: move |_| {
                                        changing_password.set(false);
                                        reset_password_form();
                                    },
                                    "Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: busy(),
                                    if busy() { "Updating..." } else { "Update Password" }
                                }
                            }
                        }
                    } else {
                        p { class: "muted", "Keep your account secure with a strong password." }
                    }
                }
            }
        }
    }
}
