use api::{validation, Backend, Department, DepartmentDraft, ListQuery, Page};
use dioxus::prelude::*;

use crate::components::{ActiveBadge, ConfirmDialog, Field, Modal, Pagination, SearchBox, Spinner};
use crate::format::short_date;
use crate::icons::{FaPenToSquare, FaPlus, FaTrash};
use crate::{messages, use_auth, use_toasts, Icon};

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Create,
    Edit(Department),
}

#[component]
pub fn DepartmentsView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let limit = auth.config().paging.departments;

    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);
    let mut editor = use_signal(|| None::<Editor>);
    let mut draft = use_signal(DepartmentDraft::default);
    let mut deleting = use_signal(|| None::<Department>);
    let mut busy = use_signal(|| false);

    let departments = use_resource(move || async move {
        let _ = reload();
        let query = ListQuery::page(page(), limit).with_search(&search());
        match auth.gateway().list_departments(&query).await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::DEPARTMENT_LOAD_ERROR);
                Page::empty()
            }
        }
    });

    let mut open = move |target: Editor| {
        draft.set(match &target {
            Editor::Create => DepartmentDraft::default(),
            Editor::Edit(dept) => DepartmentDraft::from(dept),
        });
        editor.set(Some(target));
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = editor() else { return };
        let mut body = draft();
        body.name = body.name.trim().to_string();
        body.code = body.code.trim().to_uppercase();
        body.description = body.description.trim().to_string();
        if let Err(e) = validation::department(&body) {
            toasts.error(e.user_message(""));
            return;
        }
        spawn(async move {
            busy.set(true);
            let gateway = auth.gateway();
            let (result, ok, failed) = match &target {
                Editor::Create => (
                    gateway.create_department(&body).await,
                    messages::DEPARTMENT_CREATE_SUCCESS,
                    messages::DEPARTMENT_CREATE_ERROR,
                ),
                Editor::Edit(dept) => (
                    gateway.update_department(&dept.id, &body).await,
                    messages::DEPARTMENT_UPDATE_SUCCESS,
                    messages::DEPARTMENT_UPDATE_ERROR,
                ),
            };
            match result {
                Ok(_) => {
                    toasts.success(auth.announce(ok));
                    editor.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, failed),
            }
            busy.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(dept) = deleting() else { return };
        spawn(async move {
            busy.set(true);
            match auth.gateway().delete_department(&dept.id).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::DEPARTMENT_DELETE_SUCCESS));
                    deleting.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::DEPARTMENT_DELETE_ERROR),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Departments" }
                    p { class: "page-subtitle", "Organise employees into departments" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open(Editor::Create),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Department"
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: search(),
                    placeholder: "Search departments...",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
            }

            match departments() {
                None => rsx! { Spinner { label: "Loading departments..." } },
                Some(found) if found.items.is_empty() => rsx! {
                    div { class: "empty-state", "No departments found" }
                },
                Some(found) => rsx! {
                    div {
                        class: "card table-card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Code" }
                                    th { "Description" }
                                    th { "Status" }
                                    th { "Created" }
                                    th { class: "actions-col", "Actions" }
                                }
                            }
                            tbody {
                                for dept in found.items.iter().cloned() {
                                    tr {
                                        key: "{dept.id}",
                                        td { class: "strong", "{dept.name}" }
                                        td { span { class: "code-chip", "{dept.code}" } }
                                        td { class: "muted truncate", "{dept.description}" }
                                        td { ActiveBadge { active: dept.is_active } }
                                        td { "{short_date(&dept.created_at)}" }
                                        td {
                                            class: "row-actions",
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "Edit",
                                                onclick: {
                                                    let dept = dept.clone();
                                                    move |_| open(Editor::Edit(dept.clone()))
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon btn-danger-text",
                                                title: "Delete",
                                                onclick: {
                                                    let dept = dept.clone();
                                                    move |_| deleting.set(Some(dept.clone()))
                                                },
                                                Icon { icon: FaTrash, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page: found.page,
                        total_pages: found.total_pages,
                        total: found.total,
                        limit: found.limit,
                        on_change: move |p: u32| page.set(p),
                    }
                },
            }

            if let Some(target) = editor() {
                Modal {
                    title: if matches!(target, Editor::Create) { "Add Department".to_string() } else { "Edit Department".to_string() },
                    on_close: move |_| editor.set(None),
                    form {
                        class: "form-stack",
                        onsubmit: save,
                        Field {
                            label: "Name",
                            required: true,
                            input {
                                class: "input",
                                placeholder: "e.g. Engineering",
                                value: draft().name,
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        Field {
                            label: "Code",
                            required: true,
                            input {
                                class: "input input-code",
                                placeholder: "e.g. ENG",
                                maxlength: 10,
                                value: draft().code,
                                oninput: move |evt: FormEvent| draft.write().code = evt.value().to_uppercase(),
                            }
                        }
                        Field {
                            label: "Description",
                            required: true,
                            textarea {
                                class: "input",
                                rows: 3,
                                value: draft().description,
                                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                            }
                        }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn btn-outline",
                                onclick: move |_| editor.set(None),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: busy(),
                                if busy() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }

            if let Some(dept) = deleting() {
                ConfirmDialog {
                    title: "Delete Department",
                    message: format!("Are you sure you want to delete \"{}\"? This cannot be undone.", dept.name),
                    busy: busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}
