use api::validation::{self, MAX_DESIGNATION_LEVEL};
use api::{Backend, Department, Designation, DesignationDraft, ListQuery, Page};
use dioxus::prelude::*;

use crate::components::{ActiveBadge, ConfirmDialog, Field, Modal, Pagination, SearchBox, Spinner};
use crate::icons::{FaPenToSquare, FaPlus, FaTrash};
use crate::{messages, use_auth, use_toasts, Icon};

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Create,
    Edit(Designation),
}

#[component]
pub fn DesignationsView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let limit = auth.config().paging.designations;

    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut department_filter = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);
    let mut editor = use_signal(|| None::<Editor>);
    let mut draft = use_signal(DesignationDraft::default);
    let mut deleting = use_signal(|| None::<Designation>);
    let mut busy = use_signal(|| false);

    let departments = use_resource(move || async move {
        match auth.gateway().active_departments().await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::DEPARTMENT_LOAD_ERROR);
                Vec::new()
            }
        }
    });

    let designations = use_resource(move || async move {
        let _ = reload();
        let query = ListQuery::page(page(), limit)
            .with_search(&search())
            .with_department(&department_filter());
        match auth.gateway().list_designations(&query).await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::DESIGNATION_LOAD_ERROR);
                Page::empty()
            }
        }
    });

    let mut open = move |target: Editor| {
        draft.set(match &target {
            Editor::Create => DesignationDraft::default(),
            Editor::Edit(desig) => DesignationDraft::from(desig),
        });
        editor.set(Some(target));
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = editor() else { return };
        let mut body = draft();
        body.title = body.title.trim().to_string();
        body.description = body.description.trim().to_string();
        if let Err(e) = validation::designation(&body) {
            toasts.error(e.user_message(""));
            return;
        }
        spawn(async move {
            busy.set(true);
            let gateway = auth.gateway();
            let (result, ok, failed) = match &target {
                Editor::Create => (
                    gateway.create_designation(&body).await,
                    messages::DESIGNATION_CREATE_SUCCESS,
                    messages::DESIGNATION_CREATE_ERROR,
                ),
                Editor::Edit(desig) => (
                    gateway.update_designation(&desig.id, &body).await,
                    messages::DESIGNATION_UPDATE_SUCCESS,
                    messages::DESIGNATION_UPDATE_ERROR,
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
        let Some(desig) = deleting() else { return };
        spawn(async move {
            busy.set(true);
            match auth.gateway().delete_designation(&desig.id).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::DESIGNATION_DELETE_SUCCESS));
                    deleting.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::DESIGNATION_DELETE_ERROR),
            }
            busy.set(false);
        });
    };

    let known: Vec<Department> = departments.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Designations" }
                    p { class: "page-subtitle", "Job titles and their levels within each department" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open(Editor::Create),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Designation"
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: search(),
                    placeholder: "Search designations...",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                select {
                    class: "select",
                    value: department_filter(),
                    onchange: move |evt: FormEvent| {
                        department_filter.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Departments" }
                    for dept in known.iter() {
                        option { key: "{dept.id}", value: "{dept.id}", "{dept.name}" }
                    }
                }
            }

            match designations() {
                None => rsx! { Spinner { label: "Loading designations..." } },
                Some(found) if found.items.is_empty() => rsx! {
                    div { class: "empty-state", "No designations found" }
                },
                Some(found) => rsx! {
                    div {
                        class: "card table-card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Department" }
                                    th { "Level" }
                                    th { "Description" }
                                    th { "Status" }
                                    th { class: "actions-col", "Actions" }
                                }
                            }
                            tbody {
                                for desig in found.items.iter().cloned() {
                                    tr {
                                        key: "{desig.id}",
                                        td { class: "strong", "{desig.title}" }
                                        td { "{desig.department_name(&known)}" }
                                        td { span { class: "level-chip", "Level {desig.level}" } }
                                        td { class: "muted truncate", "{desig.description}" }
                                        td { ActiveBadge { active: desig.is_active } }
                                        td {
                                            class: "row-actions",
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "Edit",
                                                onclick: {
                                                    let desig = desig.clone();
                                                    move |_| open(Editor::Edit(desig.clone()))
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon btn-danger-text",
                                                title: "Delete",
                                                onclick: {
                                                    let desig = desig.clone();
                                                    move |_| deleting.set(Some(desig.clone()))
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
                    title: if matches!(target, Editor::Create) { "Add Designation".to_string() } else { "Edit Designation".to_string() },
                    on_close: move |_| editor.set(None),
                    form {
                        class: "form-stack",
                        onsubmit: save,
                        Field {
                            label: "Title",
                            required: true,
                            input {
                                class: "input",
                                placeholder: "e.g. Software Engineer",
                                value: draft().title,
                                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                            }
                        }
                        div {
                            class: "form-row",
                            Field {
                                label: "Department",
                                required: true,
                                select {
                                    class: "select",
                                    value: draft().department,
                                    onchange: move |evt: FormEvent| draft.write().department = evt.value(),
                                    option { value: "", "Select department" }
                                    for dept in known.iter() {
                                        option { key: "{dept.id}", value: "{dept.id}", "{dept.name}" }
                                    }
                                }
                            }
                            Field {
                                label: "Level",
                                required: true,
                                select {
                                    class: "select",
                                    value: "{draft().level}",
                                    onchange: move |evt: FormEvent| {
                                        if let Ok(level) = evt.value().parse() {
                                            draft.write().level = level;
                                        }
                                    },
                                    for level in 1..=MAX_DESIGNATION_LEVEL {
                                        option { key: "{level}", value: "{level}", "Level {level}" }
                                    }
                                }
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

            if let Some(desig) = deleting() {
                ConfirmDialog {
                    title: "Delete Designation",
                    message: format!("Are you sure you want to delete \"{}\"? This cannot be undone.", desig.title),
                    busy: busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}
