use api::media::employee_picture_url;
use api::{
    validation, ApiResult, Backend, BloodGroup, DashboardConfig, Department, Designation,
    EmployeeType, IdCard, IdCardDraft, IdCardStats, ListQuery, Page, Upload,
};
use dioxus::prelude::*;
use idcard::merge::{card_date, UNKNOWN_DEPARTMENT, UNKNOWN_DESIGNATION};
use idcard::{CardData, QrMatrix};
use store::Gateway;

use crate::components::{ActiveBadge, ConfirmDialog, Field, Modal, Pagination, SearchBox, Spinner, StatCard};
use crate::icons::{FaDownload, FaEye, FaPenToSquare, FaPlus, FaTrash};
use crate::{messages, picked_upload, preview_url, save_download, use_auth, use_toasts, Icon};

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Create,
    Edit(IdCard),
}

/// Active departments and designations, used to name references and fill selects.
#[derive(Clone, Debug, Default, PartialEq)]
struct Lookups {
    departments: Vec<Department>,
    designations: Vec<Designation>,
}

impl Lookups {
    async fn load(gateway: &Gateway) -> ApiResult<Self> {
        Ok(Self {
            departments: gateway.active_departments().await?,
            designations: gateway.active_designations().await?,
        })
    }

    fn department_name<'a>(&'a self, card: &'a IdCard) -> &'a str {
        card.department
            .resolve(&self.departments)
            .map(|d| d.name.as_str())
            .unwrap_or(UNKNOWN_DEPARTMENT)
    }

    fn designation_title<'a>(&'a self, card: &'a IdCard) -> &'a str {
        card.designation
            .resolve(&self.designations)
            .map(|d| d.title.as_str())
            .unwrap_or(UNKNOWN_DESIGNATION)
    }
}

/// `data:` URL of the QR code printed on `card`.
fn qr_preview(card: &IdCard, lookups: &Lookups, config: &DashboardConfig) -> Option<String> {
    let data = CardData::merge(card, &lookups.departments, &lookups.designations, config);
    match QrMatrix::encode(&data.qr_payload) {
        Ok(matrix) => Some(matrix.to_data_url()),
        Err(e) => {
            tracing::warn!("could not encode QR for {}: {e}", card.id_card_number);
            None
        }
    }
}

/// Render `card` to PDF and hand it to the user. Returns where it was saved.
fn download_card(card: &IdCard, lookups: &Lookups, config: &DashboardConfig) -> Result<String, String> {
    let pdf = idcard::generate(card, &lookups.departments, &lookups.designations, config)
        .map_err(|e| e.to_string())?;
    save_download(&pdf.filename, "application/pdf", &pdf.bytes)
}

#[component]
pub fn IdCardsView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let config = auth.config();
    let limit = config.paging.id_cards;

    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut type_filter = use_signal(String::new);
    let mut department_filter = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);
    let mut editor = use_signal(|| None::<Editor>);
    let mut viewing = use_signal(|| None::<IdCard>);
    let mut deleting = use_signal(|| None::<IdCard>);
    let mut busy = use_signal(|| false);

    let lookups = use_resource(move || async move {
        match Lookups::load(&auth.gateway()).await {
            Ok(lookups) => lookups,
            Err(e) => {
                auth.report(toasts, &e, messages::DEPARTMENT_LOAD_ERROR);
                Lookups::default()
            }
        }
    });

    let cards = use_resource(move || async move {
        let _ = reload();
        let query = ListQuery::page(page(), limit)
            .with_search(&search())
            .with_employee_type(&type_filter())
            .with_department(&department_filter());
        match auth.gateway().list_id_cards(&query).await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::ID_CARD_LOAD_ERROR);
                Page::empty()
            }
        }
    });

    let stats = use_resource(move || async move {
        let _ = reload();
        auth.gateway().id_card_stats().await.unwrap_or_else(|e| {
            tracing::warn!("could not load ID card stats: {e}");
            IdCardStats::default()
        })
    });

    let known = lookups.cloned().unwrap_or_default();

    let download = {
        let known = known.clone();
        let config = config.clone();
        move |card: IdCard| match download_card(&card, &known, &config) {
            Ok(path) => {
                tracing::info!("saved {path}");
                toasts.success(auth.announce(messages::ID_CARD_GENERATE_SUCCESS));
            }
            Err(e) => {
                tracing::error!("PDF generation failed: {e}");
                toasts.error(format!("{}: {e}", messages::ID_CARD_GENERATE_ERROR));
            }
        }
    };

    let on_saved = move |(card, created): (IdCard, bool)| {
        tracing::info!("saved ID card {}", card.id_card_number);
        let message = if created {
            messages::ID_CARD_CREATE_SUCCESS
        } else {
            messages::ID_CARD_UPDATE_SUCCESS
        };
        toasts.success(auth.announce(message));
        editor.set(None);
        reload += 1;
    };

    let confirm_delete = move |_| {
        let Some(card) = deleting() else { return };
        spawn(async move {
            busy.set(true);
            match auth.gateway().delete_id_card(&card.id).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::ID_CARD_DELETE_SUCCESS));
                    deleting.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::ID_CARD_DELETE_ERROR),
            }
            busy.set(false);
        });
    };

    let stats = stats.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "ID Cards" }
                    p { class: "page-subtitle", "Employee records and printable ID cards" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| editor.set(Some(Editor::Create)),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Employee"
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Employees", value: stats.total_id_cards.to_string(), tone: "blue" }
                StatCard { label: "Active", value: stats.active_id_cards.to_string(), tone: "green" }
                StatCard {
                    label: "Full Time",
                    value: stats.employee_type_distribution.full_time.to_string(),
                    tone: "purple",
                }
                StatCard {
                    label: "Contract & Interns",
                    value: (stats.employee_type_distribution.contract + stats.employee_type_distribution.intern).to_string(),
                    tone: "orange",
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: search(),
                    placeholder: "Search by name, email or ID...",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                select {
                    class: "select",
                    value: type_filter(),
                    onchange: move |evt: FormEvent| {
                        type_filter.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Types" }
                    for kind in EmployeeType::ALL {
                        option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                    }
                }
                select {
                    class: "select",
                    value: department_filter(),
                    onchange: move |evt: FormEvent| {
                        department_filter.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Departments" }
                    for dept in known.departments.iter() {
                        option { key: "{dept.id}", value: "{dept.id}", "{dept.name}" }
                    }
                }
            }

            match cards() {
                None => rsx! { Spinner { label: "Loading ID cards..." } },
                Some(found) if found.items.is_empty() => rsx! {
                    div { class: "empty-state", "No ID cards found" }
                },
                Some(found) => rsx! {
                    div {
                        class: "card table-card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Employee" }
                                    th { "ID" }
                                    th { "Department" }
                                    th { "Designation" }
                                    th { "Type" }
                                    th { "Status" }
                                    th { class: "actions-col", "Actions" }
                                }
                            }
                            tbody {
                                for card in found.items.iter().cloned() {
                                    tr {
                                        key: "{card.id}",
                                        td {
                                            div {
                                                class: "product-cell",
                                                img {
                                                    class: "avatar",
                                                    src: employee_picture_url(&config.api.asset_origin, &card.employee_picture),
                                                    alt: "{card.full_name}",
                                                }
                                                div {
                                                    p { class: "strong", "{card.full_name}" }
                                                    p { class: "muted", "{card.email}" }
                                                }
                                            }
                                        }
                                        td { span { class: "code-chip", "{card.id_card_number}" } }
                                        td { "{known.department_name(&card)}" }
                                        td { "{known.designation_title(&card)}" }
                                        td { "{card.employee_type.label()}" }
                                        td { ActiveBadge { active: card.is_active } }
                                        td {
                                            class: "row-actions",
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "View",
                                                onclick: {
                                                    let card = card.clone();
                                                    move |_| viewing.set(Some(card.clone()))
                                                },
                                                Icon { icon: FaEye, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "Download PDF",
                                                onclick: {
                                                    let card = card.clone();
                                                    let download = download.clone();
                                                    move |_| download(card.clone())
                                                },
                                                Icon { icon: FaDownload, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon",
                                                title: "Edit",
                                                onclick: {
                                                    let card = card.clone();
                                                    move |_| editor.set(Some(Editor::Edit(card.clone())))
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-icon btn-danger-text",
                                                title: "Delete",
                                                onclick: {
                                                    let card = card.clone();
                                                    move |_| deleting.set(Some(card.clone()))
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
                IdCardForm {
                    existing: match target {
                        Editor::Create => None,
                        Editor::Edit(card) => Some(card),
                    },
                    departments: known.departments.clone(),
                    on_saved: on_saved,
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some(card) = viewing() {
                IdCardDetails {
                    card: card,
                    lookups: known.clone(),
                    on_download: {
                        let download = download.clone();
                        move |card: IdCard| download(card)
                    },
                    on_updated: move |card: IdCard| {
                        viewing.set(Some(card));
                        reload += 1;
                    },
                    on_close: move |_| viewing.set(None),
                }
            }

            if let Some(card) = deleting() {
                ConfirmDialog {
                    title: "Delete ID Card",
                    message: format!("Are you sure you want to delete the ID card for {}? This cannot be undone.", card.full_name),
                    busy: busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn IdCardDetails(
    card: IdCard,
    lookups: Lookups,
    on_download: EventHandler<IdCard>,
    on_updated: EventHandler<IdCard>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let config = auth.config();
    let mut uploading = use_signal(|| false);

    let qr = qr_preview(&card, &lookups, &config);
    let card_id = card.id.clone();
    let change_picture = move |evt: FormEvent| {
        let card_id = card_id.clone();
        async move {
            let Some(picture) = picked_upload(&evt).await else { return };
            uploading.set(true);
            match auth.gateway().update_id_card_picture(&card_id, picture).await {
                Ok(updated) => {
                    toasts.success(auth.announce(messages::ID_CARD_PICTURE_UPDATE_SUCCESS));
                    on_updated.call(updated);
                }
                Err(e) => auth.report(toasts, &e, messages::ID_CARD_PICTURE_UPDATE_ERROR),
            }
            uploading.set(false);
        }
    };

    let address = &card.address;
    let for_download = card.clone();

    rsx! {
        Modal {
            title: "Employee Details",
            wide: true,
            on_close: on_close,
            div {
                class: "employee-detail",
                div {
                    class: "employee-photo",
                    img {
                        class: "photo",
                        src: employee_picture_url(&config.api.asset_origin, &card.employee_picture),
                        alt: "{card.full_name}",
                    }
                    label {
                        class: "btn btn-outline btn-sm",
                        if uploading() { "Uploading..." } else { "Change Photo" }
                        input {
                            class: "hidden",
                            r#type: "file",
                            accept: "image/*",
                            disabled: uploading(),
                            onchange: change_picture,
                        }
                    }
                }
                dl {
                    class: "detail-grid",
                    dt { "Name" }
                    dd { "{card.full_name}" }
                    dt { "ID" }
                    dd { "{card.id_card_number}" }
                    dt { "Designation" }
                    dd { "{lookups.designation_title(&card)}" }
                    dt { "Department" }
                    dd { "{lookups.department_name(&card)}" }
                    dt { "Type" }
                    dd { "{card.employee_type.label()}" }
                    dt { "Blood Group" }
                    dd { "{card.blood_group.as_str()}" }
                    dt { "Date of Birth" }
                    dd { "{card_date(&card.date_of_birth)}" }
                    dt { "Joined" }
                    dd { "{card_date(&card.date_of_joining)}" }
                    dt { "Mobile" }
                    dd { "{card.mobile_number}" }
                    dt { "Email" }
                    dd { "{card.email}" }
                    dt { "Address" }
                    dd { "{address.street}, {address.city}, {address.state} {address.zip_code}, {address.country}" }
                }
                div {
                    class: "employee-qr",
                    if let Some(src) = qr {
                        img { class: "qr", src: src, alt: "QR code for {card.id_card_number}" }
                    }
                    p { class: "muted", "Scan to verify" }
                }
            }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_download.call(for_download.clone()),
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " Download ID Card"
                }
            }
        }
    }
}

#[component]
fn IdCardForm(
    existing: Option<IdCard>,
    departments: Vec<Department>,
    on_saved: EventHandler<(IdCard, bool)>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let origin = auth.config().api.asset_origin;
    let creating = existing.is_none();

    let initial = existing.clone();
    let mut draft = use_signal(move || initial.as_ref().map(IdCardDraft::from).unwrap_or_default());
    let mut picture = use_signal(|| None::<Upload>);
    let mut busy = use_signal(|| false);

    let designations = use_resource(move || async move {
        let department = draft.read().department.clone();
        if department.is_empty() {
            return Vec::new();
        }
        auth.gateway()
            .designations_by_department(&department)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("could not load designations for {department}: {e}");
                Vec::new()
            })
    });

    let current_picture = existing.as_ref().map(|c| c.employee_picture.clone());
    let existing_id = existing.as_ref().map(|c| c.id.clone());
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft();
        if let Err(e) = validation::id_card(&body, creating, picture.peek().is_some()) {
            toasts.error(e.user_message(""));
            return;
        }
        let existing_id = existing_id.clone();
        spawn(async move {
            busy.set(true);
            let gateway = auth.gateway();
            let (result, failed) = match (existing_id, picture()) {
                (Some(id), upload) => (
                    gateway.update_id_card(&id, &body, upload).await,
                    messages::ID_CARD_UPDATE_ERROR,
                ),
                (None, Some(upload)) => (
                    gateway.create_id_card(&body, upload).await,
                    messages::ID_CARD_CREATE_ERROR,
                ),
                (None, None) => {
                    busy.set(false);
                    return;
                }
            };
            match result {
                Ok(card) => on_saved.call((card, creating)),
                Err(e) => auth.report(toasts, &e, failed),
            }
            busy.set(false);
        });
    };

    let preview = picture
        .read()
        .as_ref()
        .map(preview_url)
        .or_else(|| current_picture.map(|path| employee_picture_url(&origin, &path)));
    let d = draft();

    rsx! {
        Modal {
            title: if creating { "Add Employee".to_string() } else { "Edit Employee".to_string() },
            wide: true,
            on_close: on_close,
            form {
                class: "form-stack",
                onsubmit: submit,
                div {
                    class: "form-row",
                    Field {
                        label: "Full Name",
                        required: true,
                        input {
                            class: "input",
                            value: d.full_name,
                            oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                        }
                    }
                    Field {
                        label: "Employee Type",
                        required: true,
                        select {
                            class: "select",
                            value: d.employee_type.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Some(kind) = EmployeeType::parse(&evt.value()) {
                                    draft.write().employee_type = kind;
                                }
                            },
                            for kind in EmployeeType::ALL {
                                option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Email",
                        required: true,
                        input {
                            class: "input",
                            r#type: "email",
                            value: d.email,
                            oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                        }
                    }
                    Field {
                        label: "Mobile Number",
                        required: true,
                        input {
                            class: "input",
                            r#type: "tel",
                            value: d.mobile_number,
                            oninput: move |evt: FormEvent| draft.write().mobile_number = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Date of Birth",
                        required: true,
                        input {
                            class: "input",
                            r#type: "date",
                            value: d.date_of_birth,
                            oninput: move |evt: FormEvent| draft.write().date_of_birth = evt.value(),
                        }
                    }
                    Field {
                        label: "Date of Joining",
                        required: true,
                        input {
                            class: "input",
                            r#type: "date",
                            value: d.date_of_joining,
                            oninput: move |evt: FormEvent| draft.write().date_of_joining = evt.value(),
                        }
                    }
                    Field {
                        label: "Blood Group",
                        required: true,
                        select {
                            class: "select",
                            value: d.blood_group.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Some(group) = BloodGroup::parse(&evt.value()) {
                                    draft.write().blood_group = group;
                                }
                            },
                            for group in BloodGroup::ALL {
                                option { key: "{group.as_str()}", value: group.as_str(), "{group.as_str()}" }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Department",
                        required: true,
                        select {
                            class: "select",
                            value: d.department,
                            onchange: move |evt: FormEvent| {
                                let mut d = draft.write();
                                d.department = evt.value();
                                d.designation.clear();
                            },
                            option { value: "", "Select department" }
                            for dept in departments.iter() {
                                option { key: "{dept.id}", value: "{dept.id}", "{dept.name}" }
                            }
                        }
                    }
                    Field {
                        label: "Designation",
                        required: true,
                        select {
                            class: "select",
                            value: d.designation,
                            onchange: move |evt: FormEvent| draft.write().designation = evt.value(),
                            option { value: "", "Select designation" }
                            for desig in designations.cloned().unwrap_or_default() {
                                option { key: "{desig.id}", value: "{desig.id}", "{desig.title}" }
                            }
                        }
                    }
                }
                fieldset {
                    class: "fieldset",
                    legend { "Address" }
                    Field {
                        label: "Street",
                        input {
                            class: "input",
                            value: d.address.street,
                            oninput: move |evt: FormEvent| draft.write().address.street = evt.value(),
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            label: "City",
                            input {
                                class: "input",
                                value: d.address.city,
                                oninput: move |evt: FormEvent| draft.write().address.city = evt.value(),
                            }
                        }
                        Field {
                            label: "State",
                            input {
                                class: "input",
                                value: d.address.state,
                                oninput: move |evt: FormEvent| draft.write().address.state = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            label: "ZIP Code",
                            input {
                                class: "input",
                                value: d.address.zip_code,
                                oninput: move |evt: FormEvent| draft.write().address.zip_code = evt.value(),
                            }
                        }
                        Field {
                            label: "Country",
                            input {
                                class: "input",
                                value: d.address.country,
                                oninput: move |evt: FormEvent| draft.write().address.country = evt.value(),
                            }
                        }
                    }
                }
                Field {
                    label: "Employee Picture",
                    required: creating,
                    if let Some(src) = preview {
                        img { class: "photo", src: src }
                    }
                    input {
                        class: "input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| async move {
                            picture.set(picked_upload(&evt).await);
                        },
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: busy(),
                        if busy() { "Saving..." } else if creating { "Create ID Card" } else { "Update ID Card" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn demo_lookups() -> (Gateway, Lookups) {
        let gateway = Gateway::Demo(store::DemoBackend::new());
        let lookups = Lookups::load(&gateway).await.unwrap();
        (gateway, lookups)
    }

    #[tokio::test]
    async fn names_resolve_or_fall_back() {
        let (gateway, lookups) = demo_lookups().await;
        let john = gateway.get_id_card("idcard-1").await.unwrap();
        assert_eq!(lookups.department_name(&john), "Engineering");
        assert_eq!(lookups.designation_title(&john), "Software Engineer");

        // Emily's department and designation were never seeded.
        let emily = gateway.get_id_card("idcard-4").await.unwrap();
        assert_eq!(lookups.department_name(&emily), UNKNOWN_DEPARTMENT);
        assert_eq!(lookups.designation_title(&emily), UNKNOWN_DESIGNATION);
    }

    #[tokio::test]
    async fn qr_preview_is_an_svg_data_url() {
        let (gateway, lookups) = demo_lookups().await;
        let card = gateway.get_id_card("idcard-2").await.unwrap();
        let url = qr_preview(&card, &lookups, &DashboardConfig::default()).unwrap();
        assert!(url.starts_with("data:image/svg+xml"));
    }
}
