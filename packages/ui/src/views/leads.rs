use api::{Backend, Contact, ContactStats, ContactStatus, ListQuery, Page};
use dioxus::prelude::*;

use crate::components::{ConfirmDialog, Modal, Pagination, SearchBox, Spinner, StatCard, StatusBadge};
use crate::format::short_date;
use crate::icons::{FaEye, FaTrash};
use crate::{messages, use_auth, use_toasts, Icon};

/// Contact form submissions, filterable by status.
#[component]
pub fn LeadsView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let limit = auth.config().paging.leads;

    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<ContactStatus>);
    let mut reload = use_signal(|| 0u32);
    let mut viewing = use_signal(|| None::<Contact>);
    let mut deleting = use_signal(|| None::<Contact>);
    let mut busy = use_signal(|| false);

    let contacts = use_resource(move || async move {
        let _ = reload();
        let mut query = ListQuery::page(page(), limit).with_search(&search());
        if let Some(status) = status_filter() {
            query = query.with_status(status.as_str());
        }
        match auth.gateway().list_contacts(&query).await {
            Ok(found) => found,
            Err(e) => {
                auth.report(toasts, &e, messages::CONTACT_LOAD_ERROR);
                Page::empty()
            }
        }
    });

    let stats = use_resource(move || async move {
        let _ = reload();
        match auth.gateway().contact_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                auth.report(toasts, &e, messages::CONTACT_STATS_LOAD_ERROR);
                ContactStats::default()
            }
        }
    });

    let mut set_status = move |contact: Contact, status: ContactStatus| {
        spawn(async move {
            match auth.gateway().update_contact_status(&contact.id, status).await {
                Ok(updated) => {
                    toasts.success(auth.announce(messages::CONTACT_UPDATE_SUCCESS));
                    if viewing.peek().as_ref().is_some_and(|c| c.id == updated.id) {
                        viewing.set(Some(updated));
                    }
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::CONTACT_UPDATE_ERROR),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(contact) = deleting() else { return };
        spawn(async move {
            busy.set(true);
            match auth.gateway().delete_contact(&contact.id).await {
                Ok(()) => {
                    toasts.success(auth.announce(messages::CONTACT_DELETE_SUCCESS));
                    deleting.set(None);
                    reload += 1;
                }
                Err(e) => auth.report(toasts, &e, messages::CONTACT_DELETE_ERROR),
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
                    h1 { class: "page-title", "Leads" }
                    p { class: "page-subtitle", "Messages sent through the contact form" }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total", value: stats.total.to_string(), tone: "blue" }
                StatCard { label: "New", value: stats.new.to_string(), tone: "green" }
                StatCard { label: "Read", value: stats.read.to_string(), tone: "orange" }
                StatCard { label: "Replied", value: stats.replied.to_string(), tone: "purple" }
                StatCard { label: "Closed", value: stats.closed.to_string(), tone: "gray" }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: search(),
                    placeholder: "Search by name, email or subject...",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                select {
                    class: "select",
                    value: status_filter().map(|s| s.as_str()).unwrap_or(""),
                    onchange: move |evt: FormEvent| {
                        status_filter.set(ContactStatus::parse(&evt.value()));
                        page.set(1);
                    },
                    option { value: "", "All Status" }
                    for status in ContactStatus::ALL {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }

            match contacts() {
                None => rsx! { Spinner { label: "Loading leads..." } },
                Some(found) if found.items.is_empty() => rsx! {
                    div { class: "empty-state", "No leads found" }
                },
                Some(found) => rsx! {
                    div {
                        class: "lead-grid",
                        for contact in found.items.iter().cloned() {
                            LeadCard {
                                key: "{contact.id}",
                                contact: contact.clone(),
                                on_view: move |c: Contact| viewing.set(Some(c)),
                                on_status: move |(c, s): (Contact, ContactStatus)| set_status(c, s),
                                on_delete: move |c: Contact| deleting.set(Some(c)),
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

            if let Some(contact) = viewing() {
                Modal {
                    title: "Lead Details",
                    on_close: move |_| viewing.set(None),
                    dl {
                        class: "detail-grid",
                        dt { "Name" }
                        dd { "{contact.full_name}" }
                        dt { "Email" }
                        dd { a { href: "mailto:{contact.email_address}", "{contact.email_address}" } }
                        dt { "Mobile" }
                        dd { {contact.mobile_number.clone().unwrap_or_else(|| "N/A".to_string())} }
                        dt { "Subject" }
                        dd { "{contact.subject}" }
                        dt { "Status" }
                        dd { StatusBadge { status: contact.status } }
                        dt { "Received" }
                        dd { "{short_date(&contact.created_at)}" }
                    }
                    p { class: "lead-message", "{contact.message}" }
                    div {
                        class: "modal-actions",
                        for status in ContactStatus::ALL.into_iter().filter(|s| *s != contact.status) {
                            button {
                                key: "{status.as_str()}",
                                class: "btn btn-outline btn-sm",
                                onclick: {
                                    let contact = contact.clone();
                                    move |_| set_status(contact.clone(), status)
                                },
                                "Mark as {status.label()}"
                            }
                        }
                    }
                }
            }

            if let Some(contact) = deleting() {
                ConfirmDialog {
                    title: "Delete Lead",
                    message: format!("Delete the message from {}? This cannot be undone.", contact.full_name),
                    busy: busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn LeadCard(
    contact: Contact,
    on_view: EventHandler<Contact>,
    on_status: EventHandler<(Contact, ContactStatus)>,
    on_delete: EventHandler<Contact>,
) -> Element {
    let for_view = contact.clone();
    let for_status = contact.clone();
    let for_delete = contact.clone();
    rsx! {
        div {
            class: "card lead-card",
            div {
                class: "lead-card-header",
                div {
                    p { class: "lead-name", "{contact.full_name}" }
                    p { class: "lead-email", "{contact.email_address}" }
                }
                StatusBadge { status: contact.status }
            }
            p { class: "lead-subject", "{contact.subject}" }
            p { class: "lead-preview", "{contact.message}" }
            div {
                class: "lead-card-footer",
                span { class: "muted", "{short_date(&contact.created_at)}" }
                div {
                    class: "row-actions",
                    select {
                        class: "select select-sm",
                        value: contact.status.as_str(),
                        onchange: move |evt: FormEvent| {
                            if let Some(status) = ContactStatus::parse(&evt.value()) {
                                on_status.call((for_status.clone(), status));
                            }
                        },
                        for status in ContactStatus::ALL {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "View",
                        onclick: move |_| on_view.call(for_view.clone()),
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost btn-icon btn-danger-text",
                        title: "Delete",
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
