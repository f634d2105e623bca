use api::ContactStatus;
use dioxus::prelude::*;

#[component]
pub fn Badge(tone: String, label: String) -> Element {
    rsx! {
        span { class: "badge badge-{tone}", "{label}" }
    }
}

#[component]
pub fn StatusBadge(status: ContactStatus) -> Element {
    rsx! {
        Badge { tone: status.as_str().to_string(), label: status.label().to_string() }
    }
}

#[component]
pub fn ActiveBadge(active: bool) -> Element {
    if active {
        rsx! { Badge { tone: "active", label: "Active" } }
    } else {
        rsx! { Badge { tone: "inactive", label: "Inactive" } }
    }
}
