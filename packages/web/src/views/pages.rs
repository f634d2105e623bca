//! One route per dashboard page; each just mounts the shared view.

use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! { ui::views::DashboardView {} }
}

#[component]
pub fn Leads() -> Element {
    rsx! { ui::views::LeadsView {} }
}

#[component]
pub fn Products() -> Element {
    rsx! { ui::views::ProductsView {} }
}

#[component]
pub fn Departments() -> Element {
    rsx! { ui::views::DepartmentsView {} }
}

#[component]
pub fn Designations() -> Element {
    rsx! { ui::views::DesignationsView {} }
}

#[component]
pub fn IdCards() -> Element {
    rsx! { ui::views::IdCardsView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::views::ProfileView {} }
}
