use dioxus::prelude::*;

use crate::icons::{
    FaBars, FaBox, FaBriefcase, FaBuilding, FaGauge, FaIdCard, FaRightFromBracket, FaUser,
    FaUsers, FaXmark,
};
use crate::{use_auth, Icon};

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Leads,
    Products,
    Departments,
    Designations,
    IdCards,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 7] = [
        NavItem::Dashboard,
        NavItem::Leads,
        NavItem::Products,
        NavItem::Departments,
        NavItem::Designations,
        NavItem::IdCards,
        NavItem::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Leads => "My Leads",
            NavItem::Products => "My Products",
            NavItem::Departments => "Departments",
            NavItem::Designations => "Designations",
            NavItem::IdCards => "ID Cards",
            NavItem::Profile => "Profile",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        NavItem::Leads => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavItem::Products => rsx! { Icon { icon: FaBox, width: 16, height: 16 } },
        NavItem::Departments => rsx! { Icon { icon: FaBuilding, width: 16, height: 16 } },
        NavItem::Designations => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        NavItem::IdCards => rsx! { Icon { icon: FaIdCard, width: 16, height: 16 } },
        NavItem::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

#[component]
pub fn Sidebar(
    active: NavItem,
    collapsed: bool,
    on_toggle: EventHandler<()>,
    on_navigate: EventHandler<NavItem>,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let user = auth.user();
    let name = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Admin User".to_string());
    let email = user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    let initial = user.as_ref().map(|u| u.initial()).unwrap_or('A');

    rsx! {
        aside {
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },

            div {
                class: "sidebar-header",
                if !collapsed {
                    h1 { class: "sidebar-brand", "Mychoice" }
                }
                button {
                    class: "sidebar-toggle",
                    title: if collapsed { "Expand" } else { "Collapse" },
                    onclick: move |_| on_toggle.call(()),
                    if collapsed {
                        Icon { icon: FaBars, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
            }

            if !collapsed {
                div {
                    class: "sidebar-user",
                    span { class: "avatar", "{initial}" }
                    div {
                        p { class: "sidebar-user-name", "{name}" }
                        p { class: "sidebar-user-email", "{email}" }
                    }
                }
            }

            nav {
                class: "sidebar-nav",
                for item in NavItem::ALL {
                    button {
                        key: "{item.label()}",
                        class: if item == active { "nav-item active" } else { "nav-item" },
                        title: if collapsed { item.label() } else { "" },
                        onclick: move |_| on_navigate.call(item),
                        NavIcon { item: item }
                        if !collapsed {
                            span { "{item.label()}" }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "nav-item logout",
                    title: if collapsed { "Logout" } else { "" },
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    if !collapsed {
                        span { "Logout" }
                    }
                }
            }
        }
    }
}
