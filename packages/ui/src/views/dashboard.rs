use api::{ApiResult, Backend, ChartData, DashboardOverview, Distribution, RecentActivity};
use dioxus::prelude::*;
use store::Gateway;

use crate::components::{Spinner, StatCard};
use crate::format::{relative_time, thousands, title_case};
use crate::icons::FaArrowsRotate;
use crate::{messages, use_auth, use_toasts, Icon};

const RECENT_LIMIT: u32 = 10;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    overview: DashboardOverview,
    charts: ChartData,
    activity: RecentActivity,
}

async fn load(gateway: &Gateway) -> ApiResult<DashboardData> {
    Ok(DashboardData {
        overview: gateway.dashboard_overview().await?,
        charts: gateway.dashboard_charts().await?,
        activity: gateway.recent_activity(RECENT_LIMIT).await?,
    })
}

#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut data = use_signal(|| None::<DashboardData>);
    let mut refreshing = use_signal(|| false);

    let _ = use_resource(move || async move {
        match load(&auth.gateway()).await {
            Ok(loaded) => data.set(Some(loaded)),
            Err(e) => {
                auth.report(toasts, &e, messages::DASHBOARD_LOAD_ERROR);
                data.set(Some(DashboardData::default()));
            }
        }
    });

    let refresh = move |_| {
        spawn(async move {
            refreshing.set(true);
            match load(&auth.gateway()).await {
                Ok(loaded) => {
                    data.set(Some(loaded));
                    toasts.success(auth.announce(messages::DASHBOARD_REFRESH_SUCCESS));
                }
                Err(e) => auth.report(toasts, &e, messages::DASHBOARD_REFRESH_ERROR),
            }
            refreshing.set(false);
        });
    };

    let Some(data) = data() else {
        return rsx! {
            div { class: "page", Spinner { label: "Loading dashboard..." } }
        };
    };
    let overview = &data.overview;
    let now = chrono::Utc::now();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Overview of your business at a glance" }
                }
                button {
                    class: "btn btn-outline",
                    disabled: refreshing(),
                    onclick: refresh,
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    if refreshing() { " Refreshing..." } else { " Refresh" }
                }
            }

            div {
                class: "stat-grid",
                StatCard {
                    label: "Total Products",
                    value: thousands(overview.total_products),
                    hint: format!("+{} this week", thousands(overview.recent_products)),
                    tone: "blue",
                }
                StatCard {
                    label: "Total Leads",
                    value: thousands(overview.total_contacts),
                    hint: format!("{} pending", thousands(overview.pending_contacts)),
                    tone: "green",
                }
                StatCard {
                    label: "Employees",
                    value: thousands(overview.total_employees),
                    hint: format!("+{} this week", thousands(overview.recent_employees)),
                    tone: "purple",
                }
                StatCard {
                    label: "Departments",
                    value: thousands(overview.total_departments),
                    hint: format!("{} designations", thousands(overview.total_designations)),
                    tone: "orange",
                }
                StatCard {
                    label: "Admins",
                    value: thousands(overview.total_admins),
                    hint: format!("{} recent logins", thousands(overview.recent_logins)),
                    tone: "gray",
                }
            }

            div {
                class: "panel-grid",
                DistributionPanel {
                    title: "Leads by Status",
                    buckets: data.charts.contact_status_distribution.clone(),
                }
                DistributionPanel {
                    title: "Employees by Type",
                    buckets: data.charts.employee_type_distribution.clone(),
                }
                DistributionPanel {
                    title: "Employees by Department",
                    buckets: data.charts.department_distribution.clone(),
                }
            }

            div {
                class: "panel-grid",
                div {
                    class: "card",
                    h2 { class: "card-title", "Recent Leads" }
                    if data.activity.recent_contacts.is_empty() {
                        p { class: "muted", "No recent leads" }
                    }
                    ul {
                        class: "activity-list",
                        for contact in data.activity.recent_contacts.iter() {
                            li {
                                key: "{contact.id}",
                                div {
                                    p { class: "activity-title", "{contact.full_name}" }
                                    p { class: "activity-meta", "{contact.subject}" }
                                }
                                span { class: "activity-time", "{relative_time(&contact.created_at, now)}" }
                            }
                        }
                    }
                }
                div {
                    class: "card",
                    h2 { class: "card-title", "Recent Products" }
                    if data.activity.recent_products.is_empty() {
                        p { class: "muted", "No recent products" }
                    }
                    ul {
                        class: "activity-list",
                        for product in data.activity.recent_products.iter() {
                            li {
                                key: "{product.id}",
                                div {
                                    p { class: "activity-title", "{product.product_name}" }
                                    if let Some(by) = &product.created_by {
                                        p { class: "activity-meta", "by {by.label()}" }
                                    }
                                }
                                span { class: "activity-time", "{relative_time(&product.created_at, now)}" }
                            }
                        }
                    }
                }
                div {
                    class: "card",
                    h2 { class: "card-title", "Recent Employees" }
                    if data.activity.recent_employees.is_empty() {
                        p { class: "muted", "No recent employees" }
                    }
                    ul {
                        class: "activity-list",
                        for employee in data.activity.recent_employees.iter() {
                            li {
                                key: "{employee.id}",
                                div {
                                    p { class: "activity-title", "{employee.full_name}" }
                                    p {
                                        class: "activity-meta",
                                        "{employee.id_card_number}"
                                        if let Some(dept) = &employee.department {
                                            " · {dept.label()}"
                                        }
                                    }
                                }
                                span { class: "activity-time", "{relative_time(&employee.created_at, now)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DistributionPanel(title: String, buckets: Vec<Distribution>) -> Element {
    let largest = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "{title}" }
            if buckets.is_empty() {
                p { class: "muted", "No data yet" }
            }
            for bucket in buckets.iter() {
                div {
                    key: "{bucket.key}",
                    class: "bar-row",
                    span { class: "bar-label", {bucket_label(&bucket.key)} }
                    div {
                        class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: "width: {bar_percent(bucket.count, largest)}%",
                        }
                    }
                    span { class: "bar-count", "{thousands(bucket.count)}" }
                }
            }
        }
    }
}

fn bar_percent(count: u64, largest: u64) -> u64 {
    count * 100 / largest.max(1)
}

fn bucket_label(key: &str) -> String {
    if key.is_empty() {
        "Unassigned".to_string()
    } else {
        title_case(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_labels() {
        assert_eq!(bucket_label(""), "Unassigned");
        assert_eq!(bucket_label("full-time"), "Full Time");
        assert_eq!(bucket_label("new"), "New");
    }

    #[test]
    fn bars_scale_to_largest_bucket() {
        assert_eq!(bar_percent(5, 10), 50);
        assert_eq!(bar_percent(10, 10), 100);
        assert_eq!(bar_percent(0, 0), 0);
    }

    #[tokio::test]
    async fn demo_dashboard_loads_every_section() {
        let gateway = Gateway::Demo(store::DemoBackend::new());
        let data = load(&gateway).await.unwrap();
        assert_eq!(data.overview.total_employees, 5);
        assert!(!data.charts.employee_type_distribution.is_empty());
        assert!(data.activity.recent_employees.len() <= RECENT_LIMIT as usize);
    }
}
