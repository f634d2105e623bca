//! Read-only aggregates behind the dashboard landing page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOverview {
    pub total_admins: u64,
    pub total_products: u64,
    pub total_contacts: u64,
    pub total_employees: u64,
    pub total_departments: u64,
    pub total_designations: u64,
    pub recent_products: u64,
    pub recent_contacts: u64,
    pub recent_employees: u64,
    pub recent_departments: u64,
    pub recent_designations: u64,
    pub pending_contacts: u64,
    pub recent_logins: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(rename = "_id")]
    pub key: MonthKey,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Bucket label; `null` from the backend becomes empty.
    #[serde(rename = "_id", default, deserialize_with = "nullable_string")]
    pub key: String,
    pub count: u64,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartData {
    pub products_by_month: Vec<ChartPoint>,
    pub contacts_by_month: Vec<ChartPoint>,
    pub employees_by_month: Vec<ChartPoint>,
    pub contact_status_distribution: Vec<Distribution>,
    pub employee_type_distribution: Vec<Distribution>,
    pub department_distribution: Vec<Distribution>,
    pub designation_distribution: Vec<Distribution>,
}

/// A populated reference inside recent-activity rows. Which label field is
/// filled depends on the collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
}

impl NamedRef {
    pub fn label(&self) -> &str {
        [&self.name, &self.title, &self.full_name]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub created_by: Option<NamedRef>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentContact {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email_address: String,
    pub subject: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentEmployee {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub department: Option<NamedRef>,
    pub designation: Option<NamedRef>,
    pub created_by: Option<NamedRef>,
    pub id_card_number: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentDepartment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub created_by: Option<NamedRef>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentDesignation {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub level: u8,
    pub department: Option<NamedRef>,
    pub created_by: Option<NamedRef>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentLogin {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub last_login: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentActivity {
    pub recent_products: Vec<RecentProduct>,
    pub recent_contacts: Vec<RecentContact>,
    pub recent_employees: Vec<RecentEmployee>,
    pub recent_departments: Vec<RecentDepartment>,
    pub recent_designations: Vec<RecentDesignation>,
    pub recent_logins: Vec<RecentLogin>,
}

impl RecentActivity {
    pub fn is_empty(&self) -> bool {
        self.recent_products.is_empty()
            && self.recent_contacts.is_empty()
            && self.recent_employees.is_empty()
            && self.recent_departments.is_empty()
            && self.recent_designations.is_empty()
            && self.recent_logins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overview_defaults_missing_counts() {
        let overview: DashboardOverview =
            serde_json::from_str(r#"{"totalProducts":7,"pendingContacts":2}"#).unwrap();
        assert_eq!(overview.total_products, 7);
        assert_eq!(overview.pending_contacts, 2);
        assert_eq!(overview.total_admins, 0);
    }

    #[test]
    fn charts_decode_month_keys_and_null_buckets() {
        let json = r#"{"productsByMonth":[{"_id":{"year":2024,"month":3},"count":4}],
            "departmentDistribution":[{"_id":null,"count":1},{"_id":"Engineering","count":3}]}"#;
        let charts: ChartData = serde_json::from_str(json).unwrap();
        assert_eq!(charts.products_by_month[0].key, MonthKey { year: 2024, month: 3 });
        assert_eq!(charts.department_distribution[0].key, "");
        assert_eq!(charts.department_distribution[1].count, 3);
        assert!(charts.contacts_by_month.is_empty());
    }

    #[test]
    fn named_ref_label_picks_first_filled_field() {
        let creator: NamedRef =
            serde_json::from_str(r#"{"_id":"a1","fullName":"Demo Admin User"}"#).unwrap();
        assert_eq!(creator.label(), "Demo Admin User");
        let dept: NamedRef = serde_json::from_str(r#"{"_id":"d1","name":"Finance"}"#).unwrap();
        assert_eq!(dept.label(), "Finance");
    }
}
