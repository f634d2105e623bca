//! # Employee ID cards
//!
//! An [`IdCard`] is the employee record of the dashboard: personal details,
//! organisational placement and the picture printed on the physical card.
//! [`IdCardDraft`] is what the create/edit form submits; the picture travels
//! separately as an [`Upload`](super::Upload) because the endpoint is multipart.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{Keyed, Ref};
use super::organization::{Department, Designation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Intern,
    Temporary,
}

impl EmployeeType {
    pub const ALL: [EmployeeType; 5] = [
        EmployeeType::FullTime,
        EmployeeType::PartTime,
        EmployeeType::Contract,
        EmployeeType::Intern,
        EmployeeType::Temporary,
    ];

    /// Wire value, e.g. `full-time`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "full-time",
            EmployeeType::PartTime => "part-time",
            EmployeeType::Contract => "contract",
            EmployeeType::Intern => "intern",
            EmployeeType::Temporary => "temporary",
        }
    }

    /// Human label, e.g. `Full Time`.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "Full Time",
            EmployeeType::PartTime => "Part Time",
            EmployeeType::Contract => "Contract",
            EmployeeType::Intern => "Intern",
            EmployeeType::Temporary => "Temporary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[default]
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCard {
    #[serde(rename = "_id")]
    pub id: String,
    pub id_card_number: String,
    #[serde(default)]
    pub employee_picture: String,
    #[serde(default)]
    pub employee_type: EmployeeType,
    pub full_name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub blood_group: BloodGroup,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_joining: String,
    #[serde(default)]
    pub department: Ref<Department>,
    #[serde(default)]
    pub designation: Ref<Designation>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Keyed for IdCard {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Fields of the ID card form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardDraft {
    pub employee_type: EmployeeType,
    pub full_name: String,
    pub address: Address,
    pub blood_group: BloodGroup,
    pub mobile_number: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    /// `YYYY-MM-DD`
    pub date_of_joining: String,
    pub department: String,
    pub designation: String,
}

/// The date part of an ISO timestamp, for `<input type="date">`.
fn date_input(iso: &str) -> String {
    iso.split('T').next().unwrap_or_default().to_string()
}

impl From<&IdCard> for IdCardDraft {
    fn from(card: &IdCard) -> Self {
        Self {
            employee_type: card.employee_type,
            full_name: card.full_name.clone(),
            address: card.address.clone(),
            blood_group: card.blood_group,
            mobile_number: card.mobile_number.clone(),
            email: card.email.clone(),
            date_of_birth: date_input(&card.date_of_birth),
            date_of_joining: date_input(&card.date_of_joining),
            department: card.department.id().to_string(),
            designation: card.designation.id().to_string(),
        }
    }
}

impl IdCardDraft {
    /// Multipart text fields in the order the backend expects them.
    /// The picture part is added by the caller.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("employeeType".to_string(), self.employee_type.as_str().to_string()),
            ("fullName".to_string(), self.full_name.clone()),
        ];
        for (key, value) in [
            ("street", &self.address.street),
            ("city", &self.address.city),
            ("state", &self.address.state),
            ("zipCode", &self.address.zip_code),
            ("country", &self.address.country),
        ] {
            fields.push((format!("address[{key}]"), value.clone()));
        }
        fields.extend([
            ("bloodGroup".to_string(), self.blood_group.as_str().to_string()),
            ("mobileNumber".to_string(), self.mobile_number.clone()),
            ("email".to_string(), self.email.clone()),
            ("dateOfBirth".to_string(), self.date_of_birth.clone()),
            ("dateOfJoining".to_string(), self.date_of_joining.clone()),
            ("department".to_string(), self.department.clone()),
            ("designation".to_string(), self.designation.clone()),
        ]);
        fields
    }
}

/// Counts per employee type as sent by `/id-cards/stats/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDistribution {
    #[serde(rename = "full-time", default)]
    pub full_time: u64,
    #[serde(rename = "part-time", default)]
    pub part_time: u64,
    #[serde(default)]
    pub contract: u64,
    #[serde(default)]
    pub intern: u64,
    #[serde(default)]
    pub temporary: u64,
}

impl TypeDistribution {
    pub fn bump(&mut self, employee_type: EmployeeType) {
        match employee_type {
            EmployeeType::FullTime => self.full_time += 1,
            EmployeeType::PartTime => self.part_time += 1,
            EmployeeType::Contract => self.contract += 1,
            EmployeeType::Intern => self.intern += 1,
            EmployeeType::Temporary => self.temporary += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardStats {
    #[serde(default)]
    pub total_id_cards: u64,
    #[serde(default)]
    pub active_id_cards: u64,
    #[serde(default)]
    pub inactive_id_cards: u64,
    #[serde(default)]
    pub employee_type_distribution: TypeDistribution,
    /// Department id to card count.
    #[serde(default)]
    pub department_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub recent_id_cards: Vec<IdCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_card_with_wire_enums() {
        let json = r#"{"_id":"idcard-1","idCardNumber":"EMP001","employeePicture":"/uploads/x.png",
            "employeeType":"part-time","fullName":"John Smith",
            "address":{"street":"123 Main Street","city":"New York","state":"NY","zipCode":"10001","country":"USA"},
            "bloodGroup":"AB-","mobileNumber":"+1-555-0123","email":"john.smith@company.com",
            "dateOfBirth":"1990-05-15T00:00:00.000Z","dateOfJoining":"2023-01-15",
            "department":"dept-1","designation":{"_id":"desig-1","title":"Software Engineer"},
            "isActive":true,"createdAt":"2024-01-15T10:00:00.000Z"}"#;
        let card: IdCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.employee_type, EmployeeType::PartTime);
        assert_eq!(card.blood_group, BloodGroup::AbNegative);
        assert_eq!(card.address.zip_code, "10001");
        assert_eq!(card.designation.id(), "desig-1");

        let draft = IdCardDraft::from(&card);
        assert_eq!(draft.date_of_birth, "1990-05-15");
        assert_eq!(draft.date_of_joining, "2023-01-15");
        assert_eq!(draft.designation, "desig-1");
    }

    #[test]
    fn form_fields_use_bracketed_address_keys() {
        let draft = IdCardDraft {
            full_name: "Emily Davis".into(),
            address: Address {
                street: "321 Elm Street".into(),
                zip_code: "33101".into(),
                ..Address::default()
            },
            blood_group: BloodGroup::OPositive,
            employee_type: EmployeeType::Intern,
            ..IdCardDraft::default()
        };
        let fields = draft.form_fields();
        let get = |k: &str| {
            fields
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("employeeType"), Some("intern"));
        assert_eq!(get("address[street]"), Some("321 Elm Street"));
        assert_eq!(get("address[zipCode]"), Some("33101"));
        assert_eq!(get("bloodGroup"), Some("O+"));
        assert_eq!(fields.len(), 15);
    }

    #[test]
    fn enum_parsing_matches_wire_values() {
        assert_eq!(EmployeeType::parse("temporary"), Some(EmployeeType::Temporary));
        assert_eq!(EmployeeType::parse("Temporary"), None);
        assert_eq!(BloodGroup::parse("B-"), Some(BloodGroup::BNegative));
        assert_eq!(EmployeeType::FullTime.label(), "Full Time");
    }

    #[test]
    fn stats_decode_type_distribution() {
        let json = r#"{"totalIdCards":3,"activeIdCards":2,"inactiveIdCards":1,
            "employeeTypeDistribution":{"full-time":2,"part-time":0,"contract":1,"intern":0,"temporary":0},
            "departmentDistribution":{"dept-1":2,"dept-2":1},"recentIdCards":[]}"#;
        let stats: IdCardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.employee_type_distribution.full_time, 2);
        assert_eq!(stats.department_distribution["dept-2"], 1);
    }
}
