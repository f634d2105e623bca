//! Everything the card prints, resolved and formatted.

use api::media::employee_picture_url;
use api::{DashboardConfig, Department, Designation, IdCard};
use chrono::{DateTime, NaiveDate};

use crate::qr;

pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";
pub const UNKNOWN_DESIGNATION: &str = "Unknown Designation";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardData {
    pub id_card_number: String,
    pub full_name: String,
    pub initials: String,
    pub designation: String,
    pub department: String,
    /// `FULL TIME`, `PART TIME`, ...
    pub employee_type: String,
    pub blood_group: String,
    pub date_of_birth: String,
    pub date_of_joining: String,
    pub mobile_number: String,
    pub email: String,
    /// Street, then `City, State ZIP`, then country.
    pub address: [String; 3],
    pub picture_url: String,
    pub company: String,
    pub helpline: String,
    pub qr_payload: String,
}

impl CardData {
    /// Resolve `card` against the known departments and designations.
    ///
    /// Populated references win; bare ids are looked up in the slices.
    pub fn merge(
        card: &IdCard,
        departments: &[Department],
        designations: &[Designation],
        config: &DashboardConfig,
    ) -> Self {
        let department = card
            .department
            .resolve(departments)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string());
        let designation = card
            .designation
            .resolve(designations)
            .map(|d| d.title.clone())
            .unwrap_or_else(|| UNKNOWN_DESIGNATION.to_string());

        let address = &card.address;
        let address = [
            or(&address.street, "Street Address"),
            format!(
                "{}, {} {}",
                or(&address.city, "City"),
                or(&address.state, "State"),
                or(&address.zip_code, "ZIP")
            ),
            or(&address.country, "Country"),
        ];

        Self {
            id_card_number: card.id_card_number.clone(),
            full_name: card.full_name.clone(),
            initials: initials(&card.full_name),
            designation,
            department,
            employee_type: card.employee_type.as_str().replacen('-', " ", 1).to_uppercase(),
            blood_group: card.blood_group.to_string(),
            date_of_birth: card_date(&card.date_of_birth),
            date_of_joining: card_date(&card.date_of_joining),
            mobile_number: card.mobile_number.clone(),
            email: card.email.clone(),
            address,
            picture_url: employee_picture_url(&config.api.asset_origin, &card.employee_picture),
            company: config.card.company.clone(),
            helpline: config.card.helpline.clone(),
            qr_payload: qr::payload(
                &config.card.portal_url,
                &card.id_card_number,
                &card.full_name,
            ),
        }
    }
}

fn or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Up to two leading letters, for the photo placeholder.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// `DD/MM/YYYY` from either `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn card_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|t| t.date_naive())
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        });
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Address, BloodGroup, EmployeeType, Ref};

    fn department() -> Department {
        Department {
            id: "dept-1".into(),
            name: "Engineering".into(),
            description: String::new(),
            code: "ENG".into(),
            is_active: true,
            created_at: String::new(),
            updated_at: None,
        }
    }

    fn card() -> IdCard {
        IdCard {
            id: "idcard-1".into(),
            id_card_number: "EMP001".into(),
            employee_picture: "/uploads/employees/pictures/employee-1.png".into(),
            employee_type: EmployeeType::PartTime,
            full_name: "John Smith".into(),
            address: Address {
                street: "123 Main Street".into(),
                city: "New York".into(),
                state: String::new(),
                zip_code: "10001".into(),
                country: String::new(),
            },
            blood_group: BloodGroup::AbNegative,
            mobile_number: "+1-555-0123".into(),
            email: "john.smith@company.com".into(),
            date_of_birth: "1990-05-15T00:00:00.000Z".into(),
            date_of_joining: "2023-01-15".into(),
            department: Ref::from("dept-1"),
            designation: Ref::from("desig-9"),
            is_active: true,
            created_at: String::new(),
            updated_at: None,
        }
    }

    #[test]
    fn resolves_names_and_fallbacks() {
        let data = CardData::merge(&card(), &[department()], &[], &DashboardConfig::default());
        assert_eq!(data.department, "Engineering");
        assert_eq!(data.designation, UNKNOWN_DESIGNATION);
        assert_eq!(data.employee_type, "PART TIME");
        assert_eq!(data.blood_group, "AB-");
        assert_eq!(data.initials, "JS");
        assert_eq!(
            data.address,
            [
                "123 Main Street".to_string(),
                "New York, State 10001".to_string(),
                "Country".to_string()
            ]
        );
        assert_eq!(
            data.picture_url,
            "http://localhost:3100/uploads/employees/pictures/employee-1.png"
        );
        assert_eq!(data.helpline, "+91-03345013784");
        assert_eq!(
            data.qr_payload,
            "https://employes.my-choice.co.in?id=EMP001&name=John%20Smith"
        );
    }

    #[test]
    fn populated_department_wins_over_lookup() {
        let mut card = card();
        card.department = Ref::Populated(department());
        let data = CardData::merge(&card, &[], &[], &DashboardConfig::default());
        assert_eq!(data.department, "Engineering");
    }

    #[test]
    fn dates_print_day_first() {
        assert_eq!(card_date("1990-05-15"), "15/05/1990");
        assert_eq!(card_date("2023-01-15T10:00:00.000Z"), "15/01/2023");
        assert_eq!(card_date(""), "Invalid Date");
        assert_eq!(card_date("yesterday"), "Invalid Date");
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("mary ann lee"), "MA");
        assert_eq!(initials(""), "");
    }
}
