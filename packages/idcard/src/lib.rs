//! # Employee ID cards
//!
//! Turns an [`api::IdCard`] into a printable two-sided card:
//!
//! 1. [`CardData::merge`] resolves department and designation names and
//!    formats every field the card prints.
//! 2. [`qr`] builds the verification payload and its module matrix.
//! 3. [`layout`] places everything on an A4 page, front and back side by side.
//! 4. [`render`] writes the page out as PDF bytes.
//!
//! [`generate`] runs the whole pipeline.

pub mod layout;
pub mod merge;
pub mod qr;
pub mod render;

pub use layout::{CardPage, Element, Font, Rgb};
pub use merge::CardData;
pub use qr::QrMatrix;
pub use render::RenderError;

use api::{DashboardConfig, Department, Designation, IdCard};

/// A rendered card ready to be saved.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Merge, lay out and render `card` in one go.
pub fn generate(
    card: &IdCard,
    departments: &[Department],
    designations: &[Designation],
    config: &DashboardConfig,
) -> Result<CardPdf, RenderError> {
    let data = CardData::merge(card, departments, designations, config);
    let matrix = QrMatrix::encode(&data.qr_payload)?;
    let page = layout::card_page(&data, &matrix);
    let bytes = render::to_pdf(&page, &format!("ID Card {}", data.id_card_number))?;
    tracing::info!(
        "rendered ID card {} ({} bytes)",
        data.id_card_number,
        bytes.len()
    );
    Ok(CardPdf {
        filename: pdf_filename(&data.id_card_number, &data.full_name),
        bytes,
    })
}

/// `ID_Card_<number>_<name>.pdf`, each whitespace run in the name becoming `_`.
pub fn pdf_filename(id_card_number: &str, full_name: &str) -> String {
    let mut name = String::with_capacity(full_name.len());
    let mut in_space = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    format!("ID_Card_{id_card_number}_{name}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Address, BloodGroup, EmployeeType, Ref};

    #[test]
    fn filename_collapses_whitespace() {
        assert_eq!(pdf_filename("EMP001", "John Smith"), "ID_Card_EMP001_John_Smith.pdf");
        assert_eq!(
            pdf_filename("EMP002", "Mary  Ann\tLee"),
            "ID_Card_EMP002_Mary_Ann_Lee.pdf"
        );
        assert_eq!(pdf_filename("EMP003", " Solo"), "ID_Card_EMP003__Solo.pdf");
    }

    #[test]
    fn generate_produces_pdf() {
        let card = IdCard {
            id: "idcard-1".into(),
            id_card_number: "EMP001".into(),
            employee_picture: String::new(),
            employee_type: EmployeeType::FullTime,
            full_name: "John Smith".into(),
            address: Address::default(),
            blood_group: BloodGroup::APositive,
            mobile_number: "+1-555-0123".into(),
            email: "john.smith@company.com".into(),
            date_of_birth: "1990-05-15".into(),
            date_of_joining: "2023-01-15".into(),
            department: Ref::from("dept-1"),
            designation: Ref::from("desig-1"),
            is_active: true,
            created_at: "2024-01-15T10:00:00.000Z".into(),
            updated_at: None,
        };
        let pdf = generate(&card, &[], &[], &DashboardConfig::default()).unwrap();
        assert_eq!(pdf.filename, "ID_Card_EMP001_John_Smith.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }
}
