//! Form checks run before any request is sent.
//!
//! Each validator collects every problem it finds and returns them together as
//! [`ApiError::Invalid`], so the form can show one toast listing all of them.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ApiError;
use crate::models::{
    DepartmentDraft, DesignationDraft, IdCardDraft, ProductDraft, SignupRequest,
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_DESIGNATION_LEVEL: u8 = 10;

type Checked = Result<(), ApiError>;

fn finish(errors: Vec<String>) -> Checked {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Invalid(errors))
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `\S+@\S+\.\S+` anywhere in the value.
pub fn looks_like_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

pub fn signup(request: &SignupRequest, confirm_password: &str) -> Checked {
    let mut errors = Vec::new();
    if blank(&request.full_name) {
        errors.push("Full name is required".to_string());
    }
    if blank(&request.email) {
        errors.push("Email is required".to_string());
    } else if !looks_like_email(&request.email) {
        errors.push("Please enter a valid email address".to_string());
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if request.password != confirm_password {
        errors.push("Passwords do not match".to_string());
    }
    finish(errors)
}

pub fn password_change(new_password: &str, confirm_password: &str) -> Checked {
    let mut errors = Vec::new();
    if new_password != confirm_password {
        errors.push("New passwords do not match".to_string());
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    finish(errors)
}

pub fn department(draft: &DepartmentDraft) -> Checked {
    let mut errors = Vec::new();
    if blank(&draft.name) {
        errors.push("Department name is required".to_string());
    }
    if blank(&draft.code) {
        errors.push("Department code is required".to_string());
    }
    finish(errors)
}

pub fn designation(draft: &DesignationDraft) -> Checked {
    let mut errors = Vec::new();
    if blank(&draft.title) {
        errors.push("Designation title is required".to_string());
    }
    if blank(&draft.department) {
        errors.push("Department is required".to_string());
    }
    if !(1..=MAX_DESIGNATION_LEVEL).contains(&draft.level) {
        errors.push(format!(
            "Level must be between 1 and {MAX_DESIGNATION_LEVEL}"
        ));
    }
    finish(errors)
}

/// Parse the price box. Empty means no price.
pub fn parse_price(input: &str) -> Result<Option<f64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err("Price must be a valid positive number".to_string()),
    }
}

/// `has_main_image` is only consulted on create.
pub fn product(draft: &ProductDraft, price_input: &str, creating: bool, has_main_image: bool) -> Checked {
    let mut errors = Vec::new();
    if creating && !has_main_image {
        errors.push("Main image is required".to_string());
    }
    if blank(&draft.product_name) {
        errors.push("Product name is required".to_string());
    }
    if draft.product_features.iter().all(|f| blank(f)) {
        errors.push("At least one product feature is required".to_string());
    }
    if let Err(message) = parse_price(price_input) {
        errors.push(message);
    }
    finish(errors)
}

pub fn id_card(draft: &IdCardDraft, creating: bool, has_picture: bool) -> Checked {
    let mut errors = Vec::new();
    if creating && !has_picture {
        errors.push("Employee picture is required".to_string());
    }
    let required = [
        (&draft.full_name, "Full name"),
        (&draft.email, "Email"),
        (&draft.mobile_number, "Mobile number"),
        (&draft.date_of_birth, "Date of birth"),
        (&draft.date_of_joining, "Date of joining"),
        (&draft.department, "Department"),
        (&draft.designation, "Designation"),
    ];
    for (value, label) in required {
        if blank(value) {
            errors.push(format!("{label} is required"));
        }
    }
    if !blank(&draft.email) && !looks_like_email(&draft.email) {
        errors.push("Please enter a valid email address".to_string());
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(result: Checked) -> Vec<String> {
        match result {
            Err(ApiError::Invalid(errors)) => errors,
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(()) => Vec::new(),
        }
    }

    #[test]
    fn email_pattern_is_loose() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("name with space x@y.z"));
        assert!(!looks_like_email("admin@mychoice"));
        assert!(!looks_like_email("@."));
    }

    #[test]
    fn signup_reports_every_problem() {
        let req = SignupRequest::admin("", "nope", "abc");
        let errors = messages(signup(&req, "abd"));
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&"Passwords do not match".to_string()));

        let ok = SignupRequest::admin("Asha", "asha@mychoice.com", "secret1");
        assert!(signup(&ok, "secret1").is_ok());
    }

    #[test]
    fn password_change_needs_six_matching_chars() {
        assert!(password_change("abcdef", "abcdef").is_ok());
        assert_eq!(messages(password_change("abc", "abc")).len(), 1);
        assert_eq!(messages(password_change("abcdefg", "abcdefh")).len(), 1);
    }

    #[test]
    fn designation_level_bounds() {
        let mut draft = DesignationDraft {
            title: "Lead".into(),
            department: "dept-1".into(),
            ..DesignationDraft::default()
        };
        assert!(designation(&draft).is_ok());
        draft.level = 10;
        assert!(designation(&draft).is_ok());
        draft.level = 0;
        assert!(designation(&draft).is_err());
        draft.level = 11;
        assert!(designation(&draft).is_err());
    }

    #[test]
    fn department_needs_name_and_code() {
        let errors = messages(department(&DepartmentDraft::default()));
        assert_eq!(
            errors,
            vec!["Department name is required", "Department code is required"]
        );
    }

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price(""), Ok(None));
        assert_eq!(parse_price(" 12.50 "), Ok(Some(12.5)));
        assert_eq!(parse_price("0"), Ok(Some(0.0)));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("ten").is_err());
        assert!(parse_price("NaN").is_err());
    }

    #[test]
    fn product_requires_image_only_on_create() {
        let draft = ProductDraft {
            product_name: "Fan".into(),
            product_features: vec!["  ".into(), "Silent".into()],
            ..ProductDraft::default()
        };
        assert!(product(&draft, "", false, false).is_ok());
        assert_eq!(
            messages(product(&draft, "", true, false)),
            vec!["Main image is required"]
        );

        let no_features = ProductDraft {
            product_name: "Fan".into(),
            product_features: vec![" ".into()],
            ..ProductDraft::default()
        };
        assert_eq!(
            messages(product(&no_features, "-3", false, false)),
            vec![
                "At least one product feature is required",
                "Price must be a valid positive number"
            ]
        );
    }

    #[test]
    fn id_card_required_fields() {
        let errors = messages(id_card(&IdCardDraft::default(), true, false));
        assert_eq!(errors[0], "Employee picture is required");
        assert_eq!(errors.len(), 8);

        let draft = IdCardDraft {
            full_name: "Emily Davis".into(),
            email: "emily@company.com".into(),
            mobile_number: "+1-555-0126".into(),
            date_of_birth: "1995-12-05".into(),
            date_of_joining: "2023-09-01".into(),
            department: "dept-4".into(),
            designation: "desig-5".into(),
            ..IdCardDraft::default()
        };
        assert!(id_card(&draft, false, false).is_ok());
        assert!(id_card(&draft, true, true).is_ok());
    }
}
