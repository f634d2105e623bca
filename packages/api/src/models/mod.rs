//! Wire models mirrored from the backend's JSON.
//!
//! Field names follow the backend (`camelCase`, `_id` keys) through serde
//! renames; Rust-side names are snake_case.

mod admin;
mod common;
mod contact;
mod dashboard;
mod id_card;
mod organization;
mod product;

pub use admin::{Admin, AuthPayload, Credentials, PasswordChange, ProfileUpdate, SignupRequest};
pub use common::{Keyed, ListQuery, Page, Ref, SortOrder, Upload};
pub use contact::{Contact, ContactStats, ContactStatus};
pub use dashboard::{
    ChartData, ChartPoint, DashboardOverview, Distribution, MonthKey, NamedRef, RecentActivity,
    RecentContact, RecentDepartment, RecentDesignation, RecentEmployee, RecentLogin,
    RecentProduct,
};
pub use id_card::{
    Address, BloodGroup, EmployeeType, IdCard, IdCardDraft, IdCardStats, TypeDistribution,
};
pub use organization::{Department, DepartmentDraft, Designation, DesignationDraft};
pub use product::{Product, ProductCategory, ProductDraft};
