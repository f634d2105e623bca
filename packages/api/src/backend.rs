//! # Backend: every operation the dashboard performs
//!
//! [`Backend`] is the seam between the views and whatever answers their
//! requests. [`ApiClient`](crate::ApiClient) speaks the REST contract; the
//! demo-mode fixture store in the `store` crate answers from memory. Views are
//! written once against the trait and never know which one they got.
//!
//! | Group | Operations |
//! |-------|------------|
//! | Auth | `login`, `signup`, `profile`, `update_profile`, `change_password`, `logout` |
//! | Departments | list / get / create / update / delete, `active_departments` |
//! | Designations | list / get / create / update / delete, `designations_by_department`, `active_designations` |
//! | Products | list / get / create / update / delete, `product_categories`, image uploads |
//! | ID cards | list / get / by number / create / update / picture / delete, `id_card_stats` |
//! | Contacts | list / get / status / delete, `contact_stats` |
//! | Dashboard | `dashboard_overview`, `dashboard_charts`, `recent_activity` |
//!
//! List operations take a [`ListQuery`] and return a normalised [`Page`].

use std::future::Future;

use crate::error::ApiError;
use crate::models::*;

pub type ApiResult<T> = Result<T, ApiError>;

/// Async interface over the dashboard backend.
pub trait Backend {
    // ---- auth ----
    fn login(&self, credentials: &Credentials) -> impl Future<Output = ApiResult<AuthPayload>>;
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = ApiResult<AuthPayload>>;
    fn profile(&self) -> impl Future<Output = ApiResult<Admin>>;
    fn update_profile(&self, update: &ProfileUpdate) -> impl Future<Output = ApiResult<Admin>>;
    fn change_password(&self, change: &PasswordChange) -> impl Future<Output = ApiResult<()>>;
    fn logout(&self) -> impl Future<Output = ApiResult<()>>;

    // ---- departments ----
    fn list_departments(&self, query: &ListQuery)
        -> impl Future<Output = ApiResult<Page<Department>>>;
    fn get_department(&self, id: &str) -> impl Future<Output = ApiResult<Department>>;
    fn create_department(
        &self,
        draft: &DepartmentDraft,
    ) -> impl Future<Output = ApiResult<Department>>;
    fn update_department(
        &self,
        id: &str,
        draft: &DepartmentDraft,
    ) -> impl Future<Output = ApiResult<Department>>;
    fn delete_department(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn active_departments(&self) -> impl Future<Output = ApiResult<Vec<Department>>>;

    // ---- designations ----
    fn list_designations(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<Page<Designation>>>;
    fn get_designation(&self, id: &str) -> impl Future<Output = ApiResult<Designation>>;
    fn create_designation(
        &self,
        draft: &DesignationDraft,
    ) -> impl Future<Output = ApiResult<Designation>>;
    fn update_designation(
        &self,
        id: &str,
        draft: &DesignationDraft,
    ) -> impl Future<Output = ApiResult<Designation>>;
    fn delete_designation(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn designations_by_department(
        &self,
        department_id: &str,
    ) -> impl Future<Output = ApiResult<Vec<Designation>>>;
    fn active_designations(&self) -> impl Future<Output = ApiResult<Vec<Designation>>>;

    // ---- products ----
    fn list_products(&self, query: &ListQuery) -> impl Future<Output = ApiResult<Page<Product>>>;
    fn get_product(&self, id: &str) -> impl Future<Output = ApiResult<Product>>;
    fn create_product(
        &self,
        draft: &ProductDraft,
        main_image: Upload,
    ) -> impl Future<Output = ApiResult<Product>>;
    fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> impl Future<Output = ApiResult<Product>>;
    fn delete_product(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn product_categories(&self) -> impl Future<Output = ApiResult<Vec<ProductCategory>>>;
    fn upload_product_images(
        &self,
        id: &str,
        images: Vec<Upload>,
    ) -> impl Future<Output = ApiResult<Product>>;
    fn update_product_main_image(
        &self,
        id: &str,
        image: Upload,
    ) -> impl Future<Output = ApiResult<Product>>;

    // ---- id cards ----
    fn list_id_cards(&self, query: &ListQuery) -> impl Future<Output = ApiResult<Page<IdCard>>>;
    fn get_id_card(&self, id: &str) -> impl Future<Output = ApiResult<IdCard>>;
    fn get_id_card_by_number(&self, number: &str) -> impl Future<Output = ApiResult<IdCard>>;
    fn create_id_card(
        &self,
        draft: &IdCardDraft,
        picture: Upload,
    ) -> impl Future<Output = ApiResult<IdCard>>;
    fn update_id_card(
        &self,
        id: &str,
        draft: &IdCardDraft,
        picture: Option<Upload>,
    ) -> impl Future<Output = ApiResult<IdCard>>;
    fn update_id_card_picture(
        &self,
        id: &str,
        picture: Upload,
    ) -> impl Future<Output = ApiResult<IdCard>>;
    fn delete_id_card(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn id_card_stats(&self) -> impl Future<Output = ApiResult<IdCardStats>>;

    // ---- contacts ----
    fn list_contacts(&self, query: &ListQuery) -> impl Future<Output = ApiResult<Page<Contact>>>;
    fn get_contact(&self, id: &str) -> impl Future<Output = ApiResult<Contact>>;
    fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> impl Future<Output = ApiResult<Contact>>;
    fn delete_contact(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn contact_stats(&self) -> impl Future<Output = ApiResult<ContactStats>>;

    // ---- dashboard ----
    fn dashboard_overview(&self) -> impl Future<Output = ApiResult<DashboardOverview>>;
    fn dashboard_charts(&self) -> impl Future<Output = ApiResult<ChartData>>;
    fn recent_activity(&self, limit: u32) -> impl Future<Output = ApiResult<RecentActivity>>;
}
