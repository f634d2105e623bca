//! Live-or-demo dispatch.
//!
//! [`Backend`] uses return-position `impl Future`, so it cannot be a trait
//! object. [`Gateway`] is the closed set of implementations the UI can hold
//! and forwards each call to whichever one is active.

use api::*;

use crate::demo::DemoBackend;

#[derive(Clone, Debug, PartialEq)]
pub enum Gateway {
    Live(ApiClient),
    Demo(DemoBackend),
}

impl Gateway {
    /// `demo` is shared so demo edits survive a gateway rebuild.
    pub fn for_mode(
        demo_mode: bool,
        config: &DashboardConfig,
        token: Option<String>,
        demo: &DemoBackend,
    ) -> Self {
        if demo_mode {
            Gateway::Demo(demo.clone())
        } else {
            Gateway::Live(ApiClient::from_config(config).with_token(token))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Gateway::Demo(_))
    }
}

macro_rules! forward {
    ($( fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty; )*) => {
        impl Backend for Gateway {
            $(
                async fn $name(&self $(, $arg: $ty)*) -> ApiResult<$ret> {
                    match self {
                        Gateway::Live(client) => client.$name($($arg),*).await,
                        Gateway::Demo(demo) => demo.$name($($arg),*).await,
                    }
                }
            )*
        }
    };
}

forward! {
    fn login(&self, credentials: &Credentials) -> AuthPayload;
    fn signup(&self, request: &SignupRequest) -> AuthPayload;
    fn profile(&self) -> Admin;
    fn update_profile(&self, update: &ProfileUpdate) -> Admin;
    fn change_password(&self, change: &PasswordChange) -> ();
    fn logout(&self) -> ();

    fn list_departments(&self, query: &ListQuery) -> Page<Department>;
    fn get_department(&self, id: &str) -> Department;
    fn create_department(&self, draft: &DepartmentDraft) -> Department;
    fn update_department(&self, id: &str, draft: &DepartmentDraft) -> Department;
    fn delete_department(&self, id: &str) -> ();
    fn active_departments(&self) -> Vec<Department>;

    fn list_designations(&self, query: &ListQuery) -> Page<Designation>;
    fn get_designation(&self, id: &str) -> Designation;
    fn create_designation(&self, draft: &DesignationDraft) -> Designation;
    fn update_designation(&self, id: &str, draft: &DesignationDraft) -> Designation;
    fn delete_designation(&self, id: &str) -> ();
    fn designations_by_department(&self, department_id: &str) -> Vec<Designation>;
    fn active_designations(&self) -> Vec<Designation>;

    fn list_products(&self, query: &ListQuery) -> Page<Product>;
    fn get_product(&self, id: &str) -> Product;
    fn create_product(&self, draft: &ProductDraft, main_image: Upload) -> Product;
    fn update_product(&self, id: &str, draft: &ProductDraft) -> Product;
    fn delete_product(&self, id: &str) -> ();
    fn product_categories(&self) -> Vec<ProductCategory>;
    fn upload_product_images(&self, id: &str, images: Vec<Upload>) -> Product;
    fn update_product_main_image(&self, id: &str, image: Upload) -> Product;

    fn list_id_cards(&self, query: &ListQuery) -> Page<IdCard>;
    fn get_id_card(&self, id: &str) -> IdCard;
    fn get_id_card_by_number(&self, number: &str) -> IdCard;
    fn create_id_card(&self, draft: &IdCardDraft, picture: Upload) -> IdCard;
    fn update_id_card(&self, id: &str, draft: &IdCardDraft, picture: Option<Upload>) -> IdCard;
    fn update_id_card_picture(&self, id: &str, picture: Upload) -> IdCard;
    fn delete_id_card(&self, id: &str) -> ();
    fn id_card_stats(&self) -> IdCardStats;

    fn list_contacts(&self, query: &ListQuery) -> Page<Contact>;
    fn get_contact(&self, id: &str) -> Contact;
    fn update_contact_status(&self, id: &str, status: ContactStatus) -> Contact;
    fn delete_contact(&self, id: &str) -> ();
    fn contact_stats(&self) -> ContactStats;

    fn dashboard_overview(&self) -> DashboardOverview;
    fn dashboard_charts(&self) -> ChartData;
    fn recent_activity(&self, limit: u32) -> RecentActivity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_gateway_answers_from_fixtures() {
        let demo = DemoBackend::new();
        let gateway = Gateway::for_mode(true, &DashboardConfig::default(), None, &demo);
        assert!(gateway.is_demo());
        let departments = gateway.active_departments().await.unwrap();
        assert_eq!(departments.len(), 3);

        gateway.delete_department("dept-3").await.unwrap();
        // The rebuilt gateway sees the same demo state.
        let rebuilt = Gateway::for_mode(true, &DashboardConfig::default(), None, &demo);
        assert_eq!(rebuilt.active_departments().await.unwrap().len(), 2);
    }

    #[test]
    fn live_gateway_carries_token() {
        let config = DashboardConfig::default().with_base_url("https://api.my-choice.co.in/api/");
        let gateway = Gateway::for_mode(false, &config, Some("jwt".into()), &DemoBackend::new());
        match gateway {
            Gateway::Live(client) => {
                assert_eq!(client.token(), Some("jwt"));
                assert_eq!(client.base_url(), "https://api.my-choice.co.in/api");
            }
            Gateway::Demo(_) => panic!("expected live gateway"),
        }
    }
}
