mod layout;
pub use layout::AppLayoutView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod dashboard;
pub use dashboard::DashboardView;

mod leads;
pub use leads::LeadsView;

mod products;
pub use products::ProductsView;

mod departments;
pub use departments::DepartmentsView;

mod designations;
pub use designations::DesignationsView;

mod id_cards;
pub use id_cards::IdCardsView;

mod profile;
pub use profile::ProfileView;
