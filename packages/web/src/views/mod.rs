mod auth;
pub use auth::{Login, Signup};

mod guarded;
pub use guarded::{Guarded, NotFound};

mod pages;
pub use pages::{Dashboard, Departments, Designations, IdCards, Leads, Products, Profile};
