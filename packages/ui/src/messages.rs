//! Toast texts shown after user actions.

pub const LOGIN_SUCCESS: &str = "Login successful! Welcome back.";
pub const LOGIN_ERROR: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_SUCCESS: &str = "Account created successfully! Welcome aboard.";
pub const SIGNUP_ERROR: &str = "Account creation failed. Please try again.";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully.";
pub const PROFILE_UPDATE_SUCCESS: &str = "Profile updated successfully.";
pub const PROFILE_UPDATE_ERROR: &str = "Profile update failed. Please try again.";
pub const PASSWORD_CHANGE_SUCCESS: &str = "Password changed successfully.";
pub const PASSWORD_CHANGE_ERROR: &str = "Password change failed. Please try again.";

pub const DEPARTMENT_CREATE_SUCCESS: &str = "Department created successfully!";
pub const DEPARTMENT_CREATE_ERROR: &str = "Failed to create department. Please try again.";
pub const DEPARTMENT_UPDATE_SUCCESS: &str = "Department updated successfully!";
pub const DEPARTMENT_UPDATE_ERROR: &str = "Failed to update department. Please try again.";
pub const DEPARTMENT_DELETE_SUCCESS: &str = "Department deleted successfully!";
pub const DEPARTMENT_DELETE_ERROR: &str = "Failed to delete department. Please try again.";
pub const DEPARTMENT_LOAD_ERROR: &str = "Failed to load departments. Please refresh the page.";

pub const DESIGNATION_CREATE_SUCCESS: &str = "Designation created successfully!";
pub const DESIGNATION_CREATE_ERROR: &str = "Failed to create designation. Please try again.";
pub const DESIGNATION_UPDATE_SUCCESS: &str = "Designation updated successfully!";
pub const DESIGNATION_UPDATE_ERROR: &str = "Failed to update designation. Please try again.";
pub const DESIGNATION_DELETE_SUCCESS: &str = "Designation deleted successfully!";
pub const DESIGNATION_DELETE_ERROR: &str = "Failed to delete designation. Please try again.";
pub const DESIGNATION_LOAD_ERROR: &str = "Failed to load designations. Please refresh the page.";

pub const ID_CARD_CREATE_SUCCESS: &str = "ID Card created successfully!";
pub const ID_CARD_CREATE_ERROR: &str = "Failed to create ID Card. Please try again.";
pub const ID_CARD_UPDATE_SUCCESS: &str = "ID Card updated successfully!";
pub const ID_CARD_UPDATE_ERROR: &str = "Failed to update ID Card. Please try again.";
pub const ID_CARD_DELETE_SUCCESS: &str = "ID Card deleted successfully!";
pub const ID_CARD_DELETE_ERROR: &str = "Failed to delete ID Card. Please try again.";
pub const ID_CARD_LOAD_ERROR: &str = "Failed to load ID Cards. Please refresh the page.";
pub const ID_CARD_PICTURE_UPDATE_SUCCESS: &str = "Employee picture updated successfully!";
pub const ID_CARD_PICTURE_UPDATE_ERROR: &str =
    "Failed to update employee picture. Please try again.";
pub const ID_CARD_GENERATE_SUCCESS: &str = "ID Card PDF generated successfully!";
pub const ID_CARD_GENERATE_ERROR: &str = "Failed to generate ID Card PDF";

pub const PRODUCT_CREATE_SUCCESS: &str = "Product created successfully!";
pub const PRODUCT_UPDATE_SUCCESS: &str = "Product updated successfully!";
pub const PRODUCT_DELETE_SUCCESS: &str = "Product deleted successfully!";
pub const PRODUCT_SAVE_ERROR: &str = "Failed to save product. Please try again.";
pub const PRODUCT_DELETE_ERROR: &str = "Failed to delete product. Please try again.";
pub const PRODUCT_LOAD_ERROR: &str = "Failed to load products. Please try again.";

pub const CONTACT_LOAD_ERROR: &str = "Failed to load contacts. Please try again.";
pub const CONTACT_UPDATE_SUCCESS: &str = "Contact status updated successfully!";
pub const CONTACT_UPDATE_ERROR: &str = "Failed to update contact status. Please try again.";
pub const CONTACT_DELETE_SUCCESS: &str = "Contact deleted successfully!";
pub const CONTACT_DELETE_ERROR: &str = "Failed to delete contact. Please try again.";
pub const CONTACT_STATS_LOAD_ERROR: &str = "Failed to load contact statistics.";

pub const DASHBOARD_LOAD_ERROR: &str = "Failed to load dashboard data. Please try again.";
pub const DASHBOARD_REFRESH_SUCCESS: &str = "Dashboard refreshed successfully!";
pub const DASHBOARD_REFRESH_ERROR: &str = "Failed to refresh dashboard. Please try again.";

pub const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";
pub const DEMO_MODE_SWITCH: &str = "Switched to demo mode. All changes are simulated.";
pub const REAL_MODE_SWITCH: &str = "Switched to real mode. Changes will be saved to server.";
