//! Building blocks shared by the dashboard views.

mod modal;
pub use modal::{ConfirmDialog, Modal};

mod pagination;
pub use pagination::{page_window, Pagination};

mod badge;
pub use badge::{ActiveBadge, Badge, StatusBadge};

mod stat_card;
pub use stat_card::StatCard;

mod field;
pub use field::{Field, SearchBox, Spinner};
