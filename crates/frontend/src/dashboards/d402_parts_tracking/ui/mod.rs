pub mod bulk_panel;
pub mod controller;
pub mod details;
pub mod responsible_modal;
pub mod search;

pub use controller::DashboardController;
