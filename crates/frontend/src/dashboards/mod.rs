pub mod d402_parts_tracking;

pub use d402_parts_tracking::DashboardController;
