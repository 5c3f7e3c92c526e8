pub mod api_utils;
pub mod config;
pub mod dialogs;
pub mod dom_utils;
pub mod modal_frame;
pub mod modal_stack;
