pub mod cache;
pub mod row;
pub mod selection;

pub use cache::DetailsCache;
pub use row::{toggle_label, DetailsBody, RowPhase, RowState, ToggleStep};
pub use selection::Selection;
