//! UI Components
//!
//! Leptos components for the catalog browser.

pub mod card_grid;
pub mod chart;
pub mod detail;
pub mod filters;
pub mod loading;
pub mod pagination;
pub mod toast;

pub use card_grid::CardGrid;
pub use detail::DetailPanel;
pub use filters::Filters;
pub use loading::GridSkeleton;
pub use pagination::Pagination;
pub use toast::Toast;
