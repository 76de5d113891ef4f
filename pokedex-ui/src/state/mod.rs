//! State Management
//!
//! Global signals, the renderer writing them, notices and the shared
//! controller.

pub mod browser;
pub mod global;
pub mod notice;
pub mod renderer;
pub mod storage;

pub use browser::Browser;
pub use global::{provide_global_state, GlobalState};
pub use notice::Notice;
