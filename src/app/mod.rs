//! Application layer
//!
//! Ties the catalog, the favorites store and a catalog source together
//! behind a controller that renders through an injected [`Renderer`].
//!
//! ## Architecture
//!
//! - **Controller**: single owner of [`AppState`]
//! - **Renderer**: display seam (terminal, browser, test recorder)
//! - **Walker**: sequential evolution chain resolution
//! - **ViewToken**: ties pending fetches to a detail view's lifetime
//! - **Command**: text commands of the terminal browser

mod command;
mod controller;
mod error;
mod render;
mod state;
mod token;
mod walker;

pub use command::{Command, HELP};
pub use controller::{BrowserSettings, Controller, DetailRequest};
pub use error::{AppError, AppResult};
pub use render::{
    CardView, ChartHandle, DetailTab, DetailView, EvolutionView, Renderer, StageView, StatChart,
    Summary,
};
pub use state::{AppState, DetailSession};
pub use token::ViewToken;
pub use walker::{walk_evolution, EvolutionWalk, WalkOutcome};
