//! # Pokedex
//!
//! Catalog browser for the public PokeAPI: search, type and region filters,
//! paged cards, persistent favorites and a detail panel with a stat chart
//! and the evolution chain.
//!
//! ## Modules
//!
//! - [`catalog`]: records, filtering, pagination and evolution trees
//! - [`favorites`]: the favorites set over a key-value store
//! - [`source`]: async access to the upstream API
//! - [`app`]: controller, view state and the rendering seam
//! - `config` and `terminal`: native-only configuration and text renderer
//!
//! The `native` feature (on by default) adds the reqwest client, the JSON
//! file store, TOML configuration and the terminal front end. Without it the
//! crate builds for wasm32 and is driven by the `pokedex-ui` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pokedex::app::{BrowserSettings, Controller};
//! use pokedex::favorites::{FavoritesStore, JsonFileStore};
//! use pokedex::source::{PokeApiClient, PokeApiConfig};
//! use pokedex::terminal::TerminalRenderer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(PokeApiClient::new(&PokeApiConfig::default())?);
//!     let favorites = FavoritesStore::load(JsonFileStore::new("favorites.json"));
//!     let renderer = TerminalRenderer::new(std::io::stdout());
//!
//!     let mut controller =
//!         Controller::new(source, favorites, renderer, BrowserSettings::default());
//!     controller.load().await?;
//!     controller.set_search("chu");
//!     controller.show_detail(25).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod catalog;
#[cfg(feature = "native")]
pub mod config;
pub mod favorites;
pub mod source;
#[cfg(feature = "native")]
pub mod terminal;

// Re-export top-level types for convenience
pub use catalog::{
    EvolutionTree, FilterCriteria, Linearization, Page, PageControls, Pokemon, PokemonId, Region,
    Stat,
};

pub use favorites::{FavoritesSet, FavoritesStore, KeyValueStore, MemoryStore, StoreError};

pub use source::{CatalogSource, MemorySource, SourceError};

pub use app::{AppError, BrowserSettings, Controller, Renderer};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
