//! Catalog
//!
//! The pure part of the browser: records, filtering, paging and evolution
//! trees. Nothing in here touches the network, storage or a display.
//!
//! ## Components
//!
//! - **types**: `Pokemon` records and the type tag table
//! - **wire**: upstream JSON payload shapes and their conversions
//! - **region**: the static table of region ranges
//! - **filter**: `FilterCriteria` and the filter engine
//! - **pagination**: page slicing and page controls
//! - **evolution**: branching evolution trees and linearization policies

mod error;
mod evolution;
mod filter;
mod pagination;
mod region;
mod types;
pub mod wire;

pub use error::{CatalogError, CatalogResult};
pub use evolution::{EvolutionNode, EvolutionTree, Linearization, Linearized};
pub use filter::FilterCriteria;
pub use pagination::{clamp_page, page_count, paginate, Page, PageControls, DEFAULT_PAGE_SIZE};
pub use region::Region;
pub use types::{is_known_type, Pokemon, PokemonId, ResourceRef, Stat, TYPE_TAGS};
pub use wire::Species;
