//! Catalog error types

use thiserror::Error;

use super::types::PokemonId;

/// Errors raised when interpreting user input against the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Region name is not in the static table
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Type tag is not one the API knows
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// Identifier is not in the loaded dataset
    #[error("Pokemon not in dataset: #{0}")]
    UnknownPokemon(PokemonId),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
