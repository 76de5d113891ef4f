//! Core data types for the catalog
//!
//! This module defines the records the browser works with:
//! - `Pokemon`: one entity's full detail record
//! - `Stat`: a named base stat
//! - `ResourceRef`: a named link returned by list endpoints
//! - `TYPE_TAGS`: the type names the upstream API knows about

use serde::{Deserialize, Serialize};

/// Identifier of an entity (the national dex number)
pub type PokemonId = u32;

/// A single entity's full detail record
///
/// Built from the upstream detail payload, see [`super::wire`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    /// Positive national dex number
    pub id: PokemonId,
    /// Display name (lowercase, as the API returns it)
    pub name: String,
    /// Type tags in slot order
    pub types: Vec<String>,
    /// Official artwork URL, when the API has one
    #[serde(default)]
    pub image_url: Option<String>,
    /// Base stats in API order
    pub stats: Vec<Stat>,
    /// Move names in API order
    #[serde(default)]
    pub moves: Vec<String>,
    /// Link to the species resource
    pub species_url: String,
}

impl Pokemon {
    /// Create a record with no types, stats or moves
    pub fn new(id: PokemonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: Vec::new(),
            image_url: None,
            stats: Vec::new(),
            moves: Vec::new(),
            species_url: String::new(),
        }
    }

    /// Builder method: add a type tag
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.types.push(tag.into());
        self
    }

    /// Builder method: add a base stat
    pub fn with_stat(mut self, name: impl Into<String>, value: u32) -> Self {
        self.stats.push(Stat {
            name: name.into(),
            value,
        });
        self
    }

    /// Builder method: add a move
    pub fn with_move(mut self, name: impl Into<String>) -> Self {
        self.moves.push(name.into());
        self
    }

    /// Builder method: set the artwork URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builder method: set the species link
    pub fn with_species(mut self, url: impl Into<String>) -> Self {
        self.species_url = url.into();
        self
    }

    /// Check if this record carries a type tag (exact match)
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }
}

/// A named base stat value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// A named link to another API resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// Type tags known to the upstream API, in its canonical order
pub const TYPE_TAGS: [&str; 18] = [
    "normal", "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel", "fire",
    "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy",
];

/// Check whether a tag is one the API knows
pub fn is_known_type(tag: &str) -> bool {
    TYPE_TAGS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_type_match() {
        let p = Pokemon::new(1, "bulbasaur")
            .with_type("grass")
            .with_type("poison")
            .with_stat("hp", 45)
            .with_stat("attack", 49);

        assert!(p.has_type("grass"));
        assert!(p.has_type("poison"));
        assert!(!p.has_type("Grass"));
        assert_eq!(p.base_stat_total(), 94);
    }

    #[test]
    fn test_known_types() {
        assert!(is_known_type("fairy"));
        assert!(!is_known_type("shadow"));
        assert_eq!(TYPE_TAGS.len(), 18);
    }
}
