//! Filter engine
//!
//! Pure selection of the dataset by the active criteria. Predicates are
//! combined with logical AND and the output keeps dataset order.

use serde::{Deserialize, Serialize};

use super::region::Region;
use super::types::Pokemon;
use crate::favorites::FavoritesSet;

/// The active combination of filter inputs
///
/// Every field defaults to "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the name
    #[serde(default)]
    pub search_text: String,
    /// Exact type tag
    #[serde(default)]
    pub type_tag: Option<String>,
    /// Identifier range
    #[serde(default)]
    pub region: Option<Region>,
    /// Only favorites
    #[serde(default)]
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Builder method: set type tag
    pub fn type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Builder method: set region
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Builder method: restrict to favorites
    pub fn favorites_only(mut self, on: bool) -> Self {
        self.favorites_only = on;
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.type_tag.is_none()
            && self.region.is_none()
            && !self.favorites_only
    }

    /// Check one record against every active predicate
    pub fn matches(&self, pokemon: &Pokemon, favorites: &FavoritesSet) -> bool {
        self.matcher(favorites).matches(pokemon)
    }

    /// Select the matching records, preserving dataset order
    pub fn apply<'a>(&self, dataset: &'a [Pokemon], favorites: &FavoritesSet) -> Vec<&'a Pokemon> {
        let matcher = self.matcher(favorites);
        dataset.iter().filter(|p| matcher.matches(p)).collect()
    }

    /// Positions of the matching records in `dataset`, ascending
    pub fn select(&self, dataset: &[Pokemon], favorites: &FavoritesSet) -> Vec<usize> {
        let matcher = self.matcher(favorites);
        dataset
            .iter()
            .enumerate()
            .filter(|(_, p)| matcher.matches(p))
            .map(|(i, _)| i)
            .collect()
    }

    fn matcher<'c>(&'c self, favorites: &'c FavoritesSet) -> Matcher<'c> {
        Matcher {
            needle: self.search_text.to_lowercase(),
            criteria: self,
            favorites,
        }
    }
}

/// Criteria with the search text lowered once per pass
struct Matcher<'c> {
    needle: String,
    criteria: &'c FilterCriteria,
    favorites: &'c FavoritesSet,
}

impl Matcher<'_> {
    fn matches(&self, pokemon: &Pokemon) -> bool {
        if !self.needle.is_empty() && !pokemon.name.to_lowercase().contains(&self.needle) {
            return false;
        }
        if let Some(tag) = &self.criteria.type_tag {
            if !pokemon.has_type(tag) {
                return false;
            }
        }
        if let Some(region) = self.criteria.region {
            if !region.contains(pokemon.id) {
                return false;
            }
        }
        if self.criteria.favorites_only && !self.favorites.contains(pokemon.id) {
            return false;
        }
        true
    }
}
