//! Region ranges
//!
//! Each region groups the entities introduced in one release generation
//! as a closed interval of identifiers.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::CatalogError;
use super::types::PokemonId;

/// A named closed interval of identifiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
}

impl Region {
    /// Get all regions in release order
    pub fn all() -> &'static [Region] {
        &[
            Region::Kanto,
            Region::Johto,
            Region::Hoenn,
            Region::Sinnoh,
            Region::Unova,
            Region::Kalos,
            Region::Alola,
            Region::Galar,
            Region::Paldea,
        ]
    }

    /// Inclusive identifier bounds
    pub fn bounds(&self) -> (PokemonId, PokemonId) {
        match self {
            Region::Kanto => (1, 151),
            Region::Johto => (152, 251),
            Region::Hoenn => (252, 386),
            Region::Sinnoh => (387, 493),
            Region::Unova => (494, 649),
            Region::Kalos => (650, 721),
            Region::Alola => (722, 809),
            Region::Galar => (810, 905),
            Region::Paldea => (906, 1025),
        }
    }

    pub fn range(&self) -> RangeInclusive<PokemonId> {
        let (start, end) = self.bounds();
        start..=end
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.range().contains(&id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Kanto => "kanto",
            Region::Johto => "johto",
            Region::Hoenn => "hoenn",
            Region::Sinnoh => "sinnoh",
            Region::Unova => "unova",
            Region::Kalos => "kalos",
            Region::Alola => "alola",
            Region::Galar => "galar",
            Region::Paldea => "paldea",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Region::all()
            .iter()
            .copied()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownRegion(s.to_string()))
    }
}
