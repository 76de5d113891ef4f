//! In-memory catalog source
//!
//! Serves canned records and logs every request in order, which lets tests
//! assert on the fetch sequence of the evolution walk.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::{CatalogSource, SourceError, SourceResult};
use crate::catalog::{EvolutionTree, Pokemon, ResourceRef, Species};

/// Catalog source backed by maps
#[derive(Debug, Default)]
pub struct MemorySource {
    pokemon: Vec<Pokemon>,
    species: HashMap<String, Species>,
    chains: HashMap<String, EvolutionTree>,
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link under which a record is listed
    pub fn pokemon_url(id: u32) -> String {
        format!("memory://pokemon/{}", id)
    }

    /// Builder method: add a record, listed in insertion order
    pub fn with_pokemon(mut self, pokemon: Pokemon) -> Self {
        self.pokemon.push(pokemon);
        self
    }

    /// Builder method: add a species resource
    pub fn with_species(mut self, url: impl Into<String>, species: Species) -> Self {
        self.species.insert(url.into(), species);
        self
    }

    /// Builder method: add an evolution chain resource
    pub fn with_chain(mut self, url: impl Into<String>, tree: EvolutionTree) -> Self {
        self.chains.insert(url.into(), tree);
        self
    }

    /// Builder method: make requests for `key` (a URL or a name) fail
    pub fn fail_on(mut self, key: impl Into<String>) -> Self {
        self.failing.insert(key.into());
        self
    }

    /// Every request key served so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, key: &str) -> SourceResult<()> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(key.to_string());
        }
        if self.failing.contains(key) {
            return Err(SourceError::Network(format!("connection refused: {}", key)));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl CatalogSource for MemorySource {
    async fn list(&self, limit: usize) -> SourceResult<Vec<ResourceRef>> {
        self.record("list")?;
        Ok(self
            .pokemon
            .iter()
            .take(limit)
            .map(|p| ResourceRef {
                name: p.name.clone(),
                url: Self::pokemon_url(p.id),
            })
            .collect())
    }

    async fn pokemon_at(&self, url: &str) -> SourceResult<Pokemon> {
        self.record(url)?;
        self.pokemon
            .iter()
            .find(|p| Self::pokemon_url(p.id) == url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(url.to_string()))
    }

    async fn pokemon_named(&self, name: &str) -> SourceResult<Pokemon> {
        self.record(name)?;
        self.pokemon
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }

    async fn species(&self, url: &str) -> SourceResult<Species> {
        self.record(url)?;
        self.species
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(url.to_string()))
    }

    async fn evolution_chain(&self, url: &str) -> SourceResult<EvolutionTree> {
        self.record(url)?;
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(url.to_string()))
    }
}
