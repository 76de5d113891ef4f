//! Catalog Source
//!
//! Async access to the upstream creature API.
//!
//! ## Implementations
//!
//! - **PokeApiClient**: reqwest client for native builds
//! - **MemorySource**: canned records for tests and offline fixtures
//!
//! The trait is `?Send` so the same controller code runs on a browser event
//! loop, where fetch futures are not `Send`.

#[cfg(feature = "native")]
mod client;
mod error;
mod memory;

#[cfg(feature = "native")]
pub use client::{PokeApiClient, PokeApiConfig};
pub use error::{SourceError, SourceResult};
pub use memory::MemorySource;

use async_trait::async_trait;
use futures_util::future::try_join_all;

use crate::catalog::{EvolutionTree, Pokemon, ResourceRef, Species};

/// Public PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Index size fetched at startup
pub const DEFAULT_LIST_LIMIT: usize = 1000;

/// Access to the four upstream resources the browser reads
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Summaries of up to `limit` entities, in dex order
    async fn list(&self, limit: usize) -> SourceResult<Vec<ResourceRef>>;

    /// Full record at a link returned by [`CatalogSource::list`]
    async fn pokemon_at(&self, url: &str) -> SourceResult<Pokemon>;

    /// Full record by name
    async fn pokemon_named(&self, name: &str) -> SourceResult<Pokemon>;

    async fn species(&self, url: &str) -> SourceResult<Species>;

    async fn evolution_chain(&self, url: &str) -> SourceResult<EvolutionTree>;
}

/// URL layout of the upstream API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn list(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={}", self.base, limit)
    }

    pub fn pokemon(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base, urlencoding::encode(name))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Fetch the index, then every record concurrently
///
/// Aborts on the first failed request; nothing is returned until every
/// record has arrived.
pub async fn load_dataset<S>(source: &S, limit: usize) -> SourceResult<Vec<Pokemon>>
where
    S: CatalogSource + ?Sized,
{
    let mut index = source.list(limit).await?;
    index.truncate(limit);
    tracing::info!("Fetched index of {} entries, loading details", index.len());

    let records = try_join_all(index.iter().map(|entry| source.pokemon_at(&entry.url)))
        .await
        .map_err(|e| {
            tracing::error!(kind = e.kind(), "Bulk load aborted: {}", e);
            e
        })?;

    tracing::info!("Loaded {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MemorySource {
        MemorySource::new()
            .with_pokemon(Pokemon::new(1, "bulbasaur"))
            .with_pokemon(Pokemon::new(2, "ivysaur"))
            .with_pokemon(Pokemon::new(3, "venusaur"))
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::new("https://pokeapi.co/api/v2/");
        assert_eq!(endpoints.list(1000), "https://pokeapi.co/api/v2/pokemon?limit=1000");
        assert_eq!(
            endpoints.pokemon("mr-mime"),
            "https://pokeapi.co/api/v2/pokemon/mr-mime"
        );
        assert_eq!(
            endpoints.pokemon("type null"),
            "https://pokeapi.co/api/v2/pokemon/type%20null"
        );
    }

    #[tokio::test]
    async fn test_load_keeps_index_order() {
        let source = fixture();
        let data = load_dataset(&source, 1000).await.unwrap();
        let ids: Vec<u32> = data.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_load_respects_limit() {
        let source = fixture();
        let data = load_dataset(&source, 2).await.unwrap();
        assert_eq!(data.len(), 2);
    }

    #[tokio::test]
    async fn test_load_aborts_on_first_failure() {
        let source = fixture().fail_on(MemorySource::pokemon_url(2));
        let err = load_dataset(&source, 1000).await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }
}
