//! HTTP Catalog Source
//!
//! `CatalogSource` over gloo-net for the browser build.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use pokedex::catalog::wire::{EvolutionChainPayload, ListPayload, PokemonPayload, SpeciesPayload};
use pokedex::catalog::{EvolutionTree, Pokemon, ResourceRef, Species};
use pokedex::source::{CatalogSource, Endpoints, SourceError, SourceResult, DEFAULT_BASE_URL};

/// Local storage key overriding the API root
const API_URL_KEY: &str = "pokedex_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// PokeAPI over `fetch`
#[derive(Debug, Clone)]
pub struct GlooSource {
    endpoints: Endpoints,
}

impl GlooSource {
    pub fn new(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("{}: {}", url, e)))?;

        if response.status() == 404 {
            return Err(SourceError::NotFound(url.to_string()));
        }
        if !response.ok() {
            return Err(SourceError::Network(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| SourceError::Decode(format!("{}: {}", url, e)))
    }
}

impl Default for GlooSource {
    fn default() -> Self {
        Self::new(&get_api_base())
    }
}

#[async_trait(?Send)]
impl CatalogSource for GlooSource {
    async fn list(&self, limit: usize) -> SourceResult<Vec<ResourceRef>> {
        let payload: ListPayload = self.get_json(&self.endpoints.list(limit)).await?;
        Ok(payload.results)
    }

    async fn pokemon_at(&self, url: &str) -> SourceResult<Pokemon> {
        let payload: PokemonPayload = self.get_json(url).await?;
        Ok(payload.into())
    }

    async fn pokemon_named(&self, name: &str) -> SourceResult<Pokemon> {
        self.pokemon_at(&self.endpoints.pokemon(name)).await
    }

    async fn species(&self, url: &str) -> SourceResult<Species> {
        let payload: SpeciesPayload = self.get_json(url).await?;
        Ok(payload.into())
    }

    async fn evolution_chain(&self, url: &str) -> SourceResult<EvolutionTree> {
        let payload: EvolutionChainPayload = self.get_json(url).await?;
        Ok(payload.into())
    }
}
