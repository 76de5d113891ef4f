//! PokeAPI REST client
//!
//! HTTP client for the public PokeAPI. No retries; a request fails once and
//! the error is classified as not-found, network or decode.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::{CatalogSource, Endpoints, SourceError, SourceResult, DEFAULT_BASE_URL};
use crate::catalog::wire::{EvolutionChainPayload, ListPayload, PokemonPayload, SpeciesPayload};
use crate::catalog::{EvolutionTree, Pokemon, ResourceRef, Species};

/// Configuration for the PokeAPI client
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL (e.g., "https://pokeapi.co/api/v2")
    pub base_url: String,
    /// Request timeout in milliseconds; `None` waits indefinitely
    pub request_timeout_ms: Option<u64>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: None,
            user_agent: format!("pokedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// PokeAPI client
pub struct PokeApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl PokeApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: &PokeApiConfig) -> SourceResult<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| SourceError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Network(format!("timeout: {}", url))
            } else if e.is_connect() {
                SourceError::Network(format!("unreachable: {}", url))
            } else {
                SourceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Network(format!(
                "{} returned {}",
                url,
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Malformed payload from {}: {}", url, e);
            SourceError::Decode(format!("{}: {}", url, e))
        })
    }
}

#[async_trait(?Send)]
impl CatalogSource for PokeApiClient {
    async fn list(&self, limit: usize) -> SourceResult<Vec<ResourceRef>> {
        let payload: ListPayload = self.get_json(&self.endpoints.list(limit)).await?;
        if payload.next.is_some() {
            tracing::debug!(
                "Index truncated at {} of {} entries",
                payload.results.len(),
                payload.count
            );
        }
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
