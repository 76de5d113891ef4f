//! Upstream payload shapes
//!
//! Only the fields the browser reads are declared; serde ignores the rest.
//! Absent optional fields decode to their defaults, mirroring the permissive
//! field access the browser relies on.

use serde::Deserialize;

use super::evolution::EvolutionTree;
use super::types::{Pokemon, ResourceRef, Stat};

/// `GET /pokemon?limit=N`
#[derive(Debug, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<ResourceRef>,
}

/// `GET /pokemon/{id or name}`
#[derive(Debug, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    pub species: ResourceRef,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedOnly,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedOnly,
}

#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub entry: NamedOnly,
}

#[derive(Debug, Deserialize)]
pub struct NamedOnly {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl From<PokemonPayload> for Pokemon {
    fn from(payload: PokemonPayload) -> Self {
        let image_url = payload
            .sprites
            .other
            .official_artwork
            .front_default
            .or(payload.sprites.front_default);

        Pokemon {
            id: payload.id,
            name: payload.name,
            types: payload.types.into_iter().map(|t| t.kind.name).collect(),
            image_url,
            stats: payload
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            moves: payload.moves.into_iter().map(|m| m.entry.name).collect(),
            species_url: payload.species.url,
        }
    }
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Deserialize)]
pub struct SpeciesPayload {
    pub name: String,
    #[serde(default)]
    pub evolution_chain: Option<UrlOnly>,
}

#[derive(Debug, Deserialize)]
pub struct UrlOnly {
    pub url: String,
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Deserialize)]
pub struct EvolutionChainPayload {
    pub chain: ChainLink,
}

/// One node of the upstream chain; `evolves_to` may branch
#[derive(Debug, Deserialize)]
pub struct ChainLink {
    pub species: ResourceRef,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl From<EvolutionChainPayload> for EvolutionTree {
    fn from(payload: EvolutionChainPayload) -> Self {
        EvolutionTree::from_link(payload.chain)
    }
}

/// Species record as the browser needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    pub evolution_chain_url: Option<String>,
}

impl From<SpeciesPayload> for Species {
    fn from(payload: SpeciesPayload) -> Self {
        Species {
            name: payload.name,
            evolution_chain_url: payload.evolution_chain.map(|c| c.url),
        }
    }
}
