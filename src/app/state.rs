//! Application State
//!
//! Everything the browser mutates, owned by a single controller.

use crate::catalog::{EvolutionTree, FilterCriteria, Pokemon};

use super::render::{ChartHandle, DetailTab};
use super::token::ViewToken;

/// Mutable state of one browsing session
#[derive(Debug, Default)]
pub struct AppState {
    /// Every record fetched at startup, in dex order
    pub dataset: Vec<Pokemon>,
    /// Active filter inputs
    pub criteria: FilterCriteria,
    /// Positions in `dataset` of the records passing `criteria`
    pub matching: Vec<usize>,
    /// 1-based, always within `[1, page_count]`
    pub current_page: usize,
    /// Chart currently on screen
    pub active_chart: Option<ChartHandle>,
    /// Open detail panel
    pub detail: Option<DetailSession>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    /// Records passing the current criteria, in dataset order
    pub fn filtered(&self) -> impl Iterator<Item = &Pokemon> + '_ {
        self.matching.iter().map(|&i| &self.dataset[i])
    }

    pub fn find_id(&self, id: u32) -> Option<&Pokemon> {
        self.dataset.iter().find(|p| p.id == id)
    }

    /// Look up by identifier or by (case-insensitive) name
    pub fn find(&self, key: &str) -> Option<&Pokemon> {
        let key = key.trim();
        match key.trim_start_matches('#').parse::<u32>() {
            Ok(id) => self.find_id(id),
            Err(_) => self
                .dataset
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(key)),
        }
    }
}

/// An open detail panel and its pending evolution walk
#[derive(Debug)]
pub struct DetailSession {
    pub pokemon: Pokemon,
    pub token: ViewToken,
    pub tab: DetailTab,
    /// Filled in once the evolution walk completes
    pub tree: Option<EvolutionTree>,
    pub stages: Vec<Pokemon>,
}

impl DetailSession {
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            token: ViewToken::new(),
            tab: DetailTab::default(),
            tree: None,
            stages: Vec::new(),
        }
    }
}
