//! Rendering seam
//!
//! The controller projects its state into the view models below and hands
//! them to a [`Renderer`]. The terminal and the browser each provide one.

use serde::Serialize;

use crate::catalog::{PageControls, Pokemon, PokemonId, Stat};

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<String>,
    pub image_url: Option<String>,
    pub favorite: bool,
}

impl CardView {
    pub fn new(pokemon: &Pokemon, favorite: bool) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types: pokemon.types.clone(),
            image_url: pokemon.image_url.clone(),
            favorite,
        }
    }
}

/// Header of the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<String>,
    pub image_url: Option<String>,
    pub stats: Vec<Stat>,
    /// Leading moves only
    pub moves: Vec<String>,
    pub favorite: bool,
}

impl DetailView {
    pub fn new(pokemon: &Pokemon, moves_shown: usize, favorite: bool) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types: pokemon.types.clone(),
            image_url: pokemon.image_url.clone(),
            stats: pokemon.stats.clone(),
            moves: pokemon.moves.iter().take(moves_shown).cloned().collect(),
            favorite,
        }
    }
}

/// One stage of the evolution strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub id: PokemonId,
    pub name: String,
    pub image_url: Option<String>,
}

impl StageView {
    pub fn new(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image_url: pokemon.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionView {
    pub stages: Vec<StageView>,
    /// Species in the tree that the linearization left out
    pub dropped: usize,
}

/// Radial stat chart input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl StatChart {
    pub fn base_stats(pokemon: &Pokemon) -> Self {
        Self {
            title: "Base Stats".to_string(),
            labels: pokemon.stats.iter().map(|s| s.name.clone()).collect(),
            values: pokemon.stats.iter().map(|s| s.value).collect(),
        }
    }
}

/// Handle to a drawn chart, minted by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartHandle(pub u64);

/// Sections of the detail panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Stats,
    Moves,
    Evolution,
}

impl DetailTab {
    pub fn all() -> &'static [DetailTab] {
        &[DetailTab::Stats, DetailTab::Moves, DetailTab::Evolution]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Stats => "stats",
            DetailTab::Moves => "moves",
            DetailTab::Evolution => "evolution",
        }
    }
}

impl std::str::FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stats" => Ok(DetailTab::Stats),
            "moves" => Ok(DetailTab::Moves),
            "evolution" | "evo" => Ok(DetailTab::Evolution),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

/// Counts shown above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub matching: usize,
    pub favorites: usize,
}

/// Display collaborator driven by the controller
///
/// Before drawing a chart the controller always discards the previous one
/// through [`Renderer::discard_chart`].
pub trait Renderer {
    fn render_cards(&mut self, cards: &[CardView]);

    fn render_pagination(&mut self, controls: &PageControls);

    fn render_summary(&mut self, _summary: &Summary) {}

    fn render_detail(&mut self, detail: &DetailView);

    fn render_evolution(&mut self, evolution: &EvolutionView);

    fn render_tab(&mut self, tab: DetailTab);

    fn draw_chart(&mut self, chart: &StatChart) -> ChartHandle;

    fn discard_chart(&mut self, handle: ChartHandle);

    fn close_detail(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_view_truncates_moves() {
        let mut pokemon = Pokemon::new(1, "bulbasaur").with_stat("hp", 45);
        for i in 0..15 {
            pokemon = pokemon.with_move(format!("move-{i}"));
        }
        let view = DetailView::new(&pokemon, 10, false);
        assert_eq!(view.moves.len(), 10);
        assert_eq!(view.moves[9], "move-9");
    }

    #[test]
    fn test_chart_labels_follow_stats() {
        let pokemon = Pokemon::new(1, "bulbasaur")
            .with_stat("hp", 45)
            .with_stat("speed", 45);
        let chart = StatChart::base_stats(&pokemon);
        assert_eq!(chart.labels, vec!["hp", "speed"]);
        assert_eq!(chart.values, vec![45, 45]);
        assert_eq!(chart.title, "Base Stats");
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Moves".parse::<DetailTab>(), Ok(DetailTab::Moves));
        assert_eq!("evo".parse::<DetailTab>(), Ok(DetailTab::Evolution));
        assert!("abilities".parse::<DetailTab>().is_err());
    }
}
