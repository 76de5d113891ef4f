//! Signal Renderer
//!
//! Projects controller output into the global signals.

use leptos::*;

use pokedex::app::{
    CardView, ChartHandle, DetailTab, DetailView, EvolutionView, Renderer, StatChart, Summary,
};
use pokedex::catalog::PageControls;

use super::global::GlobalState;

pub struct SignalRenderer {
    state: GlobalState,
    next_chart: u64,
}

impl SignalRenderer {
    pub fn new(state: GlobalState) -> Self {
        Self {
            state,
            next_chart: 0,
        }
    }
}

impl Renderer for SignalRenderer {
    fn render_summary(&mut self, summary: &Summary) {
        self.state.summary.set(Some(*summary));
    }

    fn render_cards(&mut self, cards: &[CardView]) {
        self.state.cards.set(cards.to_vec());
    }

    fn render_pagination(&mut self, controls: &PageControls) {
        self.state.controls.set(Some(*controls));
    }

    fn render_detail(&mut self, detail: &DetailView) {
        // Re-renders of the same record (favorite toggles) keep the strip
        let same = self
            .state
            .detail
            .with_untracked(|d| d.as_ref().map(|d| d.id) == Some(detail.id));
        if !same {
            self.state.evolution.set(None);
        }
        self.state.detail.set(Some(detail.clone()));
    }

    fn render_evolution(&mut self, evolution: &EvolutionView) {
        self.state.evolution.set(Some(evolution.clone()));
    }

    fn render_tab(&mut self, tab: DetailTab) {
        self.state.tab.set(tab);
    }

    fn draw_chart(&mut self, chart: &StatChart) -> ChartHandle {
        self.next_chart += 1;
        let handle = ChartHandle(self.next_chart);
        self.state.chart.set(Some((handle, chart.clone())));
        handle
    }

    fn discard_chart(&mut self, handle: ChartHandle) {
        let current = self
            .state
            .chart
            .with_untracked(|c| c.as_ref().map(|(h, _)| *h));
        if current == Some(handle) {
            self.state.chart.set(None);
        }
    }

    fn close_detail(&mut self) {
        self.state.detail.set(None);
        self.state.evolution.set(None);
        self.state.tab.set(DetailTab::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::catalog::Pokemon;

    #[test]
    fn test_chart_lifecycle() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        let mut renderer = SignalRenderer::new(state);

        let chart = StatChart::base_stats(&Pokemon::new(1, "bulbasaur").with_stat("hp", 45));
        let first = renderer.draw_chart(&chart);
        renderer.discard_chart(first);
        assert!(state.chart.get_untracked().is_none());

        let second = renderer.draw_chart(&chart);
        // A stale handle must not clear the newer chart
        renderer.discard_chart(first);
        assert_eq!(state.chart.get_untracked().map(|(h, _)| h), Some(second));

        runtime.dispose();
    }

    #[test]
    fn test_close_resets_panel() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        let mut renderer = SignalRenderer::new(state);

        let pokemon = Pokemon::new(25, "pikachu");
        renderer.render_detail(&DetailView::new(&pokemon, 10, false));
        renderer.render_tab(DetailTab::Moves);
        renderer.close_detail();

        assert!(state.detail.get_untracked().is_none());
        assert_eq!(state.tab.get_untracked(), DetailTab::Stats);

        runtime.dispose();
    }
}
