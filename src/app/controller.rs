//! Browser controller
//!
//! Single owner of [`AppState`]. The catalog source, the favorites store and
//! the renderer are injected, so the same controller drives the terminal
//! and the browser.
//!
//! Opening a detail view is split in three steps so a UI can release the
//! controller while the evolution chain is fetched:
//!
//! 1. [`Controller::open_detail`] renders the panel and returns a [`DetailRequest`]
//! 2. [`DetailRequest::resolve`] walks the chain using only the source
//! 3. [`Controller::finish_detail`] applies the result if the view is still open
//!
//! [`Controller::show_detail`] runs all three in sequence.

use std::sync::Arc;

use crate::catalog::{
    clamp_page, is_known_type, paginate, CatalogError, FilterCriteria, Linearization, Pokemon,
    PokemonId, Region, DEFAULT_PAGE_SIZE,
};
use crate::favorites::{FavoritesSet, FavoritesStore, KeyValueStore};
use crate::source::{load_dataset, CatalogSource, SourceResult, DEFAULT_LIST_LIMIT};

use super::error::{AppError, AppResult};
use super::render::{
    CardView, DetailTab, DetailView, EvolutionView, Renderer, StageView, StatChart, Summary,
};
use super::state::{AppState, DetailSession};
use super::token::ViewToken;
use super::walker::{walk_evolution, WalkOutcome};

/// Tunables of a browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub page_size: usize,
    pub list_limit: usize,
    pub moves_shown: usize,
    pub evolution: Linearization,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            list_limit: DEFAULT_LIST_LIMIT,
            moves_shown: 10,
            evolution: Linearization::FirstBranch,
        }
    }
}

/// Pending evolution walk for an opened detail view
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pokemon: Pokemon,
    token: ViewToken,
    policy: Linearization,
}

impl DetailRequest {
    pub fn pokemon(&self) -> &Pokemon {
        &self.pokemon
    }

    pub fn token(&self) -> &ViewToken {
        &self.token
    }

    /// Walk the evolution chain; needs only the source
    pub async fn resolve<S>(&self, source: &S) -> SourceResult<WalkOutcome>
    where
        S: CatalogSource + ?Sized,
    {
        walk_evolution(source, &self.pokemon, self.policy, &self.token).await
    }
}

/// Owns the browsing state and projects it through a renderer
pub struct Controller<S, K, R> {
    source: Arc<S>,
    favorites: FavoritesStore<K>,
    renderer: R,
    settings: BrowserSettings,
    state: AppState,
}

impl<S, K, R> Controller<S, K, R>
where
    S: CatalogSource,
    K: KeyValueStore,
    R: Renderer,
{
    pub fn new(
        source: Arc<S>,
        favorites: FavoritesStore<K>,
        renderer: R,
        settings: BrowserSettings,
    ) -> Self {
        Self {
            source,
            favorites,
            renderer,
            settings,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn favorites(&self) -> &FavoritesSet {
        self.favorites.set()
    }

    // ============================================
    // Dataset
    // ============================================

    /// Bulk-load the dataset from the source and render page 1
    pub async fn load(&mut self) -> AppResult<usize> {
        let source = Arc::clone(&self.source);
        let dataset = load_dataset(&*source, self.settings.list_limit).await?;
        let count = dataset.len();
        self.set_dataset(dataset);
        Ok(count)
    }

    /// Replace the dataset and render page 1
    pub fn set_dataset(&mut self, dataset: Vec<Pokemon>) {
        self.state.dataset = dataset;
        self.state.current_page = 1;
        self.refresh();
    }

    // ============================================
    // Filtering and paging
    // ============================================

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.state.criteria = criteria;
        self.refresh();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.criteria.search_text = text.into();
        self.refresh();
    }

    /// Set or clear the type filter; unknown tags are rejected
    pub fn set_type(&mut self, tag: Option<&str>) -> AppResult<()> {
        if let Some(tag) = tag {
            if !is_known_type(tag) {
                return Err(CatalogError::UnknownType(tag.to_string()).into());
            }
        }
        self.state.criteria.type_tag = tag.map(str::to_string);
        self.refresh();
        Ok(())
    }

    pub fn set_region(&mut self, region: Option<Region>) {
        self.state.criteria.region = region;
        self.refresh();
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        self.state.criteria.favorites_only = on;
        self.refresh();
    }

    /// Show a page; out-of-range requests are clamped. Returns the page shown.
    pub fn select_page(&mut self, page: usize) -> usize {
        self.state.current_page =
            clamp_page(page, self.state.matching.len(), self.settings.page_size);
        self.render_page();
        self.state.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.select_page(self.state.current_page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.select_page(self.state.current_page.saturating_sub(1))
    }

    /// Records on the current page
    pub fn visible(&self) -> Vec<&Pokemon> {
        paginate(
            &self.state.matching,
            self.state.current_page,
            self.settings.page_size,
        )
        .items
        .iter()
        .map(|&i| &self.state.dataset[i])
        .collect()
    }

    /// Flip a favorite, persist, and re-filter
    ///
    /// Only identifiers in the loaded dataset are accepted. When persisting
    /// fails the in-memory flip still applies and the error is returned.
    pub fn toggle_favorite(&mut self, id: PokemonId) -> AppResult<bool> {
        if self.state.find_id(id).is_none() {
            return Err(CatalogError::UnknownPokemon(id).into());
        }

        let result = self.favorites.toggle(id);
        self.refresh();

        if let Some(session) = &self.state.detail {
            if session.pokemon.id == id {
                let view = DetailView::new(
                    &session.pokemon,
                    self.settings.moves_shown,
                    self.favorites.contains(id),
                );
                self.renderer.render_detail(&view);
            }
        }

        let now_favorite = result?;
        tracing::info!(id, favorite = now_favorite, "Toggled favorite");
        Ok(now_favorite)
    }

    /// Re-run the filter, keep the page valid, and redraw the grid
    fn refresh(&mut self) {
        self.state.matching = self
            .state
            .criteria
            .select(&self.state.dataset, self.favorites.set());
        self.state.current_page = clamp_page(
            self.state.current_page,
            self.state.matching.len(),
            self.settings.page_size,
        );

        tracing::debug!(
            matching = self.state.matching.len(),
            total = self.state.dataset.len(),
            page = self.state.current_page,
            "Filter applied"
        );
        self.render_page();
    }

    fn render_page(&mut self) {
        let page = paginate(
            &self.state.matching,
            self.state.current_page,
            self.settings.page_size,
        );
        let cards: Vec<CardView> = page
            .items
            .iter()
            .map(|&i| {
                let pokemon = &self.state.dataset[i];
                CardView::new(pokemon, self.favorites.contains(pokemon.id))
            })
            .collect();
        let controls = page.controls();
        let summary = Summary {
            total: self.state.dataset.len(),
            matching: self.state.matching.len(),
            favorites: self.favorites.set().len(),
        };

        self.renderer.render_summary(&summary);
        self.renderer.render_cards(&cards);
        self.renderer.render_pagination(&controls);
    }

    // ============================================
    // Detail view
    // ============================================

    /// Open the detail panel for a record in the dataset
    pub fn open_detail(&mut self, id: PokemonId) -> AppResult<DetailRequest> {
        let pokemon = self
            .state
            .find_id(id)
            .cloned()
            .ok_or(CatalogError::UnknownPokemon(id))?;
        Ok(self.open_record(pokemon))
    }

    /// Open the detail panel by id, `#id` or name
    pub fn open_named(&mut self, key: &str) -> AppResult<DetailRequest> {
        let pokemon = self
            .state
            .find(key)
            .cloned()
            .ok_or_else(|| AppError::NoMatch(key.to_string()))?;
        Ok(self.open_record(pokemon))
    }

    /// Open the detail panel for any record, replacing the current one
    pub fn open_record(&mut self, pokemon: Pokemon) -> DetailRequest {
        if let Some(previous) = self.state.detail.take() {
            previous.token.cancel();
        }
        if let Some(handle) = self.state.active_chart.take() {
            self.renderer.discard_chart(handle);
        }

        let favorite = self.favorites.contains(pokemon.id);
        self.renderer.render_detail(&DetailView::new(
            &pokemon,
            self.settings.moves_shown,
            favorite,
        ));
        self.state.active_chart = Some(self.renderer.draw_chart(&StatChart::base_stats(&pokemon)));
        self.renderer.render_tab(DetailTab::default());

        let session = DetailSession::new(pokemon.clone());
        let request = DetailRequest {
            pokemon,
            token: session.token.clone(),
            policy: self.settings.evolution,
        };
        tracing::debug!("Opened detail view for {}", request.pokemon.name);
        self.state.detail = Some(session);
        request
    }

    /// Re-open the panel on a stage of the current evolution strip (1-based)
    pub fn open_stage(&mut self, index: usize) -> AppResult<DetailRequest> {
        let session = self.state.detail.as_ref().ok_or(AppError::NoDetailOpen)?;
        let stage = index
            .checked_sub(1)
            .and_then(|i| session.stages.get(i))
            .cloned()
            .ok_or(AppError::UnknownStage(index))?;
        Ok(self.open_record(stage))
    }

    /// Apply a finished walk to the view that requested it
    ///
    /// Results for a view that has since been closed or replaced are dropped.
    pub fn finish_detail(
        &mut self,
        request: &DetailRequest,
        outcome: SourceResult<WalkOutcome>,
    ) -> AppResult<()> {
        let session = match self.state.detail.as_mut() {
            Some(session)
                if session.token.same_view(&request.token) && !request.token.is_cancelled() =>
            {
                session
            }
            _ => {
                tracing::debug!(
                    "Dropping evolution result for closed view of {}",
                    request.pokemon.name
                );
                return Ok(());
            }
        };

        match outcome {
            Ok(WalkOutcome::Complete(walk)) => {
                let view = EvolutionView {
                    stages: walk.stages.iter().map(StageView::new).collect(),
                    dropped: walk.line.dropped,
                };
                session.tree = Some(walk.tree);
                session.stages = walk.stages;
                self.renderer.render_evolution(&view);
                Ok(())
            }
            Ok(WalkOutcome::Cancelled) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    pokemon = %request.pokemon.name,
                    "Evolution chain failed: {}",
                    e
                );
                Err(e.into())
            }
        }
    }

    /// Open, resolve and apply in one go
    pub async fn show_detail(&mut self, id: PokemonId) -> AppResult<()> {
        let request = self.open_detail(id)?;
        self.complete_detail(request).await
    }

    /// Open a stage of the current strip and resolve its own chain
    pub async fn show_stage(&mut self, index: usize) -> AppResult<()> {
        let request = self.open_stage(index)?;
        self.complete_detail(request).await
    }

    async fn complete_detail(&mut self, request: DetailRequest) -> AppResult<()> {
        let source = Arc::clone(&self.source);
        let outcome = request.resolve(&*source).await;
        self.finish_detail(&request, outcome)
    }

    pub fn show_tab(&mut self, tab: DetailTab) -> AppResult<()> {
        let session = self.state.detail.as_mut().ok_or(AppError::NoDetailOpen)?;
        session.tab = tab;
        self.renderer.render_tab(tab);
        Ok(())
    }

    /// Close the panel, cancel its pending walk and discard its chart
    pub fn close_detail(&mut self) {
        if let Some(session) = self.state.detail.take() {
            session.token.cancel();
            tracing::debug!("Closed detail view for {}", session.pokemon.name);
        }
        if let Some(handle) = self.state.active_chart.take() {
            self.renderer.discard_chart(handle);
        }
        self.renderer.close_detail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render::ChartHandle;
    use crate::catalog::{EvolutionNode, EvolutionTree, PageControls, Species};
    use crate::favorites::{MemoryStore, StoreError, StoreResult, FAVORITES_KEY};
    use crate::source::MemorySource;

    /// Renderer that records every call
    #[derive(Default)]
    struct Recorder {
        cards: Vec<CardView>,
        controls: Option<PageControls>,
        details: Vec<DetailView>,
        evolutions: Vec<EvolutionView>,
        events: Vec<String>,
        next_chart: u64,
    }

    impl Renderer for Recorder {
        fn render_cards(&mut self, cards: &[CardView]) {
            self.cards = cards.to_vec();
        }

        fn render_pagination(&mut self, controls: &PageControls) {
            self.controls = Some(controls.clone());
        }

        fn render_detail(&mut self, detail: &DetailView) {
            self.details.push(detail.clone());
        }

        fn render_evolution(&mut self, evolution: &EvolutionView) {
            self.evolutions.push(evolution.clone());
        }

        fn render_tab(&mut self, tab: DetailTab) {
            self.events.push(format!("tab:{}", tab.label()));
        }

        fn draw_chart(&mut self, _chart: &StatChart) -> ChartHandle {
            self.next_chart += 1;
            self.events.push(format!("draw:{}", self.next_chart));
            ChartHandle(self.next_chart)
        }

        fn discard_chart(&mut self, handle: ChartHandle) {
            self.events.push(format!("discard:{}", handle.0));
        }

        fn close_detail(&mut self) {
            self.events.push("close".to_string());
        }
    }

    type TestController = Controller<MemorySource, MemoryStore, Recorder>;

    fn controller_with(source: MemorySource, dataset: Vec<Pokemon>) -> TestController {
        let mut controller = Controller::new(
            Arc::new(source),
            FavoritesStore::load(MemoryStore::new()),
            Recorder::default(),
            BrowserSettings::default(),
        );
        controller.set_dataset(dataset);
        controller
    }

    fn numbered(count: u32) -> Vec<Pokemon> {
        (1..=count)
            .map(|id| Pokemon::new(id, format!("mon{id}")).with_type("fire"))
            .collect()
    }

    fn evolution_source() -> MemorySource {
        let species = |name: &str| Species {
            name: name.to_string(),
            evolution_chain_url: Some("memory://chain/1".to_string()),
        };
        MemorySource::new()
            .with_pokemon(bulbasaur())
            .with_pokemon(Pokemon::new(2, "ivysaur").with_species("memory://species/2"))
            .with_pokemon(Pokemon::new(3, "venusaur").with_species("memory://species/3"))
            .with_species("memory://species/1", species("bulbasaur"))
            .with_species("memory://species/2", species("ivysaur"))
            .with_species("memory://species/3", species("venusaur"))
            .with_chain(
                "memory://chain/1",
                EvolutionTree::new(EvolutionNode::new("bulbasaur").evolves_to(
                    EvolutionNode::new("ivysaur").evolves_to(EvolutionNode::new("venusaur")),
                )),
            )
    }

    fn bulbasaur() -> Pokemon {
        Pokemon::new(1, "bulbasaur")
            .with_type("grass")
            .with_stat("hp", 45)
            .with_species("memory://species/1")
    }

    #[test]
    fn test_forty_five_matches_paginate() {
        let mut controller = controller_with(MemorySource::new(), numbered(45));

        let controls = controller.renderer().controls.clone().unwrap();
        assert_eq!(controls.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(controller.renderer().cards.len(), 20);

        assert_eq!(controller.select_page(3), 3);
        let ids: Vec<u32> = controller.renderer().cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![41, 42, 43, 44, 45]);
        assert!(controller.renderer().controls.as_ref().unwrap().is_current(3));
    }

    #[test]
    fn test_page_clamps_after_filter_shrinks() {
        let mut controller = controller_with(MemorySource::new(), numbered(45));
        controller.select_page(3);

        controller.set_search("mon1");
        // mon1, mon10..mon19 → 11 matches, one page
        assert_eq!(controller.state().matching.len(), 11);
        assert_eq!(controller.state().current_page, 1);
        assert_eq!(controller.renderer().cards.len(), 11);
    }

    #[test]
    fn test_select_page_out_of_range() {
        let mut controller = controller_with(MemorySource::new(), numbered(45));
        assert_eq!(controller.select_page(0), 1);
        assert_eq!(controller.select_page(17), 3);
        assert_eq!(controller.next_page(), 3);
        assert_eq!(controller.prev_page(), 2);
    }

    #[test]
    fn test_region_filter_through_controller() {
        let mut controller = controller_with(MemorySource::new(), numbered(200));
        controller.set_region(Some(Region::Kanto));
        assert_eq!(controller.state().matching.len(), 151);
        assert!(controller.state().filtered().all(|p| p.id <= 151));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let mut controller = controller_with(MemorySource::new(), numbered(3));
        let err = controller.set_type(Some("shadow")).unwrap_err();
        assert!(matches!(err, AppError::Catalog(CatalogError::UnknownType(_))));
        assert_eq!(controller.state().criteria.type_tag, None);
    }

    #[test]
    fn test_toggle_favorite_refilters_and_persists() {
        let mut controller = controller_with(MemorySource::new(), numbered(10));
        controller.set_favorites_only(true);
        assert!(controller.renderer().cards.is_empty());

        assert!(controller.toggle_favorite(4).unwrap());
        assert!(controller.toggle_favorite(7).unwrap());
        let ids: Vec<u32> = controller.renderer().cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 7]);
        assert!(controller.renderer().cards.iter().all(|c| c.favorite));

        assert!(!controller.toggle_favorite(4).unwrap());
        let ids: Vec<u32> = controller.renderer().cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7]);

        assert_eq!(
            controller.favorites.backend().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[7]")
        );
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let mut controller = controller_with(MemorySource::new(), numbered(3));
        let err = controller.toggle_favorite(999).unwrap_err();
        assert!(matches!(err, AppError::Catalog(CatalogError::UnknownPokemon(999))));
        assert!(controller.favorites().is_empty());
    }

    /// Store whose writes always fail, like a full browser quota
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("quota".to_string()))
        }
    }

    #[test]
    fn test_toggle_keeps_flip_when_persist_fails() {
        let mut controller = Controller::new(
            Arc::new(MemorySource::new()),
            FavoritesStore::load(ReadOnlyStore),
            Recorder::default(),
            BrowserSettings::default(),
        );
        controller.set_dataset(numbered(10));
        controller.set_favorites_only(true);
        assert!(controller.renderer().cards.is_empty());

        let result = controller.toggle_favorite(4);
        assert!(matches!(result, Err(AppError::Store(StoreError::Unavailable(_)))));
        assert!(controller.favorites().contains(4));

        let ids: Vec<u32> = controller.renderer().cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = MemorySource::new()
            .with_pokemon(Pokemon::new(1, "bulbasaur"))
            .with_pokemon(Pokemon::new(4, "charmander"));
        let mut controller = Controller::new(
            Arc::new(source),
            FavoritesStore::load(MemoryStore::new()),
            Recorder::default(),
            BrowserSettings::default(),
        );

        assert_eq!(controller.load().await.unwrap(), 2);
        assert_eq!(controller.renderer().cards.len(), 2);
    }

    #[tokio::test]
    async fn test_show_detail_renders_chain() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);

        controller.show_detail(1).await.unwrap();

        let recorder = controller.renderer();
        assert_eq!(recorder.details.last().unwrap().name, "bulbasaur");
        let names: Vec<&str> = recorder.evolutions[0]
            .stages
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(controller.state().detail.as_ref().unwrap().stages.len(), 3);
    }

    #[tokio::test]
    async fn test_stage_reopens_detail_and_replaces_chart() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);
        controller.show_detail(1).await.unwrap();
        controller.show_stage(3).await.unwrap();

        assert_eq!(
            controller.state().detail.as_ref().unwrap().pokemon.name,
            "venusaur"
        );
        let charts: Vec<&str> = controller
            .renderer()
            .events
            .iter()
            .map(String::as_str)
            .filter(|e| e.starts_with("draw") || e.starts_with("discard"))
            .collect();
        assert_eq!(charts, vec!["draw:1", "discard:1", "draw:2"]);
    }

    #[tokio::test]
    async fn test_late_result_after_close_is_dropped() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);

        let request = controller.open_detail(1).unwrap();
        controller.close_detail();
        assert!(request.token().is_cancelled());

        let source = Arc::clone(controller.source());
        let outcome = request.resolve(&*source).await;
        assert_eq!(outcome, Ok(WalkOutcome::Cancelled));

        controller.finish_detail(&request, outcome).unwrap();
        assert!(controller.renderer().evolutions.is_empty());
        assert!(controller.state().detail.is_none());
        assert!(controller.state().active_chart.is_none());
    }

    #[tokio::test]
    async fn test_result_for_replaced_view_is_dropped() {
        let mut controller = controller_with(
            evolution_source(),
            vec![
                bulbasaur(),
                Pokemon::new(2, "ivysaur").with_species("memory://species/2"),
            ],
        );

        let first = controller.open_detail(1).unwrap();
        // Resolve before the view is replaced, apply after.
        let outcome = first.resolve(&**controller.source()).await;
        let second = controller.open_detail(2).unwrap();

        controller.finish_detail(&first, outcome).unwrap();
        assert!(controller.renderer().evolutions.is_empty());

        let outcome = second.resolve(&**controller.source()).await;
        controller.finish_detail(&second, outcome).unwrap();
        assert_eq!(controller.renderer().evolutions.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_walk_leaves_panel_open() {
        let source = evolution_source().fail_on("memory://chain/1");
        let mut controller = controller_with(source, vec![bulbasaur()]);

        let err = controller.show_detail(1).await.unwrap_err();
        assert!(matches!(err, AppError::Source(_)));
        assert!(controller.state().detail.is_some());
        assert_eq!(controller.renderer().details.len(), 1);
        assert!(controller.renderer().evolutions.is_empty());
    }

    #[test]
    fn test_tabs_need_open_detail() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);
        assert!(matches!(
            controller.show_tab(DetailTab::Moves),
            Err(AppError::NoDetailOpen)
        ));

        controller.open_detail(1).unwrap();
        controller.show_tab(DetailTab::Moves).unwrap();
        assert_eq!(controller.renderer().events.last().unwrap(), "tab:moves");
        assert_eq!(
            controller.state().detail.as_ref().unwrap().tab,
            DetailTab::Moves
        );
    }

    #[test]
    fn test_open_named_by_name_or_id() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);
        assert_eq!(controller.open_named("Bulbasaur").unwrap().pokemon().id, 1);
        assert_eq!(controller.open_named("#1").unwrap().pokemon().name, "bulbasaur");
        assert!(matches!(
            controller.open_named("missingno"),
            Err(AppError::NoMatch(_))
        ));
    }

    #[test]
    fn test_stage_index_checked() {
        let mut controller = controller_with(evolution_source(), vec![bulbasaur()]);
        assert!(matches!(controller.open_stage(1), Err(AppError::NoDetailOpen)));

        controller.open_detail(1).unwrap();
        assert!(matches!(
            controller.open_stage(0),
            Err(AppError::UnknownStage(0))
        ));
    }
}
