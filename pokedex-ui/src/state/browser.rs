//! Browser Controller Handle
//!
//! Shares one controller between event handlers. A borrow is never held
//! across an `.await`: detail views go through open, resolve and finish as
//! separate steps so other events can run while a chain is fetched.
//! Failures become notices, except a failed chain, which is only logged.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use pokedex::app::{AppError, AppResult, BrowserSettings, Controller, DetailRequest};
use pokedex::catalog::PokemonId;
use pokedex::favorites::FavoritesStore;
use pokedex::source::load_dataset;

use crate::api::GlooSource;

use super::global::GlobalState;
use super::notice::{Action, Notice};
use super::renderer::SignalRenderer;
use super::storage::LocalStorageStore;

pub type BrowserController = Controller<GlooSource, LocalStorageStore, SignalRenderer>;

#[derive(Clone)]
pub struct Browser {
    controller: Rc<RefCell<BrowserController>>,
    state: GlobalState,
}

impl Browser {
    pub fn new(state: GlobalState, source: GlooSource, settings: BrowserSettings) -> Self {
        let controller = Controller::new(
            Arc::new(source),
            FavoritesStore::load(LocalStorageStore::new()),
            SignalRenderer::new(state),
            settings,
        );
        Self {
            controller: Rc::new(RefCell::new(controller)),
            state,
        }
    }

    pub fn state(&self) -> GlobalState {
        self.state
    }

    /// Run a synchronous controller operation
    pub fn with<T>(&self, f: impl FnOnce(&mut BrowserController) -> T) -> T {
        f(&mut self.controller.borrow_mut())
    }

    /// Run an operation and post a notice for its error, if any
    pub fn run<T>(&self, f: impl FnOnce(&mut BrowserController) -> AppResult<T>) -> Option<T> {
        self.attempt(Action::Browse, f)
    }

    fn attempt<T>(
        &self,
        action: Action,
        f: impl FnOnce(&mut BrowserController) -> AppResult<T>,
    ) -> Option<T> {
        match self.with(f) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(action, &e);
                None
            }
        }
    }

    fn report(&self, action: Action, err: &AppError) {
        match Notice::for_failure(action, err) {
            Some(notice) => self.state.notify(notice),
            None => web_sys::console::warn_1(&err.to_string().into()),
        }
    }

    /// Fetch the dataset and render page 1
    pub async fn load(&self) {
        self.state.loading.set(true);
        if self.state.notice.get_untracked().is_some_and(|n| n.can_retry()) {
            self.state.dismiss();
        }
        let (source, limit) = self.with(|c| (Arc::clone(c.source()), c.settings().list_limit));

        match load_dataset(&*source, limit).await {
            Ok(dataset) => {
                let count = dataset.len();
                self.with(|c| c.set_dataset(dataset));
                web_sys::console::log_1(&format!("Loaded {} records", count).into());
            }
            Err(e) => self.report(Action::Load, &AppError::from(e)),
        }
        self.state.loading.set(false);
    }

    pub fn toggle_favorite(&self, id: PokemonId) {
        let name = self
            .with(|c| c.state().find_id(id).map(|p| p.name.clone()))
            .unwrap_or_else(|| format!("#{}", id));
        let action = Action::Favorite { name: name.clone() };

        if let Some(added) = self.attempt(action, |c| c.toggle_favorite(id)) {
            self.state.notify(Notice::Favorite { name, added });
        }
    }

    /// Open the detail panel and resolve its evolution chain
    pub async fn open(&self, id: PokemonId) {
        if let Some(request) = self.run(|c| c.open_detail(id)) {
            self.resolve(request).await;
        }
    }

    /// Open a stage of the current strip (1-based)
    pub async fn open_stage(&self, index: usize) {
        if let Some(request) = self.run(|c| c.open_stage(index)) {
            self.resolve(request).await;
        }
    }

    async fn resolve(&self, request: DetailRequest) {
        let source = self.with(|c| Arc::clone(c.source()));
        let outcome = request.resolve(&*source).await;
        self.attempt(Action::EvolutionWalk, |c| c.finish_detail(&request, outcome));
    }
}
