//! Global Application State
//!
//! Reactive state written by the controller's renderer and read by the
//! components. Components never read the controller directly.

use leptos::*;

use pokedex::app::{CardView, ChartHandle, DetailTab, DetailView, EvolutionView, StatChart, Summary};
use pokedex::catalog::PageControls;

use super::notice::Notice;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Cards of the current page
    pub cards: RwSignal<Vec<CardView>>,
    pub controls: RwSignal<Option<PageControls>>,
    pub summary: RwSignal<Option<Summary>>,
    /// Open detail panel
    pub detail: RwSignal<Option<DetailView>>,
    /// Evolution strip of the open panel, once resolved
    pub evolution: RwSignal<Option<EvolutionView>>,
    pub tab: RwSignal<DetailTab>,
    /// Chart on screen and the handle it was drawn under
    pub chart: RwSignal<Option<(ChartHandle, StatChart)>>,
    /// Bulk load in flight
    pub loading: RwSignal<bool>,
    /// Notice area content
    pub notice: RwSignal<Option<Notice>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            cards: create_rw_signal(Vec::new()),
            controls: create_rw_signal(None),
            summary: create_rw_signal(None),
            detail: create_rw_signal(None),
            evolution: create_rw_signal(None),
            tab: create_rw_signal(DetailTab::default()),
            chart: create_rw_signal(None),
            loading: create_rw_signal(true),
            notice: create_rw_signal(None),
        }
    }

    /// Show a notice; timed notices clear themselves unless replaced first
    pub fn notify(&self, notice: Notice) {
        if notice.is_error() {
            web_sys::console::error_1(&notice.text().into());
        }
        let lifetime = notice.lifetime_ms();
        self.notice.set(Some(notice.clone()));

        if let Some(ms) = lifetime {
            let signal = self.notice;
            gloo_timers::callback::Timeout::new(ms, move || {
                signal.update(|current| {
                    if current.as_ref() == Some(&notice) {
                        *current = None;
                    }
                });
            })
            .forget();
        }
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState::new();
    provide_context(state);
    state
}
