//! App Root Component
//!
//! Provides the global state and the shared controller, then starts the
//! bulk load.

use leptos::*;

use pokedex::app::BrowserSettings;

use crate::api::GlooSource;
use crate::components::{CardGrid, DetailPanel, Filters, GridSkeleton, Pagination, Toast};
use crate::state::{provide_global_state, Browser};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    let browser = Browser::new(state, GlooSource::default(), BrowserSettings::default());
    provide_context(browser.clone());

    spawn_local(async move { browser.load().await });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 h-16 flex items-center space-x-3">
                    <span class="text-2xl">"◓"</span>
                    <span class="text-xl font-bold">"Pokédex"</span>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 space-y-6">
                <Filters />

                {move || {
                    if state.loading.get() {
                        view! { <GridSkeleton /> }.into_view()
                    } else {
                        view! {
                            <CardGrid />
                            <Pagination />
                        }.into_view()
                    }
                }}
            </main>

            <footer class="text-center text-xs text-gray-500 py-4">
                "Data from PokeAPI"
            </footer>

            <DetailPanel />
            <Toast />
        </div>
    }
}
