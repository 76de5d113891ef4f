//! Detail Panel Component
//!
//! Modal with the record header, tabs for stats, moves and evolution.

use leptos::*;

use pokedex::app::{DetailTab, DetailView, EvolutionView};

use crate::components::card_grid::TypeBadge;
use crate::components::chart::StatRadar;
use crate::components::loading::InlineLoading;
use crate::state::{Browser, GlobalState};

#[component]
pub fn DetailPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.detail.get().map(|detail| view! { <DetailModal detail /> })}
    }
}

#[component]
fn DetailModal(detail: DetailView) -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let state = browser.state();
    let id = detail.id;

    let on_close = {
        let browser = browser.clone();
        move |_| browser.with(|c| c.close_detail())
    };
    let on_favorite = {
        let browser = browser.clone();
        move |_| browser.toggle_favorite(id)
    };

    let stats = detail.stats.clone();
    let moves = detail.moves.clone();

    view! {
        <div class="fixed inset-0 z-40 bg-black/70 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto p-6 relative">
                <button on:click=on_close class="absolute top-3 right-4 text-2xl text-gray-400 hover:text-white">
                    "×"
                </button>

                <div class="flex items-center gap-6">
                    {detail.image_url.clone().map(|src| view! {
                        <img src=src alt=detail.name.clone() class="w-32 h-32" />
                    })}
                    <div>
                        <div class="text-gray-500">{format!("#{:04}", detail.id)}</div>
                        <h2 class="text-3xl font-bold capitalize">{detail.name.clone()}</h2>
                        <div class="flex gap-2 mt-2">
                            {detail.types.iter().cloned().map(|tag| view! { <TypeBadge tag /> }).collect_view()}
                        </div>
                        <button on:click=on_favorite class="mt-3 text-sm text-red-400 hover:text-red-300">
                            {if detail.favorite { "♥ Favorite" } else { "♡ Add to favorites" }}
                        </button>
                    </div>
                </div>

                <div class="flex gap-2 border-b border-gray-700 mt-6">
                    {DetailTab::all().iter().map(|&tab| {
                        let browser = browser.clone();
                        view! {
                            <button
                                on:click=move |_| { browser.run(|c| c.show_tab(tab)); }
                                class=move || {
                                    let base = "px-4 py-2 text-sm font-medium capitalize";
                                    if state.tab.get() == tab {
                                        format!("{} border-b-2 border-red-500 text-white", base)
                                    } else {
                                        format!("{} text-gray-400 hover:text-white", base)
                                    }
                                }
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="pt-4">
                    {move || match state.tab.get() {
                        DetailTab::Stats => view! {
                            <StatRadar />
                            <ul class="grid grid-cols-2 gap-x-6 gap-y-1 mt-4 text-sm">
                                {stats.iter().map(|s| view! {
                                    <li class="flex justify-between">
                                        <span class="text-gray-400 capitalize">{s.name.clone()}</span>
                                        <span class="font-mono">{s.value}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        DetailTab::Moves => view! {
                            <ul class="flex flex-wrap gap-2">
                                {moves.iter().map(|m| view! {
                                    <li class="bg-gray-700 rounded px-2 py-1 text-sm capitalize">{m.clone()}</li>
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        DetailTab::Evolution => view! { <EvolutionStrip /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EvolutionStrip() -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let state = browser.state();

    view! {
        {move || match state.evolution.get() {
            None => view! {
                <div class="flex items-center space-x-2 text-gray-400">
                    <InlineLoading />
                    <span>"Loading evolution chain..."</span>
                </div>
            }.into_view(),
            Some(evolution) => stages(&browser, evolution),
        }}
    }
}

fn stages(browser: &Browser, evolution: EvolutionView) -> View {
    let dropped = evolution.dropped;
    view! {
        <div class="flex flex-wrap items-center gap-3">
            {evolution.stages.into_iter().enumerate().map(|(i, stage)| {
                let browser = browser.clone();
                let alt = stage.name.clone();
                let on_click = move |_| {
                    let browser = browser.clone();
                    spawn_local(async move { browser.open_stage(i + 1).await });
                };
                view! {
                    {(i > 0).then(|| view! { <span class="text-gray-500">"→"</span> })}
                    <button on:click=on_click class="flex flex-col items-center hover:bg-gray-700 rounded-lg p-2">
                        {stage.image_url.map(|src| view! { <img src=src alt=alt class="w-20 h-20" /> })}
                        <span class="capitalize text-sm">{stage.name}</span>
                    </button>
                }
            }).collect_view()}
        </div>
        {(dropped > 0).then(|| view! {
            <p class="text-xs text-gray-500 mt-2">
                {format!("{} alternate branch species not shown", dropped)}
            </p>
        })}
    }
    .into_view()
}
