//! Pagination Component

use leptos::*;

use crate::state::{Browser, GlobalState};

#[component]
pub fn Pagination() -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let button = "px-3 py-1 rounded-lg text-sm font-medium transition-colors";

    view! {
        {move || {
            let Some(controls) = state.controls.get() else {
                return view! {}.into_view();
            };
            let prev = browser.clone();
            let next = browser.clone();
            let pages = browser.clone();

            view! {
                <nav class="flex flex-wrap justify-center gap-2 mt-6">
                    <button
                        disabled=!controls.has_prev()
                        on:click=move |_| { prev.with(|c| c.prev_page()); }
                        class=format!("{} bg-gray-700 disabled:opacity-40", button)
                    >
                        "‹"
                    </button>

                    {controls.pages().map(|n| {
                        let browser = pages.clone();
                        let class = if controls.is_current(n) {
                            format!("{} bg-red-600 text-white", button)
                        } else {
                            format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", button)
                        };
                        view! {
                            <button
                                on:click=move |_| { browser.with(|c| c.select_page(n)); }
                                class=class
                            >
                                {n}
                            </button>
                        }
                    }).collect_view()}

                    <button
                        disabled=!controls.has_next()
                        on:click=move |_| { next.with(|c| c.next_page()); }
                        class=format!("{} bg-gray-700 disabled:opacity-40", button)
                    >
                        "›"
                    </button>
                </nav>
            }.into_view()
        }}
    }
}
