//! Filter Bar Component
//!
//! Search box, type and region selects, favorites toggle.

use leptos::*;

use pokedex::catalog::{Region, TYPE_TAGS};

use crate::state::{Browser, GlobalState};

#[component]
pub fn Filters() -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_search = {
        let browser = browser.clone();
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            browser.with(|c| c.set_search(text));
        }
    };

    let on_type = {
        let browser = browser.clone();
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            let tag = (!value.is_empty()).then_some(value);
            browser.run(|c| c.set_type(tag.as_deref()));
        }
    };

    let on_region = {
        let browser = browser.clone();
        move |ev: ev::Event| {
            let region = event_target_value(&ev).parse::<Region>().ok();
            browser.with(|c| c.set_region(region));
        }
    };

    let on_favorites = move |ev: ev::Event| {
        let on = event_target_checked(&ev);
        browser.with(|c| c.set_favorites_only(on));
    };

    let select_class = "bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 text-sm";

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <input
                type="search"
                placeholder="Search by name"
                on:input=on_search
                class="flex-1 min-w-[12rem] bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 \
                       focus:outline-none focus:border-red-500"
            />

            <select on:change=on_type class=select_class>
                <option value="">"All types"</option>
                {TYPE_TAGS
                    .iter()
                    .map(|tag| view! { <option value=*tag class="capitalize">{*tag}</option> })
                    .collect_view()}
            </select>

            <select on:change=on_region class=select_class>
                <option value="">"All regions"</option>
                {Region::all()
                    .iter()
                    .map(|r| view! { <option value=r.name()>{r.to_string()}</option> })
                    .collect_view()}
            </select>

            <label class="flex items-center space-x-2 text-sm text-gray-300 cursor-pointer">
                <input type="checkbox" on:change=on_favorites class="accent-red-500" />
                <span>"Favorites only"</span>
            </label>

            <span class="text-sm text-gray-400 ml-auto">
                {move || {
                    state.summary.get()
                        .map(|s| format!("{} of {} · ♥ {}", s.matching, s.total, s.favorites))
                        .unwrap_or_default()
                }}
            </span>
        </div>
    }
}
