//! Card Grid Component
//!
//! One card per record on the current page.

use leptos::*;

use pokedex::app::CardView;

use crate::state::{Browser, GlobalState};

/// Badge color per type tag
pub fn type_color(tag: &str) -> &'static str {
    match tag {
        "fire" => "bg-orange-600",
        "water" => "bg-blue-600",
        "grass" => "bg-green-600",
        "electric" => "bg-yellow-500 text-gray-900",
        "ice" => "bg-cyan-400 text-gray-900",
        "fighting" => "bg-red-800",
        "poison" => "bg-purple-600",
        "ground" => "bg-yellow-700",
        "flying" => "bg-indigo-400",
        "psychic" => "bg-pink-500",
        "bug" => "bg-lime-600",
        "rock" => "bg-stone-600",
        "ghost" => "bg-violet-800",
        "dragon" => "bg-indigo-700",
        "dark" => "bg-gray-700",
        "steel" => "bg-slate-500",
        "fairy" => "bg-pink-300 text-gray-900",
        _ => "bg-gray-500",
    }
}

#[component]
pub fn TypeBadge(#[prop(into)] tag: String) -> impl IntoView {
    view! {
        <span class=format!(
            "px-2 py-0.5 rounded-full text-xs font-medium capitalize {}",
            type_color(&tag)
        )>
            {tag}
        </span>
    }
}

#[component]
pub fn CardGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.cards.with(Vec::is_empty) {
                view! {
                    <div class="text-center text-gray-400 py-16">
                        <div class="text-5xl mb-3">"🔍"</div>
                        <p>"No Pokémon match these filters."</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4">
                        <For
                            each=move || state.cards.get()
                            key=|card| (card.id, card.favorite)
                            children=|card| view! { <Card card /> }
                        />
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn Card(card: CardView) -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let id = card.id;

    let on_open = {
        let browser = browser.clone();
        move |_| {
            let browser = browser.clone();
            spawn_local(async move { browser.open(id).await });
        }
    };

    let on_favorite = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        browser.toggle_favorite(id);
    };

    view! {
        <div
            on:click=on_open
            class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-red-500 \
                   cursor-pointer transition relative"
        >
            <button
                on:click=on_favorite
                class="absolute top-2 right-3 text-xl text-red-500"
                title="Toggle favorite"
            >
                {if card.favorite { "♥" } else { "♡" }}
            </button>

            {card.image_url.map(|src| view! {
                <img src=src alt=card.name.clone() class="w-24 h-24 mx-auto" loading="lazy" />
            })}

            <div class="text-gray-500 text-xs">{format!("#{:04}", card.id)}</div>
            <div class="font-semibold capitalize">{card.name}</div>
            <div class="flex flex-wrap gap-1 mt-2">
                {card.types.into_iter().map(|tag| view! { <TypeBadge tag /> }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::catalog::TYPE_TAGS;

    #[test]
    fn test_every_type_has_a_color() {
        assert!(TYPE_TAGS.iter().all(|tag| type_color(tag) != "bg-gray-500" || *tag == "normal"));
    }
}
