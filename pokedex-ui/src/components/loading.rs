//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton grid shown during the bulk load
#[component]
pub fn GridSkeleton(
    #[prop(default = 20)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="h-24 w-24 bg-gray-700 rounded-full mx-auto mb-4" />
                    <div class="h-4 bg-gray-700 rounded w-1/3 mb-2" />
                    <div class="h-4 bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
