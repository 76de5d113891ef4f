//! Notice Area
//!
//! Favorite changes, unsaved favorites and load failures. A failed load
//! keeps its notice up with a retry button.

use leptos::*;

use crate::state::{Browser, Notice};

#[component]
pub fn Toast() -> impl IntoView {
    let browser = use_context::<Browser>().expect("Browser not found");
    let state = browser.state();

    view! {
        <div class="fixed bottom-6 right-4 z-50 max-w-sm">
            {move || state.notice.get().map(|notice| {
                let browser = browser.clone();
                view! { <NoticeCard notice browser /> }
            })}
        </div>
    }
}

/// Icon and background for a notice
fn notice_style(notice: &Notice) -> (&'static str, &'static str) {
    match notice {
        Notice::Favorite { added: true, .. } => ("♥", "bg-red-500"),
        Notice::Favorite { added: false, .. } => ("♡", "bg-gray-600"),
        Notice::Unsaved { .. } => ("!", "bg-amber-600"),
        Notice::LoadFailed(_) | Notice::Rejected(_) => ("✕", "bg-red-700"),
    }
}

#[component]
fn NoticeCard(notice: Notice, browser: Browser) -> impl IntoView {
    let (icon, bg_class) = notice_style(&notice);
    let state = browser.state();

    let retry = notice.can_retry().then(|| {
        let on_retry = move |_| {
            let browser = browser.clone();
            spawn_local(async move { browser.load().await });
        };
        view! {
            <button on:click=on_retry class="ml-2 underline font-semibold">"Retry"</button>
        }
    });

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium flex-1">{notice.text()}</span>
            {retry}
            <button on:click=move |_| state.dismiss() class="text-white/70 hover:text-white">"×"</button>
        </div>
    }
}
