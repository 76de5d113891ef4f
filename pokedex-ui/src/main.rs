//! Pokedex Browser
//!
//! Catalog browser for PokeAPI built with Leptos (WASM).
//!
//! # Features
//!
//! - Name search, type, region and favorites filters
//! - Paged card grid
//! - Favorites persisted in local storage
//! - Detail panel with a base stat radar chart and the evolution chain
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Filtering, paging and evolution resolution come from the
//! `pokedex` crate; this crate supplies the fetch source, the storage backend
//! and a renderer writing Leptos signals.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
