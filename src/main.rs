//! Ledger UI
//!
//! Personal finance tracker front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with spending summaries and charts
//! - Transaction list with filtering, pagination, and CSV export
//! - Add/edit transaction forms with currency-aware input
//! - Flash banners for request outcomes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the ledger API via HTTP, and can also
//! bootstrap its charts from data embedded in the host page.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
