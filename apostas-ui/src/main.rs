//! Apostas Dashboard
//!
//! Personal betting ledger built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration, with silent session restore at startup
//! - Dashboard totals (invested, net return, predicted, count)
//! - Bet ledger with create, edit and delete
//! - Live stake × odds preview while typing
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All request/response handling lives in the `apostas` core
//! crate; this crate binds it to signals and renders it. It talks to the
//! apostas API over HTTP with cookie credentials.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core tracing events arrive here through tracing's `log` feature
    let _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(|| view! { <app::App /> });
}
