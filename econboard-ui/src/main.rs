//! Econboard Dashboard
//!
//! Indian economy and markets dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Cycling market ticker
//! - Economy, markets and listed-company panels
//! - Event-annotated time-series charts
//! - Simulated Excel upload log
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is literal and comes from the `econboard` crate; the
//! app makes no network requests.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
