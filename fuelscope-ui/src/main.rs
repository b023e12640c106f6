//! Fuelscope Dashboard
//!
//! Interactive fuel price and inflation charts built with Leptos (WASM).
//!
//! # Features
//!
//! - Scatter/line charts of gasoline, crude oil, and inflation series
//! - A click-driven sequence of historical-event annotations
//! - Point tooltips on hover
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the three CSV data files over HTTP and shares the
//! dataset, story, and chart logic with the `fuelscope` crate.

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
