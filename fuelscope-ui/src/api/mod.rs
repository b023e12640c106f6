//! HTTP layer
//!
//! Fetches the CSV data files from the server.

pub mod client;

pub use client::fetch_series;
