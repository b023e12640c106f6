//! Route handlers

pub mod datasets;
pub mod health;
