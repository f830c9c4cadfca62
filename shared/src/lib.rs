//! Shared types and models for the Tea Factory Management Platform
//!
//! This crate contains types shared between the reporting engine, the
//! browser front-end (via WASM), and other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
