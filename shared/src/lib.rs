//! Shared types and logic for the BaristaLog brewing journal
//!
//! This crate contains the domain models, the extraction diagnosis engine and
//! its display tables, shared between the backend and the browser (via WASM).

pub mod diagnosis;
pub mod i18n;
pub mod models;
pub mod types;
pub mod validation;

pub use diagnosis::diagnose;
pub use i18n::*;
pub use models::*;
pub use types::*;
pub use validation::*;
