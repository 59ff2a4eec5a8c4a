//! Domain models for the brewing journal

mod bean;
mod diagnosis;
mod recipe;
mod sensory;

pub use bean::*;
pub use diagnosis::*;
pub use recipe::*;
pub use sensory::*;
