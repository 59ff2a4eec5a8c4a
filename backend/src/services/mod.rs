//! Business logic services for the brewing journal

pub mod bean;
pub mod diagnosis;
pub mod recipe;

pub use bean::BeanService;
pub use diagnosis::DiagnosisService;
pub use recipe::RecipeService;
