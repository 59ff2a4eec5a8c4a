//! HTTP handlers

pub mod bean;
pub mod diagnosis;
pub mod health;
pub mod recipe;

pub use bean::*;
pub use diagnosis::*;
pub use health::*;
pub use recipe::*;

use serde::Deserialize;
use shared::Language;

use crate::error::{AppError, AppResult};

/// `?lang=` query parameter shared by localized endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    /// Requested language, or `default` when none was given
    pub fn resolve(&self, default: Language) -> AppResult<Language> {
        match self.lang.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(code) => Language::from_code(code).ok_or_else(|| AppError::InvalidLanguage(code.to_string())),
        }
    }
}
