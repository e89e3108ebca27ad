//! Recipe Content Validation Module
//!
//! Recipes are free text. Before anything reaches a store it must be a
//! non-blank string between [`MIN_CONTENT_CHARS`] and [`MAX_CONTENT_CHARS`]
//! characters long.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::errors::RecipeError;

/// Minimum recipe length in characters (inclusive)
pub const MIN_CONTENT_CHARS: usize = 10;

/// Maximum recipe length in characters (inclusive)
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Reasons a piece of text is rejected as recipe content.
///
/// The `Display` output is the human-readable message returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentViolation {
    #[error("Recipe content cannot be empty")]
    Empty,

    #[error("Recipe content must be a string")]
    NotAString,

    #[error("Recipe content must be at least 10 characters long")]
    TooShort { length: usize },

    #[error("Recipe content must be at most 2000 characters long")]
    TooLong { length: usize },
}

/// Recipe text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipeContent(String);

impl RecipeContent {
    /// Validate raw text.
    ///
    /// Blank text is rejected first, then the length bounds are checked on the
    /// untrimmed text. Length counts Unicode scalar values, not bytes.
    pub fn new(content: String) -> Result<Self, RecipeError> {
        if content.trim().is_empty() {
            return Err(ContentViolation::Empty.into());
        }

        let length = content.chars().count();
        if length < MIN_CONTENT_CHARS {
            return Err(ContentViolation::TooShort { length }.into());
        }
        if length > MAX_CONTENT_CHARS {
            return Err(ContentViolation::TooLong { length }.into());
        }

        Ok(Self(content))
    }

    /// Validate the `content` field of a decoded JSON request body.
    pub fn from_json(value: Option<&Value>) -> Result<Self, RecipeError> {
        match value {
            None | Some(Value::Null) => Err(ContentViolation::Empty.into()),
            Some(Value::String(content)) => Self::new(content.clone()),
            Some(_) => Err(ContentViolation::NotAString.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
