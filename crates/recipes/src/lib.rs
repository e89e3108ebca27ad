//! In-memory per-city recipe collections
//!
//! This crate owns the user-contributed recipes attached to each city: content
//! validation, id assignment, and the shared store the HTTP layer mutates.

pub mod content;
pub mod errors;
pub mod store;

// Re-export key types for easy access
pub use content::{ContentViolation, RecipeContent, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS};
pub use errors::RecipeError;
pub use store::{Recipe, RecipeId, RecipeStore, StoreStats};

/// Result type for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Convenience function to validate recipe text without touching a store
pub fn validate_content(content: &str) -> Result<RecipeContent> {
    RecipeContent::new(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content() {
        assert!(validate_content("Boil pasta for ten minutes.").is_ok());
        assert!(validate_content("short").is_err());
    }
}
