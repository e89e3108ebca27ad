//! Check-recipe command implementation

use anyhow::Result;

use cityguide_recipes::{validate_content, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS};

/// Execute the check-recipe command
pub fn execute_check_recipe_command(content: &str) -> Result<()> {
    match validate_content(content) {
        Ok(valid) => {
            println!(
                "✅ Recipe content is valid ({} characters, allowed {}-{})",
                valid.as_str().chars().count(),
                MIN_CONTENT_CHARS,
                MAX_CONTENT_CHARS
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ {}", e);
            Err(e.into())
        }
    }
}
