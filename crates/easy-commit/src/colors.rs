//! Semantic color theme for consistent terminal output
//!
//! - `active` => cyan - highlighted options, prompts, progress
//! - `success` => green - created commits
//! - `warning` => yellow - counters near their limit
//! - `fail` => red - validation and runtime errors
//! - `muted` => dimmed - hints, placeholders, footers

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    pub active: Style,
    pub success: Style,
    pub warning: Style,
    pub fail: Style,
    pub muted: Style,
    /// Bold prompt text
    pub prompt: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            active: Style::new().cyan(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
            muted: Style::new().dimmed(),
            prompt: Style::new().bold(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);
