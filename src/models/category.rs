//! Spending category model
//!
//! Categories are a mostly-static list referenced by id from expense
//! entries. The reference is weak: removing a category does not cascade to
//! entries, and display falls back to a default when an id dangles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color (terminal color name)
    pub color: String,

    /// Display icon (single emoji/glyph)
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// The default category set shipped on first run
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new("Food", "yellow", "🍔"),
            Category::new("Coffee", "magenta", "☕"),
            Category::new("Transport", "blue", "🚌"),
            Category::new("Shopping", "cyan", "🛍"),
            Category::new("Entertainment", "green", "🎬"),
            Category::new("Bills", "red", "🧾"),
            Category::new("Health", "white", "💊"),
            Category::new("Other", "gray", "📦"),
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// Resolve a category name for display, falling back to "Other" when the
/// referenced id is not in the list (dangling weak reference)
pub fn display_name(categories: &[Category], id: CategoryId) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Other".to_string())
}
