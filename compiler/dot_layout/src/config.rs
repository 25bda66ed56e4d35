//! Layout configuration.

/// Default maximum line width before a group breaks.
pub const DEFAULT_MAX_COLUMN: usize = 80;

/// Unit written once per indentation level at the start of a broken line.
pub const INDENT_GLYPH: char = '\t';

/// Configuration for a [`Document`](crate::Document).
///
/// Fixed at construction; measurement and layout read it, rendering does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Maximum line width a flat group may occupy. Always positive.
    ///
    /// Indentation counts one column per level regardless of how the glyph
    /// is displayed.
    pub max_column: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_column: DEFAULT_MAX_COLUMN,
        }
    }
}

impl LayoutConfig {
    /// Create a config with the given maximum line width.
    pub fn with_max_column(max_column: usize) -> Self {
        Self { max_column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_column() {
        assert_eq!(LayoutConfig::default().max_column, 80);
    }

    #[test]
    fn with_max_column() {
        assert_eq!(LayoutConfig::with_max_column(10).max_column, 10);
    }
}
