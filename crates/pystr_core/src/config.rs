//! Configuration for how text is viewed as characters.

/// What counts as one "character" when indexing and measuring text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharUnit {
    /// One Unicode scalar value (Rust `char`). Matches Python's `str` indexing.
    #[default]
    Scalar,
    /// One extended grapheme cluster (user-perceived character).
    Grapheme,
}

/// Text view configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrConfig {
    /// Character model used for indices, lengths, and slicing
    pub unit: CharUnit,
    /// Tab size used by `expandtabs` when the caller does not pass one
    pub tab_size: i64,
}

impl Default for StrConfig {
    fn default() -> Self {
        Self {
            unit: CharUnit::Scalar,
            tab_size: 8,
        }
    }
}

impl StrConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character unit
    pub fn with_unit(mut self, unit: CharUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the default tab size
    pub fn with_tab_size(mut self, tab_size: i64) -> Self {
        self.tab_size = tab_size;
        self
    }
}
