// crates/engine/src/options.rs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `wc` style columns
    #[default]
    Plain,
    Json,
}

/// When to print the combined `total` row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalMode {
    /// Only when more than one source was counted
    #[default]
    Auto,
    Always,
    Never,
}

/// Which count columns to show. Selecting nothing shows all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountSelection {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
}

impl CountSelection {
    pub const ALL: Self = Self {
        lines: true,
        words: true,
        chars: true,
    };

    /// Fill in the default when no column was requested.
    #[must_use]
    pub const fn resolved(self) -> Self {
        if self.lines || self.words || self.chars {
            self
        } else {
            Self::ALL
        }
    }
}
