//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Show everything, including interpreter path and key source.
    Verbose,
    /// Show every check line.
    Normal,
    /// Show failures, hints and the final verdict only.
    Quiet,
    /// Show nothing (used when the report is printed as JSON).
    Silent,
}

impl OutputMode {
    /// Check if this mode shows extra detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows passing checks and spinners.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows anything at all.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
