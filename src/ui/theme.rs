//! Visual theme and styling.

use console::Style;

/// Status glyphs used in check output.
pub mod glyph {
    pub const SUCCESS: &str = "✓";
    pub const FAILED: &str = "✗";
    pub const WARNING: &str = "⚠️ ";
    pub const HEADER: &str = "🔍";
    pub const CELEBRATE: &str = "🎉";
}

/// Colors for check output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failed checks (red bold).
    pub error: Style,
    /// Style for the header (magenta bold).
    pub header: Style,
    /// Style for remediation hints and follow-up commands (magenta dim).
    pub hint: Style,
    /// Style for verbose detail lines (dim).
    pub dim: Style,
    /// Style for the success banner (bold green).
    pub celebrate: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
            dim: Style::new().dim(),
            celebrate: Style::new().green().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
            celebrate: Style::new(),
        }
    }

    /// Format a passing check.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("{} {}", glyph::SUCCESS, msg)))
    }

    /// Format a warning.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{} {}", glyph::WARNING, msg)))
    }

    /// Format a failed check.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", glyph::FAILED, msg)))
    }

    /// Format a remediation hint, indented under the line it belongs to.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("  {}", self.hint.apply_to(msg))
    }

    /// Format a verbose detail line.
    pub fn format_detail(&self, msg: &str) -> String {
        format!("  {}", self.dim.apply_to(msg))
    }

    /// Format the header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", glyph::HEADER, self.header.apply_to(title))
    }

    /// Format the success banner.
    pub fn format_celebrate(&self, msg: &str) -> String {
        format!("{} {}", glyph::CELEBRATE, self.celebrate.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
