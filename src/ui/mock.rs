//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use ragcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success(".env file found");
//! ui.error("faiss is NOT installed");
//!
//! assert!(ui.has_success(".env file found"));
//! assert!(ui.has_error("faiss"));
//! assert_eq!(ui.transcript(), &["✓ .env file found", "✗ faiss is NOT installed"]);
//! ```

use super::theme::Theme;
use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Every call is recorded by category and, formatted with the plain
/// theme, in a single ordered transcript.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    details: Vec<String>,
    headers: Vec<String>,
    celebrations: Vec<String>,
    spinners: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured success banners.
    pub fn celebrations(&self) -> &[String] {
        &self.celebrations
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Every line in call order, formatted as the plain terminal would.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if any transcript line contains `text`.
    pub fn output_contains(&self, text: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(Theme::plain().format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(Theme::plain().format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(Theme::plain().format_error(msg));
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
        self.transcript.push(Theme::plain().format_hint(msg));
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
        self.transcript.push(Theme::plain().format_detail(msg));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(Theme::plain().format_header(title));
    }

    fn celebrate(&mut self, msg: &str) {
        self.celebrations.push(msg.to_string());
        self.transcript.push(Theme::plain().format_celebrate(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Mock spinner that draws nothing.
#[derive(Debug)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish(&mut self) {}
}
