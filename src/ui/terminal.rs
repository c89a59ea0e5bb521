//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, ProgressSpinner, SpinnerHandle, Theme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        let theme = if color { Theme::new() } else { Theme::plain() };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            self.line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            let text = self.theme.format_success(msg);
            self.line(&text);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_warning(msg);
            self.line(&text);
        }
    }

    fn error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_error(msg);
            self.line(&text);
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_hint(msg);
            self.line(&text);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            let text = self.theme.format_detail(msg);
            self.line(&text);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            let text = self.theme.format_header(title);
            self.line(&text);
            self.line("");
        }
    }

    fn celebrate(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_celebrate(msg);
            self.line(&text);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() && self.term.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode, color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, color))
}
