//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, EnvCheckTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Check lines and messages go to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: EnvCheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, coloring output when the terminal allows it.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvCheckTheme::new()
        } else {
            EnvCheckTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: EnvCheckTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn check_ok(&mut self, item: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_ok(item)).ok();
        }
    }

    fn check_failed(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_fail(msg)).ok();
    }
}

/// Create the terminal UI.
///
/// `color` forces plain output when false.
pub fn create_ui(mode: OutputMode, color: bool) -> Box<dyn UserInterface> {
    if color {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(TerminalUI::with_theme(mode, EnvCheckTheme::plain()))
    }
}
