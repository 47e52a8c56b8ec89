//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    oks: Vec<String>,
    failures: Vec<String>,
    /// Every check line in the order it was reported, tagged.
    lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all passing check items.
    pub fn oks(&self) -> &[String] {
        &self.oks
    }

    /// Get all failing check messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get check lines as `[ OK ] item` / `[FAIL] message`, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if a message containing the given text was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a failure containing the given text was reported.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn check_ok(&mut self, item: &str) {
        self.oks.push(item.to_string());
        self.lines.push(format!("[ OK ] {}", item));
    }

    fn check_failed(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
        self.lines.push(format!("[FAIL] {}", msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_checks_in_order() {
        let mut ui = MockUI::new();
        ui.check_ok("numpy");
        ui.check_failed("foo is not installed.");
        ui.check_ok("pandas");

        assert_eq!(
            ui.lines(),
            &[
                "[ OK ] numpy".to_string(),
                "[FAIL] foo is not installed.".to_string(),
                "[ OK ] pandas".to_string(),
            ]
        );
        assert!(ui.has_failure("foo"));
    }

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("Using Python at /opt/conda:");
        ui.success("done");
        ui.error("broken");

        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.has_message("/opt/conda"));
        assert_eq!(ui.successes(), &["done".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
    }
}
