//! Visual theme and styling.

use console::Style;

const OK_TAG: &str = "[ OK ]";
const FAIL_TAG: &str = "[FAIL]";

/// Styles used for check output.
#[derive(Debug, Clone)]
pub struct EnvCheckTheme {
    /// Style for the `[ OK ]` tag (green background).
    pub ok_tag: Style,
    /// Style for the `[FAIL]` tag (red background).
    pub fail_tag: Style,
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for EnvCheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheckTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            ok_tag: Style::new().on_green(),
            fail_tag: Style::new().on_red(),
            success: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok_tag: Style::new(),
            fail_tag: Style::new(),
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a passing check line.
    pub fn format_ok(&self, item: &str) -> String {
        format!("{} {}", self.ok_tag.apply_to(OK_TAG), item)
    }

    /// Format a failing check line.
    pub fn format_fail(&self, msg: &str) -> String {
        format!("{} {}", self.fail_tag.apply_to(FAIL_TAG), msg)
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
