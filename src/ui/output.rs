//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every check and informational messages.
    #[default]
    Normal,
    /// Show failures and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows passing checks and plain messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
