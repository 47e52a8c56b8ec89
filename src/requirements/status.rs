//! Check outcome types.
//!
//! Each checked item produces a [`CheckResult`]; a whole run produces a
//! [`CheckReport`].

/// How a single requirement fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Installed and, if constrained, at an acceptable version.
    Satisfied,

    /// Installed, but the version doesn't meet the requirement.
    VersionMismatch {
        /// Human-readable requirement (`1.2.3` or `>= 1.0 and <= 1.2`).
        required: String,
        /// Version as reported by the package.
        installed: String,
    },

    /// No version information could be found at all.
    NotInstalled,
}

impl CheckOutcome {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckOutcome::Satisfied)
    }
}

/// The result of checking a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Item name as reported (`Python` for the interpreter).
    pub item: String,
    /// What the check found.
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn new(item: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            item: item.into(),
            outcome,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.outcome.is_satisfied()
    }

    /// The line shown after the OK/FAIL tag.
    pub fn message(&self) -> String {
        match &self.outcome {
            CheckOutcome::Satisfied => self.item.clone(),
            CheckOutcome::VersionMismatch {
                required,
                installed,
            } => format!(
                "{} version {} is required, but {} installed.",
                self.item, required, installed
            ),
            CheckOutcome::NotInstalled => format!("{} is not installed.", self.item),
        }
    }
}

/// Every result of a run, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Names of the items that failed, in check order.
    pub fn failures(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| !r.is_satisfied())
            .map(|r| r.item.clone())
            .collect()
    }

    /// Whether every item passed.
    pub fn is_success(&self) -> bool {
        self.results.iter().all(CheckResult::is_satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfied_message_is_item_name() {
        let result = CheckResult::new("numpy", CheckOutcome::Satisfied);
        assert!(result.is_satisfied());
        assert_eq!(result.message(), "numpy");
    }

    #[test]
    fn mismatch_message_cites_both_versions() {
        let result = CheckResult::new(
            "pandas",
            CheckOutcome::VersionMismatch {
                required: ">= 1.4 and <= 1.5".into(),
                installed: "2.0.3".into(),
            },
        );
        assert!(!result.is_satisfied());
        assert_eq!(
            result.message(),
            "pandas version >= 1.4 and <= 1.5 is required, but 2.0.3 installed."
        );
    }

    #[test]
    fn not_installed_message() {
        let result = CheckResult::new("foo", CheckOutcome::NotInstalled);
        assert_eq!(result.message(), "foo is not installed.");
    }

    #[test]
    fn report_collects_failures_in_order() {
        let report = CheckReport {
            results: vec![
                CheckResult::new("Python", CheckOutcome::NotInstalled),
                CheckResult::new("numpy", CheckOutcome::Satisfied),
                CheckResult::new("foo", CheckOutcome::NotInstalled),
            ],
        };
        assert!(!report.is_success());
        assert_eq!(report.failures(), vec!["Python", "foo"]);
    }

    #[test]
    fn empty_report_is_success() {
        let report = CheckReport::default();
        assert!(report.is_success());
        assert!(report.failures().is_empty());
    }
}
