//! Top-level environment check.
//!
//! [`run_env_check`] is the entry point for tooling that wants to validate
//! an environment before proceeding: it queries the interpreter, loads the
//! environment file, checks every requirement and, in strict mode, turns
//! any failure into an error. The `check` command runs the same steps
//! through [`check_file`].

use std::path::Path;

use tracing::debug;

use crate::config::{load_environment, CheckOptions};
use crate::error::{EnvCheckError, Result};
use crate::requirements::{
    parse_requirements, CheckReport, EnvChecker, InterpreterInfo, PackageProbe, PythonProbe,
    Requirements,
};
use crate::ui::UserInterface;

/// Query the interpreter named by `options`, then check the environment
/// file against it.
///
/// An interpreter that cannot be queried is an error before any
/// requirement is checked. With `strict` set, any failed requirement
/// yields [`EnvCheckError::InspectionFailed`]; otherwise failures are only
/// reported through `ui` and the returned report.
pub fn run_env_check(
    options: &CheckOptions,
    strict: bool,
    ui: &mut dyn UserInterface,
) -> Result<CheckReport> {
    let probe = PythonProbe::from_options(options);
    let interpreter = probe.interpreter()?;
    check_file(&probe, &interpreter, &options.environment_file, strict, ui)
}

/// Load an environment file and check it against an already-queried
/// interpreter.
pub fn check_file(
    probe: &dyn PackageProbe,
    interpreter: &InterpreterInfo,
    path: &Path,
    strict: bool,
    ui: &mut dyn UserInterface,
) -> Result<CheckReport> {
    let environment = load_environment(path)?;
    let requirements = parse_requirements(&environment.dependencies);
    debug!(
        "Parsed {} requirements from {}",
        requirements.len(),
        path.display()
    );

    check_environment(probe, interpreter, requirements, strict, ui)
}

/// Check already-parsed requirements with the given probe.
pub fn check_environment(
    probe: &dyn PackageProbe,
    interpreter: &InterpreterInfo,
    requirements: Requirements,
    strict: bool,
    ui: &mut dyn UserInterface,
) -> Result<CheckReport> {
    let report = EnvChecker::new(probe, interpreter).run(requirements, ui);
    verdict(report, strict)
}

/// Apply strict mode to a finished report.
pub fn verdict(report: CheckReport, strict: bool) -> Result<CheckReport> {
    if strict && !report.is_success() {
        return Err(EnvCheckError::InspectionFailed {
            failures: report.failures(),
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{MockProbe, VersionSpec};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn interpreter() -> InterpreterInfo {
        InterpreterInfo {
            prefix: "/usr".into(),
            version: "3.10.4".into(),
            version_info: [3, 10, 4],
        }
    }

    fn failing_requirements() -> Requirements {
        let mut reqs = Requirements::new();
        reqs.insert("numpy", VersionSpec::Any);
        reqs.insert("foo", VersionSpec::Any);
        reqs
    }

    #[test]
    fn strict_mode_raises_on_failure() {
        let probe = MockProbe::new().module("numpy", Some("1.21.0"));
        let mut ui = MockUI::new();

        let err = check_environment(&probe, &interpreter(), failing_requirements(), true, &mut ui).unwrap_err();

        match err {
            EnvCheckError::InspectionFailed { failures } => assert_eq!(failures, vec!["foo"]),
            other => panic!("Expected InspectionFailed, got {:?}", other),
        }
        // Failures are still reported before the error.
        assert!(ui.has_failure("foo is not installed."));
    }

    #[test]
    fn lenient_mode_returns_failures() {
        let probe = MockProbe::new().module("numpy", Some("1.21.0"));
        let mut ui = MockUI::new();

        let report = check_environment(&probe, &interpreter(), failing_requirements(), false, &mut ui).unwrap();

        assert_eq!(report.failures(), vec!["foo"]);
    }

    #[test]
    fn strict_mode_passes_clean_environment() {
        let probe = MockProbe::new()
            .module("numpy", Some("1.21.0"))
            .module("foo", None);
        let mut ui = MockUI::new();

        let report = check_environment(&probe, &interpreter(), failing_requirements(), true, &mut ui).unwrap();

        assert!(report.is_success());
        assert_eq!(ui.oks(), &["numpy".to_string(), "foo".to_string()]);
    }

    #[test]
    fn verdict_on_empty_report() {
        assert!(verdict(CheckReport::default(), true).is_ok());
    }

    #[test]
    fn check_file_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let probe = MockProbe::new();
        let mut ui = MockUI::new();

        let err = check_file(
            &probe,
            &interpreter(),
            &temp.path().join("none.yml"),
            true,
            &mut ui,
        )
        .unwrap_err();
        assert!(matches!(err, EnvCheckError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn check_file_checks_declared_requirements() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("environment.yml");
        fs::write(&path, "dependencies:\n  - python=3.10\n  - numpy=1.21\n").unwrap();
        let probe = MockProbe::new().module("numpy", Some("1.21.0"));
        let mut ui = MockUI::new();

        let report = check_file(&probe, &interpreter(), &path, true, &mut ui).unwrap();

        assert!(report.is_success());
        assert_eq!(ui.oks(), &["Python".to_string(), "numpy".to_string()]);
        assert_eq!(probe.interpreter_queries(), 0);
    }

    #[test]
    fn run_env_check_rejects_unrunnable_python_before_scanning() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("environment.yml");
        fs::write(&path, "dependencies:\n  - numpy=1.21\n  - scikit-learn\n").unwrap();
        let options = CheckOptions::default()
            .with_environment_file(&path)
            .with_python("definitely-not-python-xyz")
            .with_conda("definitely-not-conda-xyz");
        let mut ui = MockUI::new();

        let err = run_env_check(&options, false, &mut ui).unwrap_err();

        match err {
            EnvCheckError::InterpreterUnavailable { python, .. } => {
                assert_eq!(python, "definitely-not-python-xyz")
            }
            other => panic!("Expected InterpreterUnavailable, got {:?}", other),
        }
        assert!(ui.lines().is_empty());
    }
}
