//! Check command implementation.
//!
//! The `envcheck check` command (also the default) prints the interpreter
//! in use and then checks every requirement of the environment file.

use crate::check::check_file;
use crate::config::CheckOptions;
use crate::error::{EnvCheckError, Result};
use crate::requirements::{PackageProbe, PythonProbe};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    options: CheckOptions,
    strict: bool,
    probe: Box<dyn PackageProbe>,
}

impl CheckCommand {
    /// Create a check command that probes the configured interpreter.
    pub fn new(options: CheckOptions, strict: bool) -> Self {
        let probe = Box::new(PythonProbe::from_options(&options));
        Self::with_probe(options, strict, probe)
    }

    /// Create a check command with an explicit probe.
    pub fn with_probe(options: CheckOptions, strict: bool, probe: Box<dyn PackageProbe>) -> Self {
        Self {
            options,
            strict,
            probe,
        }
    }

    /// Whether failures make the command fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = match self.probe.interpreter() {
            Ok(i) => i,
            Err(e @ EnvCheckError::InterpreterUnavailable { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        ui.message(&format!("Using Python at {}:", interpreter.prefix));
        ui.message(&format!("-> {}", interpreter.version));

        let outcome = check_file(
            self.probe.as_ref(),
            &interpreter,
            &self.options.environment_file,
            self.strict,
            ui,
        );
        match outcome {
            Ok(report) if report.is_success() => {
                ui.success("Environment passed inspection.");
                Ok(CommandResult::success())
            }
            Ok(report) => {
                ui.message(&format!(
                    "{} of {} checks failed.",
                    report.failures().len(),
                    report.results.len()
                ));
                Ok(CommandResult::success())
            }
            Err(e @ EnvCheckError::InspectionFailed { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(
                e @ (EnvCheckError::EnvironmentNotFound { .. }
                | EnvCheckError::EnvironmentParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(2))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::MockProbe;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const ENVIRONMENT: &str = r#"
name: workshop
channels:
  - conda-forge
dependencies:
  - python=3.10
  - numpy>=1.21,<=1.26
  - conda-forge::ffmpeg
  - defaults::ffmpeg>=5.1
  - scikit-learn>=1.0
  - pip
  - pip:
      - requests
"#;

    fn setup_environment(content: &str) -> (TempDir, CheckOptions) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("environment.yml");
        fs::write(&path, content).unwrap();
        let options = CheckOptions::default().with_environment_file(path);
        (temp, options)
    }

    fn healthy_probe() -> MockProbe {
        MockProbe::with_python(3, 10, 11)
            .module("numpy", Some("1.24.3"))
            .module("pip", Some("23.2.1"))
            .managed("ffmpeg", "5.1.2")
    }

    #[test]
    fn check_healthy_environment() {
        let (_temp, options) = setup_environment(ENVIRONMENT);
        let cmd = CheckCommand::with_probe(options, true, Box::new(healthy_probe()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Using Python at /opt/conda/envs/workshop:"));
        assert_eq!(
            ui.oks(),
            &[
                "Python".to_string(),
                "numpy".to_string(),
                "ffmpeg".to_string(),
                "pip".to_string(),
            ]
        );
        assert!(ui.successes().iter().any(|m| m.contains("passed inspection")));
    }

    #[test]
    fn check_strict_failure_exits_one() {
        let (_temp, options) = setup_environment(ENVIRONMENT);
        let probe = MockProbe::with_python(3, 9, 18).module("numpy", Some("1.26.0"));
        let cmd = CheckCommand::with_probe(options, true, Box::new(probe));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_failure("Python version 3.10 is required, but 3.9 installed."));
        assert!(ui.has_failure("ffmpeg is not installed."));
        assert!(ui.has_failure("pip is not installed."));
        assert!(ui.errors().iter().any(|e| e.contains("Python, ffmpeg, pip")));
    }

    #[test]
    fn check_lenient_failure_exits_zero() {
        let (_temp, options) = setup_environment(ENVIRONMENT);
        let probe = MockProbe::with_python(3, 10, 0);
        let cmd = CheckCommand::with_probe(options, false, Box::new(probe));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!cmd.is_strict());
        assert!(ui.has_message("3 of 4 checks failed."));
    }

    #[test]
    fn check_missing_environment_file() {
        let temp = TempDir::new().unwrap();
        let options = CheckOptions::default().with_environment_file(temp.path().join("missing.yml"));
        let cmd = CheckCommand::with_probe(options, true, Box::new(healthy_probe()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("Environment file not found"));
    }

    #[test]
    fn check_invalid_environment_file() {
        let (_temp, options) = setup_environment("name: workshop\n");
        let cmd = CheckCommand::with_probe(options, true, Box::new(healthy_probe()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn check_without_interpreter() {
        let (_temp, options) = setup_environment(ENVIRONMENT);
        let cmd = CheckCommand::with_probe(options, true, Box::new(MockProbe::new()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.oks().is_empty());
    }
}
