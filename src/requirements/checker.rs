//! Environment checker.
//!
//! The `EnvChecker` walks a requirements set in order, queries the probe
//! for each item and reports the result as soon as it is known.

use tracing::debug;

use crate::requirements::parser::{Requirements, VersionSpec};
use crate::requirements::probe::{ImportStatus, InterpreterInfo, PackageProbe};
use crate::requirements::status::{CheckOutcome, CheckReport, CheckResult};
use crate::requirements::version::satisfies;
use crate::ui::UserInterface;

/// Requirement key that constrains the interpreter itself.
pub const PYTHON_KEY: &str = "python";

/// Item name used when reporting the interpreter check.
pub const PYTHON_ITEM: &str = "Python";

/// Packages that ship a binary rather than an importable module.
///
/// When these fail to import, the package manager is asked instead.
pub const BINARY_PACKAGES: &[&str] = &["ffmpeg"];

/// Version shown when an imported module has no `__version__`.
const UNKNOWN_VERSION: &str = "unknown";

/// Checks requirements against a live environment.
///
/// The interpreter is queried once by the caller, before the scan, and
/// handed in here.
pub struct EnvChecker<'a> {
    probe: &'a dyn PackageProbe,
    interpreter: &'a InterpreterInfo,
}

impl<'a> EnvChecker<'a> {
    /// Create a checker backed by the given probe and interpreter.
    pub fn new(probe: &'a dyn PackageProbe, interpreter: &'a InterpreterInfo) -> Self {
        Self { probe, interpreter }
    }

    /// Check every requirement, reporting each one through `ui`.
    ///
    /// The interpreter is checked first when `python` is required.
    pub fn run(&self, mut requirements: Requirements, ui: &mut dyn UserInterface) -> CheckReport {
        let mut report = CheckReport::default();

        if let Some(spec) = requirements.remove(PYTHON_KEY) {
            let result = check_python(self.interpreter, &spec);
            if !result.is_satisfied() {
                show_interpreter(self.interpreter, ui);
            }
            emit(&result, ui);
            report.results.push(result);
        }

        for (name, spec) in requirements.iter() {
            let result = self.check_package(name, spec);
            emit(&result, ui);
            report.results.push(result);
        }

        debug!(
            "Checked {} items, {} failed",
            report.results.len(),
            report.failures().len()
        );
        report
    }

    /// Check a single package requirement.
    pub fn check_package(&self, name: &str, spec: &VersionSpec) -> CheckResult {
        let outcome = match self.probe.import_package(name) {
            ImportStatus::Imported { .. } if !spec.is_constrained() => CheckOutcome::Satisfied,
            ImportStatus::Imported {
                version: Some(version),
            } => compare(&version, spec),
            ImportStatus::Imported { version: None } => {
                debug!("'{}' imported but reports no version", name);
                CheckOutcome::VersionMismatch {
                    required: spec.to_string(),
                    installed: UNKNOWN_VERSION.to_string(),
                }
            }
            ImportStatus::NotImportable if BINARY_PACKAGES.contains(&name) => {
                debug!("'{}' is not importable, asking the package manager", name);
                match self.probe.package_manager_version(name) {
                    Some(version) => compare(&version, spec),
                    None => CheckOutcome::NotInstalled,
                }
            }
            ImportStatus::NotImportable => CheckOutcome::NotInstalled,
        };
        CheckResult::new(name, outcome)
    }
}

/// Check the interpreter against a `python` requirement.
///
/// Exact requirements compare as many of major, minor and micro as the
/// requirement spells out, stopping at the first mismatch.
pub fn check_python(interpreter: &InterpreterInfo, spec: &VersionSpec) -> CheckResult {
    let outcome = match spec {
        VersionSpec::Any => CheckOutcome::Satisfied,
        VersionSpec::Exact(required) => {
            let mismatch = required
                .split('.')
                .zip(["major", "minor", "micro"].iter().zip(interpreter.version_info))
                .find(|(want, (_, have))| want.trim().parse::<u64>().ok() != Some(*have));
            match mismatch {
                Some((_, (component, _))) => {
                    debug!(
                        "Python {} differs from {} at {}",
                        interpreter.release(),
                        required,
                        component
                    );
                    CheckOutcome::VersionMismatch {
                        required: required.clone(),
                        installed: format!("{}.{}", interpreter.major(), interpreter.minor()),
                    }
                }
                None => CheckOutcome::Satisfied,
            }
        }
        VersionSpec::Range { .. } => compare(&interpreter.release(), spec),
    };
    CheckResult::new(PYTHON_ITEM, outcome)
}

fn compare(installed: &str, spec: &VersionSpec) -> CheckOutcome {
    if satisfies(installed, spec) {
        CheckOutcome::Satisfied
    } else {
        CheckOutcome::VersionMismatch {
            required: spec.to_string(),
            installed: installed.to_string(),
        }
    }
}

fn show_interpreter(interpreter: &InterpreterInfo, ui: &mut dyn UserInterface) {
    ui.message(&format!("Using Python at {}:", interpreter.prefix));
    ui.message(&format!("-> {}", interpreter.version));
}

fn emit(result: &CheckResult, ui: &mut dyn UserInterface) {
    if result.is_satisfied() {
        ui.check_ok(&result.item);
    } else {
        ui.check_failed(&result.message());
    }
}
