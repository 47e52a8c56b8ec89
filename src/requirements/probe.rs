//! Environment probe for querying the Python interpreter and package manager.
//!
//! The [`PackageProbe`] trait is the seam between the checker and the
//! outside world. [`PythonProbe`] implements it by running small scripts
//! with the configured interpreter and by asking conda for its package list.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::config::CheckOptions;
use crate::error::{EnvCheckError, Result};
use crate::shell::execute;

/// Marks the JSON payload in script output. Imported modules may write to
/// stdout themselves, so only the text after the last marker is parsed.
pub const PAYLOAD_MARKER: &str = "__envcheck__:";

/// Prints interpreter location and version as JSON.
const INTERPRETER_SCRIPT: &str = r#"import json, sys
print("\n__envcheck__:" + json.dumps({"prefix": sys.prefix, "version": sys.version, "version_info": list(sys.version_info[:3])}))"#;

/// Imports `sys.argv[1]` and prints whether it worked plus `__version__`.
const IMPORT_SCRIPT: &str = r#"import importlib, json, sys
try:
    mod = importlib.import_module(sys.argv[1])
except Exception:
    report = {"imported": False, "version": None}
else:
    v = getattr(mod, "__version__", None)
    report = {"imported": True, "version": None if v is None else str(v)}
print("\n__envcheck__:" + json.dumps(report))"#;

/// Details of the running Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterInfo {
    /// Installation prefix (`sys.prefix`).
    pub prefix: String,
    /// Full version banner (`sys.version`).
    pub version: String,
    /// `major`, `minor`, `micro`.
    pub version_info: [u64; 3],
}

impl InterpreterInfo {
    pub fn major(&self) -> u64 {
        self.version_info[0]
    }

    pub fn minor(&self) -> u64 {
        self.version_info[1]
    }

    pub fn micro(&self) -> u64 {
        self.version_info[2]
    }

    /// `major.minor.micro` as a string.
    pub fn release(&self) -> String {
        format!("{}.{}.{}", self.major(), self.minor(), self.micro())
    }
}

/// Outcome of trying to import a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    /// The module could not be imported.
    NotImportable,
    /// The module imported; `version` is its `__version__`, if it has one.
    Imported { version: Option<String> },
}

#[derive(Debug, Deserialize)]
struct ImportReport {
    imported: bool,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackageRecord {
    version: Option<String>,
}

/// Live queries against the environment being checked.
pub trait PackageProbe {
    /// Describe the interpreter whose environment is checked.
    fn interpreter(&self) -> Result<InterpreterInfo>;

    /// Try to import `module`.
    fn import_package(&self, module: &str) -> ImportStatus;

    /// Ask the package manager for the installed version of `package`.
    fn package_manager_version(&self, package: &str) -> Option<String>;
}

/// Probe backed by a Python executable and conda.
#[derive(Debug, Clone)]
pub struct PythonProbe {
    python: String,
    conda: String,
}

impl PythonProbe {
    /// Create a probe for the given executables.
    pub fn new(python: impl Into<String>, conda: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            conda: conda.into(),
        }
    }

    /// Create a probe from check options.
    pub fn from_options(options: &CheckOptions) -> Self {
        Self::new(&options.python, &options.conda)
    }

    /// The Python executable this probe runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl PackageProbe for PythonProbe {
    fn interpreter(&self) -> Result<InterpreterInfo> {
        let unavailable = |message: String| EnvCheckError::InterpreterUnavailable {
            python: self.python.clone(),
            message,
        };

        let result = execute(&self.python, &["-c", INTERPRETER_SCRIPT])
            .map_err(|e| unavailable(e.to_string()))?;
        if !result.success {
            return Err(unavailable(format!(
                "exited with code {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        let info = parse_interpreter_output(&result.stdout).map_err(unavailable)?;
        debug!("Using Python {} at {}", info.release(), info.prefix);
        Ok(info)
    }

    fn import_package(&self, module: &str) -> ImportStatus {
        let result = match execute(&self.python, &["-c", IMPORT_SCRIPT, module]) {
            Ok(r) if r.success => r,
            Ok(r) => {
                debug!("Import probe for '{}' exited with {:?}", module, r.exit_code);
                return ImportStatus::NotImportable;
            }
            Err(e) => {
                debug!("Import probe for '{}' failed: {}", module, e);
                return ImportStatus::NotImportable;
            }
        };
        let status = parse_import_output(&result.stdout);
        trace!("Import probe for '{}': {:?}", module, status);
        status
    }

    fn package_manager_version(&self, package: &str) -> Option<String> {
        let result = match execute(&self.conda, &["list", "-f", package, "--json"]) {
            Ok(r) => r,
            Err(e) => {
                debug!("Package manager query for '{}' failed: {}", package, e);
                return None;
            }
        };
        let version = parse_package_list_output(&result.stdout);
        trace!("Package manager reports '{}' as {:?}", package, version);
        version
    }
}

/// The marked JSON line in script output, ignoring anything printed before it.
fn payload(stdout: &str) -> Option<&str> {
    let start = stdout.rfind(PAYLOAD_MARKER)? + PAYLOAD_MARKER.len();
    stdout[start..].lines().next().map(str::trim)
}

/// Parse the JSON printed by the interpreter script.
pub fn parse_interpreter_output(stdout: &str) -> std::result::Result<InterpreterInfo, String> {
    let json = payload(stdout).ok_or_else(|| format!("unexpected output: {}", stdout.trim()))?;
    serde_json::from_str(json).map_err(|e| format!("unexpected output: {}", e))
}

/// Parse the JSON printed by the import script.
///
/// Anything unreadable counts as not importable.
pub fn parse_import_output(stdout: &str) -> ImportStatus {
    let Some(json) = payload(stdout) else {
        return ImportStatus::NotImportable;
    };
    match serde_json::from_str::<ImportReport>(json) {
        Ok(report) if report.imported => ImportStatus::Imported {
            version: report.version,
        },
        _ => ImportStatus::NotImportable,
    }
}

/// Read the first record's `version` from `conda list --json` output.
pub fn parse_package_list_output(stdout: &str) -> Option<String> {
    let records: Vec<PackageRecord> = serde_json::from_str(stdout.trim()).ok()?;
    records.into_iter().next()?.version
}
