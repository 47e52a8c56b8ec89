//! Options controlling a check run.

use std::path::PathBuf;

/// Environment file location relative to the working directory.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "../environment.yml";

/// Python interpreter used when none is configured.
pub const DEFAULT_PYTHON: &str = "python";

/// Package manager used for the binary-package fallback.
pub const DEFAULT_CONDA: &str = "conda";

/// Where to read requirements from and which tools to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Path to the environment file.
    pub environment_file: PathBuf,
    /// Python executable whose environment is checked.
    pub python: String,
    /// Conda executable used for package-manager lookups.
    pub conda: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            environment_file: PathBuf::from(DEFAULT_ENVIRONMENT_FILE),
            python: DEFAULT_PYTHON.to_string(),
            conda: DEFAULT_CONDA.to_string(),
        }
    }
}

impl CheckOptions {
    /// Use a different environment file.
    pub fn with_environment_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.environment_file = path.into();
        self
    }

    /// Use a different Python executable.
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Use a different conda executable.
    pub fn with_conda(mut self, conda: impl Into<String>) -> Self {
        self.conda = conda.into();
        self
    }
}
