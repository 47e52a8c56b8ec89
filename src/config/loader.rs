//! Environment file loading.

use crate::config::schema::EnvironmentFile;
use crate::error::{EnvCheckError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and parse an environment file.
///
/// # Errors
///
/// Returns `EnvironmentNotFound` if the file doesn't exist.
/// Returns `EnvironmentParseError` if the YAML is invalid or lacks `dependencies`.
pub fn load_environment(path: &Path) -> Result<EnvironmentFile> {
    debug!("Loading environment file from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvCheckError::EnvironmentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvCheckError::Io(e)
        }
    })?;

    parse_environment(&content, path)
}

/// Parse YAML content into an [`EnvironmentFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_environment(content: &str, source_path: &Path) -> Result<EnvironmentFile> {
    serde_yaml::from_str(content).map_err(|e| EnvCheckError::EnvironmentParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
