//! Environment file loading and check options.
//!
//! This module handles:
//! - The `environment.yml` schema in [`schema`]
//! - Reading and parsing the file in [`loader`]
//! - Run-time options gathered from the CLI in [`options`]
//!
//! # Example
//!
//! ```
//! use envcheck::config::load_environment;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("environment.yml");
//! fs::write(&path, "name: workshop\ndependencies:\n  - numpy=1.21\n").unwrap();
//!
//! let env = load_environment(&path).unwrap();
//! assert_eq!(env.name.as_deref(), Some("workshop"));
//! assert_eq!(env.dependencies.len(), 1);
//! ```

pub mod loader;
pub mod options;
pub mod schema;

pub use loader::{load_environment, parse_environment};
pub use options::{CheckOptions, DEFAULT_CONDA, DEFAULT_ENVIRONMENT_FILE, DEFAULT_PYTHON};
pub use schema::{Dependency, EnvironmentFile};
