//! envcheck - Validate a Python development environment.
//!
//! envcheck reads the `dependencies` of a conda `environment.yml`, checks
//! the interpreter version and every importable package against them, and
//! prints an OK/FAIL line per item.
//!
//! # Modules
//!
//! - [`check`] - Top-level check with strict-mode verdict
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment file loading and check options
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Requirement parsing, version comparison and probing
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use envcheck::check::check_environment;
//! use envcheck::requirements::{parse_entry, MockProbe, PackageProbe, Requirements};
//! use envcheck::ui::MockUI;
//!
//! let mut requirements = Requirements::new();
//! for line in ["python=3.10", "numpy>=1.21,<=1.26", "foo"] {
//!     let (name, spec) = parse_entry(line).unwrap();
//!     requirements.insert(name, spec);
//! }
//!
//! let probe = MockProbe::with_python(3, 10, 4).module("numpy", Some("1.24.3"));
//! let interpreter = probe.interpreter().unwrap();
//! let mut ui = MockUI::new();
//!
//! let report = check_environment(&probe, &interpreter, requirements, false, &mut ui).unwrap();
//! assert_eq!(report.failures(), vec!["foo"]);
//! assert_eq!(ui.failures(), &["foo is not installed.".to_string()]);
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use check::run_env_check;
pub use error::{EnvCheckError, Result};
