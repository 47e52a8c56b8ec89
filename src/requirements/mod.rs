//! Requirement parsing and environment checking.
//!
//! # Modules
//!
//! - [`parser`] - Turns dependency entries into a requirements set
//! - [`version`] - Base-version extraction and comparison
//! - [`probe`] - Queries the interpreter and package manager
//! - [`checker`] - Walks the requirements and reports each result
//! - [`mock`] - Scripted probe for tests
//! - [`status`] - Result types for single checks and whole runs

pub mod checker;
pub mod mock;
pub mod parser;
pub mod probe;
pub mod status;
pub mod version;

pub use checker::{check_python, EnvChecker, BINARY_PACKAGES};
pub use mock::MockProbe;
pub use parser::{parse_entry, parse_requirements, Requirements, VersionSpec};
pub use probe::{ImportStatus, InterpreterInfo, PackageProbe, PythonProbe};
pub use status::{CheckOutcome, CheckReport, CheckResult};
pub use version::{satisfies, BaseVersion};
