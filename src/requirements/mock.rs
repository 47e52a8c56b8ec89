//! Mock probe implementation for testing.
//!
//! `MockProbe` implements [`PackageProbe`] from a fixed script of
//! importable modules and package-manager records, and records the
//! interpreter and package-manager queries it receives.
//!
//! # Example
//!
//! ```
//! use envcheck::requirements::{ImportStatus, MockProbe, PackageProbe};
//!
//! let probe = MockProbe::with_python(3, 10, 4)
//!     .module("numpy", Some("1.21.0"))
//!     .managed("ffmpeg", "5.1.2");
//!
//! assert_eq!(probe.interpreter().unwrap().release(), "3.10.4");
//! assert!(matches!(probe.import_package("numpy"), ImportStatus::Imported { .. }));
//! assert_eq!(probe.import_package("ffmpeg"), ImportStatus::NotImportable);
//! assert_eq!(probe.package_manager_version("ffmpeg").as_deref(), Some("5.1.2"));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{EnvCheckError, Result};

use super::probe::{ImportStatus, InterpreterInfo, PackageProbe};

/// Scripted probe for tests.
#[derive(Debug, Default)]
pub struct MockProbe {
    interpreter: Option<InterpreterInfo>,
    modules: HashMap<String, Option<String>>,
    managed: HashMap<String, String>,
    interpreter_queries: Cell<usize>,
    manager_queries: RefCell<Vec<String>>,
}

impl MockProbe {
    /// A probe with no interpreter and nothing installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe whose interpreter reports the given version.
    pub fn with_python(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            interpreter: Some(InterpreterInfo {
                prefix: "/opt/conda/envs/workshop".to_string(),
                version: format!("{}.{}.{} | packaged by conda-forge |", major, minor, micro),
                version_info: [major, minor, micro],
            }),
            ..Default::default()
        }
    }

    /// Make `name` importable, optionally with a `__version__`.
    pub fn module(mut self, name: &str, version: Option<&str>) -> Self {
        self.modules
            .insert(name.to_string(), version.map(String::from));
        self
    }

    /// Make the package manager report `name` at `version`.
    pub fn managed(mut self, name: &str, version: &str) -> Self {
        self.managed.insert(name.to_string(), version.to_string());
        self
    }

    /// How many times the interpreter was queried.
    pub fn interpreter_queries(&self) -> usize {
        self.interpreter_queries.get()
    }

    /// Package names the package manager was asked about, in order.
    pub fn manager_queries(&self) -> Vec<String> {
        self.manager_queries.borrow().clone()
    }
}

impl PackageProbe for MockProbe {
    fn interpreter(&self) -> Result<InterpreterInfo> {
        self.interpreter_queries.set(self.interpreter_queries.get() + 1);
        self.interpreter
            .clone()
            .ok_or_else(|| EnvCheckError::InterpreterUnavailable {
                python: "python".to_string(),
                message: "no interpreter configured".to_string(),
            })
    }

    fn import_package(&self, module: &str) -> ImportStatus {
        match self.modules.get(module) {
            Some(version) => ImportStatus::Imported {
                version: version.clone(),
            },
            None => ImportStatus::NotImportable,
        }
    }

    fn package_manager_version(&self, package: &str) -> Option<String> {
        self.manager_queries.borrow_mut().push(package.to_string());
        self.managed.get(package).cloned()
    }
}
