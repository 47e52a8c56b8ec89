//! Schema for conda `environment.yml` files.

use serde::Deserialize;

/// A conda environment declaration.
///
/// Only `dependencies` is required; the other keys are read for display.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentFile {
    /// Environment name.
    #[serde(default)]
    pub name: Option<String>,

    /// Channels packages are pulled from.
    #[serde(default)]
    pub channels: Vec<String>,

    /// Dependency entries in declaration order.
    pub dependencies: Vec<Dependency>,
}

/// A single entry of the `dependencies` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// A conda match spec such as `numpy>=1.21`.
    Spec(String),

    /// Anything else, typically a `pip:` sub-list.
    Nested(serde_yaml::Value),
}
