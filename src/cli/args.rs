//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CheckOptions, DEFAULT_CONDA, DEFAULT_ENVIRONMENT_FILE, DEFAULT_PYTHON};

/// envcheck - Validate a Python environment against its environment.yml.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the environment file
    #[arg(short, long, global = true, env = "ENVCHECK_FILE", default_value = DEFAULT_ENVIRONMENT_FILE)]
    pub file: PathBuf,

    /// Python interpreter whose environment is checked
    #[arg(long, global = true, env = "ENVCHECK_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Conda executable used for binary package lookups
    #[arg(long, global = true, env = "ENVCHECK_CONDA", default_value = DEFAULT_CONDA)]
    pub conda: String,

    /// Report failures but exit successfully
    #[arg(long, global = true)]
    pub no_strict: bool,

    /// Only show failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Collect the options shared by every command.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions::default()
            .with_environment_file(&self.file)
            .with_python(&self.python)
            .with_conda(&self.conda)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the environment (default if no command specified)
    Check,

    /// List the requirements parsed from the environment file
    List,
}
