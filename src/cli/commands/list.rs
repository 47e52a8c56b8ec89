//! List command implementation.
//!
//! The `envcheck list` command shows the requirements parsed from the
//! environment file without querying the environment.

use crate::config::{load_environment, CheckOptions};
use crate::error::{EnvCheckError, Result};
use crate::requirements::parse_requirements;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    options: CheckOptions,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let environment = match load_environment(&self.options.environment_file) {
            Ok(env) => env,
            Err(
                e @ (EnvCheckError::EnvironmentNotFound { .. }
                | EnvCheckError::EnvironmentParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if let Some(name) = &environment.name {
            ui.message(&format!("Environment: {}", name));
        }
        if !environment.channels.is_empty() {
            ui.message(&format!("Channels: {}", environment.channels.join(", ")));
        }

        let requirements = parse_requirements(&environment.dependencies);
        if requirements.is_empty() {
            ui.message("No requirements declared.");
            return Ok(CommandResult::success());
        }

        let width = requirements.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        for (name, spec) in requirements.iter() {
            ui.message(&format!("  {:<width$}  {}", name, spec, width = width));
        }

        Ok(CommandResult::success())
    }
}
