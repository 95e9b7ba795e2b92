//! `open` — launch a configured application.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::process::Command as ProcessCommand;
use tracing::info;

use adjutant_core::{argument, Command, CommandResult, EngineError};

const USAGE: &str = "Usage: open <app>\nExample: open calculator";

/// Launches applications from the configured app-name → command-line table.
/// The table value's first token is the program, the rest are arguments.
pub struct OpenAppCommand {
    apps: HashMap<String, String>,
}

impl OpenAppCommand {
    pub fn new(apps: HashMap<String, String>) -> Self {
        Self { apps }
    }

    fn known_apps(&self) -> String {
        let mut names: Vec<&str> = self.apps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

#[async_trait]
impl Command for OpenAppCommand {
    fn name(&self) -> &str {
        "open"
    }

    fn description(&self) -> &str {
        "Open an application"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let app = argument(input, self.name()).to_lowercase();
        if app.is_empty() {
            return CommandResult::failure(USAGE);
        }

        let Some(command_line) = self.apps.get(&app) else {
            return CommandResult::failure(format!(
                "Unknown app '{app}'. Try: {}",
                self.known_apps()
            ));
        };

        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return CommandResult::failure(format!("App '{app}' has an empty launch command."));
        };

        match ProcessCommand::new(program).args(parts).spawn() {
            Ok(_child) => {
                info!(app = %app, program = %program, "application launched");
                CommandResult::success(format!("✓ Opening {app}..."))
            }
            Err(err) => CommandResult::failure(format!("Failed to open {app}: {err}")),
        }
    }
}
