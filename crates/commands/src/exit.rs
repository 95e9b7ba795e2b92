//! `exit` — signal the host loop to terminate.

use async_trait::async_trait;

use adjutant_core::{Command, CommandResult, EngineError};
use adjutant_engine::EXIT_SENTINEL;

/// Returns the reserved exit sentinel as its output. The host loop checks
/// the rendered response against `EXIT_SENTINEL` by exact equality.
pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "Exit the application"
    }

    async fn execute(&self, _input: &str) -> Result<CommandResult, EngineError> {
        CommandResult::success(EXIT_SENTINEL)
    }
}
