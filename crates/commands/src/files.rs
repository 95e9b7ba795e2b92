//! `createfile` — write a new file with inline content.

use async_trait::async_trait;
use tracing::info;

use adjutant_core::{argument, Command, CommandResult, EngineError};

const USAGE: &str = "Usage: createfile <filename> <content>\nExample: createfile notes.txt Hello world";

pub struct CreateFileCommand;

#[async_trait]
impl Command for CreateFileCommand {
    fn name(&self) -> &str {
        "createfile"
    }

    fn description(&self) -> &str {
        "Create a new file with content"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let rest = argument(input, self.name());
        let Some((filename, content)) = rest.split_once(char::is_whitespace) else {
            return CommandResult::failure(USAGE);
        };
        let content = content.trim();

        match tokio::fs::write(filename, content).await {
            Ok(()) => {
                info!(file = %filename, bytes = content.len(), "file created");
                CommandResult::success(format!("✓ Created file '{filename}' with content."))
            }
            Err(err) => CommandResult::failure(format!("Failed to create file: {err}")),
        }
    }
}
