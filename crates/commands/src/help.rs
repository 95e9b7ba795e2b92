//! `help` — render the command registry.
//!
//! Uses only the executor capability's registry accessor; it never touches
//! other commands.

use async_trait::async_trait;

use adjutant_core::{Command, CommandResult, EngineError, ExecutorHandle};

use crate::render::banner;

pub struct HelpCommand {
    pub(crate) executor: ExecutorHandle,
}

impl HelpCommand {
    pub fn new() -> Self {
        Self {
            executor: ExecutorHandle::new(),
        }
    }
}

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Show available commands"
    }

    async fn execute(&self, _input: &str) -> Result<CommandResult, EngineError> {
        let executor = self.executor.get()?;
        let registry = executor.registry();

        let mut lines = Vec::new();
        for (category, commands) in registry.by_category() {
            lines.push(format!("── {category} ──"));
            for meta in commands {
                lines.push(format!("  • {:<12} {}", meta.name, meta.description));
                if meta.usage != meta.name {
                    lines.push(format!("      usage: {}", meta.usage));
                }
                if !meta.aliases.is_empty() {
                    lines.push(format!("      aka:   {}", meta.aliases.join(", ")));
                }
            }
            lines.push(String::new());
        }
        lines.push("💡 Natural language works too: 'what time is it',".into());
        lines.push("   'how is the weather', 'what is rust', 'show commands'.".into());
        lines.push("   Type 'exit' or 'quit' to leave.".into());

        CommandResult::success(banner("AVAILABLE COMMANDS", &lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adjutant_core::{CommandExecutor, CommandMetadata, CommandRegistry};

    struct FakeExecutor {
        registry: CommandRegistry,
    }

    #[async_trait]
    impl CommandExecutor for FakeExecutor {
        async fn execute_by_name(&self, _name: &str, _input: &str) -> CommandResult {
            CommandResult::from_error(&EngineError::UnknownCommand("none".into()))
        }

        fn registry(&self) -> &CommandRegistry {
            &self.registry
        }
    }

    #[tokio::test]
    async fn unbound_executor_is_a_fault() {
        let err = HelpCommand::new().execute("help").await.unwrap_err();
        assert!(matches!(err, EngineError::ExecutionFault(_)));
    }

    #[tokio::test]
    async fn renders_every_registered_command() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                CommandMetadata::new("time", "Display current date and time", "time", "System")
                    .with_aliases(&["what time is it"]),
            )
            .unwrap();
        registry
            .register(CommandMetadata::new(
                "weather",
                "Get current weather",
                "weather <city>",
                "Web",
            ))
            .unwrap();

        let executor: Arc<dyn CommandExecutor> = Arc::new(FakeExecutor { registry });
        let help = HelpCommand::new();
        help.executor.bind(Arc::downgrade(&executor));

        let rendered = help.execute("help").await.unwrap().render();
        assert!(rendered.contains("── System ──"));
        assert!(rendered.contains("time"));
        assert!(rendered.contains("usage: weather <city>"));
        assert!(rendered.contains("aka:   what time is it"));
    }
}
