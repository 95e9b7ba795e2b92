//! Command dispatch — the engine owning the registered command set.
//!
//! Dispatch is a linear scan in registration order, first match wins; the
//! order of the command list is therefore a priority contract, not an
//! implementation accident.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use adjutant_core::{
    Command, CommandExecutor, CommandMetadata, CommandRegistry, CommandResult, EngineError,
};

use crate::alias::AliasResolver;

/// Reserved output of the exit command. The host loop must compare the
/// rendered response against this value by exact string equality before
/// displaying it.
pub const EXIT_SENTINEL: &str = "EXIT";

/// Response to blank input. No command is consulted.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter a command. Type 'help' to see available commands.";

/// Response when no registered command matches the resolved input.
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "❌ Unknown command. Type 'help' to see available commands.";

/// The dispatch engine: an ordered command list, the metadata registry, and
/// the alias table.
pub struct CommandEngine {
    commands: Vec<Arc<dyn Command>>,
    registry: CommandRegistry,
    aliases: RwLock<AliasResolver>,
}

impl std::fmt::Debug for CommandEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEngine")
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl CommandEngine {
    /// Build an engine over a fixed, ordered command set.
    ///
    /// Command names must be non-empty, lowercase, and unique; a collision
    /// is a configuration error (`DuplicateRegistration`) and aborts
    /// construction. Commands missing a registry record get a minimal one
    /// backfilled from their own name and description so help can always
    /// render them.
    pub fn new(
        commands: Vec<Arc<dyn Command>>,
        mut registry: CommandRegistry,
        aliases: AliasResolver,
    ) -> Result<Self, EngineError> {
        let mut seen: Vec<&str> = Vec::with_capacity(commands.len());
        for command in &commands {
            let name = command.name();
            if name.trim().is_empty() {
                return Err(EngineError::InvalidArgument(
                    "command name cannot be empty".into(),
                ));
            }
            if name != name.to_lowercase() {
                return Err(EngineError::InvalidArgument(format!(
                    "command name must be lowercase: {name}"
                )));
            }
            if seen.contains(&name) {
                return Err(EngineError::DuplicateRegistration(name.to_string()));
            }
            seen.push(name);
        }

        for command in &commands {
            if !registry.is_registered(command.name()) {
                registry.register(CommandMetadata::new(
                    command.name(),
                    command.description(),
                    command.name(),
                    "General",
                ))?;
            }
        }

        Ok(Self {
            commands,
            registry,
            aliases: RwLock::new(aliases),
        })
    }

    /// Process one end-user input line and render the response.
    ///
    /// Blank input gets the fixed prompt message; unmatched input gets the
    /// fixed unknown-command message; a command fault is converted to a
    /// rendered `Failure` — nothing escapes to the caller.
    pub async fn process(&self, raw: &str) -> String {
        let input = raw.trim();
        if input.is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        let resolved = self.aliases.read().await.resolve(input);

        let Some(command) = self.commands.iter().find(|c| c.matches(&resolved)) else {
            info!(input = %resolved, "no command matched");
            return UNKNOWN_COMMAND_MESSAGE.to_string();
        };

        info!(command = %command.name(), "dispatching");
        match command.execute(&resolved).await {
            Ok(result) => result.render(),
            Err(err) => {
                warn!(command = %command.name(), error = %err, "command fault");
                CommandResult::from_error(&err).render()
            }
        }
    }

    /// Add an alias phrase to this engine's resolver.
    pub async fn register_alias(&self, phrase: &str, token: &str) {
        self.aliases.write().await.register(phrase, token);
    }

    /// Read-only access to the metadata registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

#[async_trait]
impl CommandExecutor for CommandEngine {
    async fn execute_by_name(&self, name: &str, input: &str) -> CommandResult {
        let needle = name.trim().to_lowercase();
        let Some(command) = self.commands.iter().find(|c| c.name() == needle) else {
            return CommandResult::from_error(&EngineError::UnknownCommand(needle));
        };

        match command.execute(input).await {
            Ok(result) => result,
            Err(err) => {
                warn!(command = %needle, error = %err, "chained command fault");
                CommandResult::from_error(&err)
            }
        }
    }

    fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
