//! `macro` — save and replay command chains.
//!
//! Chaining is best-effort: a failing sub-command is recorded in the
//! transcript and the replay continues; the macro itself still succeeds.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use adjutant_core::{argument, Command, CommandResult, EngineError, ExecutorHandle};

use crate::render::banner;

const USAGE: &str = "Usage: macro <list|run|save> [name] [commands]";

/// Transitive macro-to-macro calls beyond this depth are refused instead of
/// recursing without bound (a self-referencing macro would otherwise never
/// terminate).
const MAX_MACRO_DEPTH: usize = 8;

pub struct MacroCommand {
    pub(crate) executor: ExecutorHandle,
    macros: RwLock<BTreeMap<String, String>>,
    depth: AtomicUsize,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self {
            executor: ExecutorHandle::new(),
            macros: RwLock::new(BTreeMap::new()),
            depth: AtomicUsize::new(0),
        }
    }

    async fn save(&self, rest: &str) -> Result<CommandResult, EngineError> {
        let Some((name, commands)) = rest.split_once(char::is_whitespace) else {
            return CommandResult::failure(
                "Usage: macro save <name> <command1>; <command2>; ...",
            );
        };
        let name = name.trim().to_string();
        let commands = commands.trim().to_string();

        self.macros.write().await.insert(name.clone(), commands);
        info!(name = %name, "macro saved");
        CommandResult::success(format!(
            "✓ Macro '{name}' saved!\n  Run it with: macro run {name}"
        ))
    }

    async fn run(&self, name: &str) -> Result<CommandResult, EngineError> {
        let Some(commands) = self.macros.read().await.get(name).cloned() else {
            return Err(EngineError::NotFound(format!(
                "macro '{name}' (use 'macro list' to see saved macros)"
            )));
        };

        let depth = self.depth.fetch_add(1, Ordering::SeqCst);
        if depth >= MAX_MACRO_DEPTH {
            self.depth.fetch_sub(1, Ordering::SeqCst);
            return CommandResult::failure(format!(
                "Macro '{name}' exceeds the maximum chain depth of {MAX_MACRO_DEPTH}."
            ));
        }
        let result = self.replay(name, &commands).await;
        self.depth.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn replay(&self, name: &str, commands: &str) -> Result<CommandResult, EngineError> {
        let executor = self.executor.get()?;
        let mut transcript = format!("▶ Executing macro: {name}\n\n");

        for segment in commands.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            transcript.push_str(&format!("[Running: {segment}]\n"));
            let sub_name = segment.split_whitespace().next().unwrap_or(segment);
            let result = executor.execute_by_name(sub_name, segment).await;
            transcript.push_str(&result.render());
            transcript.push_str("\n---\n");
        }

        CommandResult::success(transcript)
    }

    async fn list(&self) -> Result<CommandResult, EngineError> {
        let macros = self.macros.read().await;
        if macros.is_empty() {
            return CommandResult::success(banner(
                "SAVED MACROS",
                "No macros saved yet. Create one with: macro save <name> <commands>",
            ));
        }

        let body = macros
            .iter()
            .map(|(name, commands)| format!("📌 {name}\n   Commands: {commands}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        CommandResult::success(banner("SAVED MACROS", &body))
    }
}

impl Default for MacroCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for MacroCommand {
    fn name(&self) -> &str {
        "macro"
    }

    fn description(&self) -> &str {
        "Create and replay command chains"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let rest = argument(input, self.name());
        let (action, remainder) = match rest.split_once(char::is_whitespace) {
            Some((action, remainder)) => (action, remainder.trim()),
            None => (rest, ""),
        };

        match action.to_lowercase().as_str() {
            "" => CommandResult::failure(USAGE),
            "list" => self.list().await,
            "save" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: macro save <name> <command1>; <command2>; ...")
                } else {
                    self.save(remainder).await
                }
            }
            "run" => {
                if remainder.is_empty() {
                    CommandResult::failure("Usage: macro run <macro name>")
                } else {
                    self.run(remainder).await
                }
            }
            other => CommandResult::failure(format!(
                "Unknown macro action '{other}'. Use: list, run, or save"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adjutant_core::CommandExecutor;
    use adjutant_engine::{AliasResolver, CommandEngine};

    use adjutant_core::CommandRegistry;

    struct EchoCommand;

    #[async_trait]
    impl Command for EchoCommand {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "echo the input back"
        }

        async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
            CommandResult::success(format!("echoed: {input}"))
        }
    }

    /// Engine with an echo command and a bound macro command. Returns both
    /// so tests can drive the macro directly or through the engine.
    fn test_engine() -> (Arc<CommandEngine>, Arc<MacroCommand>) {
        let macro_cmd = Arc::new(MacroCommand::new());
        let commands: Vec<Arc<dyn Command>> = vec![Arc::new(EchoCommand), macro_cmd.clone()];
        let engine = Arc::new(
            CommandEngine::new(commands, CommandRegistry::new(), AliasResolver::new()).unwrap(),
        );
        let executor: Arc<dyn CommandExecutor> = engine.clone();
        macro_cmd.executor.bind(Arc::downgrade(&executor));
        (engine, macro_cmd)
    }

    #[tokio::test]
    async fn save_then_run_replays_in_order() {
        let (_engine, macro_cmd) = test_engine();

        let saved = macro_cmd
            .execute("macro save demo echo one; echo two")
            .await
            .unwrap();
        assert!(saved.is_success());

        let transcript = macro_cmd.execute("macro run demo").await.unwrap().render();
        let first = transcript.find("echoed: echo one").unwrap();
        let second = transcript.find("echoed: echo two").unwrap();
        assert!(first < second);
        assert!(transcript.contains("[Running: echo one]"));
    }

    #[tokio::test]
    async fn failing_sub_commands_do_not_fail_the_macro() {
        let (_engine, macro_cmd) = test_engine();
        macro_cmd
            .execute("macro save mixed echo ok; nosuchcmd; echo after")
            .await
            .unwrap();

        let result = macro_cmd.execute("macro run mixed").await.unwrap();
        assert!(result.is_success());
        let transcript = result.render();
        assert!(transcript.contains("❌ Error: unknown command: nosuchcmd"));
        assert!(transcript.contains("echoed: echo after"));
    }

    #[tokio::test]
    async fn running_an_unknown_macro_is_not_found() {
        let (_engine, macro_cmd) = test_engine();
        let err = macro_cmd.execute("macro run ghost").await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[tokio::test]
    async fn saving_twice_overwrites() {
        let (_engine, macro_cmd) = test_engine();
        macro_cmd.execute("macro save demo echo one").await.unwrap();
        macro_cmd.execute("macro save demo echo two").await.unwrap();

        let transcript = macro_cmd.execute("macro run demo").await.unwrap().render();
        assert!(transcript.contains("echoed: echo two"));
        assert!(!transcript.contains("echoed: echo one"));
    }

    #[tokio::test]
    async fn self_referencing_macro_is_cut_off() {
        let (_engine, macro_cmd) = test_engine();
        macro_cmd
            .execute("macro save loop macro run loop")
            .await
            .unwrap();

        let result = macro_cmd.execute("macro run loop").await.unwrap();
        assert!(result.is_success());
        assert!(result.render().contains("maximum chain depth"));
    }

    #[tokio::test]
    async fn listing_without_macros_is_a_friendly_success() {
        let (_engine, macro_cmd) = test_engine();
        let result = macro_cmd.execute("macro list").await.unwrap();
        assert!(result.is_success());
        assert!(result.render().contains("No macros saved yet"));
    }

    #[tokio::test]
    async fn unknown_action_is_reported() {
        let (_engine, macro_cmd) = test_engine();
        let result = macro_cmd.execute("macro frobnicate x").await.unwrap();
        assert!(result.render().contains("Unknown macro action 'frobnicate'"));
    }
}
