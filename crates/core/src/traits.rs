//! Command and executor contracts.
//!
//! Every built-in implements `Command`; the engine implements
//! `CommandExecutor`, the narrow capability through which chaining commands
//! (macro, help) invoke other commands without holding the concrete engine.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::error::EngineError;
use crate::registry::CommandRegistry;
use crate::result::CommandResult;

/// The contract every command variant implements.
#[async_trait]
pub trait Command: Send + Sync {
    /// Canonical lowercase identifier, fixed at construction.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Whether this command should handle the (alias-resolved) input.
    ///
    /// Default policy: case-insensitive equality with the name, or the name
    /// followed by a space. Commands may override for custom matching.
    fn matches(&self, input: &str) -> bool {
        default_matches(self.name(), input)
    }

    /// Perform the command's action on the alias-resolved input line.
    ///
    /// Any `Err` is caught at the dispatch boundary and converted to a
    /// `Failure` result; it never escapes to the host loop.
    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError>;
}

// ---------------------------------------------------------------------------
// Executor capability
// ---------------------------------------------------------------------------

/// The minimal interface through which one command invokes another.
///
/// Exposed by the dispatch engine, consumed by macro and help. Keeping this
/// narrow means commands never hold references to each other or to the
/// concrete engine type.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command by exact canonical name (not via `matches`).
    ///
    /// Absent names and internal faults both surface as a `Failure` result.
    async fn execute_by_name(&self, name: &str, input: &str) -> CommandResult;

    /// Read-only access to the metadata registry, for help rendering.
    fn registry(&self) -> &CommandRegistry;
}

/// A once-settable weak reference to the engine's executor contract.
///
/// Commands requiring the executor capability hold one of these; the engine
/// builder binds it in a one-time injection pass after construction. The
/// reference is weak, so no cycle is created through the engine's own
/// command list.
#[derive(Default)]
pub struct ExecutorHandle {
    slot: OnceCell<Weak<dyn CommandExecutor>>,
}

impl ExecutorHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the executor. The first bind wins; later binds are ignored.
    pub fn bind(&self, executor: Weak<dyn CommandExecutor>) {
        let _ = self.slot.set(executor);
    }

    /// Fetch the executor, failing if it was never bound or the engine is gone.
    pub fn get(&self) -> Result<Arc<dyn CommandExecutor>, EngineError> {
        self.slot
            .get()
            .and_then(Weak::upgrade)
            .ok_or_else(|| EngineError::ExecutionFault("command executor is not available".into()))
    }
}

// ---------------------------------------------------------------------------
// Matching helpers
// ---------------------------------------------------------------------------

/// Default matching policy: case-insensitive equality with `name`, or input
/// starting with `"<name> "`.
pub fn default_matches(name: &str, input: &str) -> bool {
    let input = input.trim();
    if input.eq_ignore_ascii_case(name) {
        return true;
    }
    input
        .as_bytes()
        .get(..name.len() + 1)
        .is_some_and(|head| {
            head[..name.len()].eq_ignore_ascii_case(name.as_bytes()) && head[name.len()] == b' '
        })
}

/// Strip the matched command name from the front of the input and trim the
/// remainder, preserving the remainder's original casing.
pub fn argument<'a>(input: &'a str, name: &str) -> &'a str {
    let trimmed = input.trim();
    match trimmed.as_bytes().get(..name.len()) {
        Some(head) if head.eq_ignore_ascii_case(name.as_bytes()) => trimmed[name.len()..].trim(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_name_any_case() {
        assert!(default_matches("time", "time"));
        assert!(default_matches("time", "  TIME "));
    }

    #[test]
    fn matches_name_with_argument() {
        assert!(default_matches("weather", "weather rexburg"));
        assert!(!default_matches("weather", "weatherrexburg"));
    }

    #[test]
    fn no_match_on_unrelated_input() {
        assert!(!default_matches("math", "sysinfo"));
        assert!(!default_matches("math", ""));
    }

    #[test]
    fn argument_strips_name_and_preserves_case() {
        assert_eq!(argument("lookup Rust Traits", "lookup"), "Rust Traits");
        assert_eq!(argument("LOOKUP Rust", "lookup"), "Rust");
        assert_eq!(argument("lookup", "lookup"), "");
    }
}
