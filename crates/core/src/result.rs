//! Command result model — the value every command invocation returns.

use crate::error::EngineError;

/// Outcome of a single command execution.
///
/// Exactly one of output/message is present, and neither may be blank —
/// constructing a success with empty output or a failure with an empty
/// message is a programming error rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success { output: String },
    Failure { message: String },
}

impl CommandResult {
    /// Build a successful result. Blank output is rejected.
    pub fn success(output: impl Into<String>) -> Result<Self, EngineError> {
        let output = output.into();
        if output.trim().is_empty() {
            return Err(EngineError::InvalidArgument(
                "success output cannot be empty".into(),
            ));
        }
        Ok(Self::Success { output })
    }

    /// Build a failed result. Blank messages are rejected.
    pub fn failure(message: impl Into<String>) -> Result<Self, EngineError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(EngineError::InvalidArgument(
                "failure message cannot be empty".into(),
            ));
        }
        Ok(Self::Failure { message })
    }

    /// Build a `Failure` carrying an engine error's message.
    ///
    /// Used at the dispatch boundary where a non-blank message must always
    /// be produced, whatever the underlying error renders to.
    pub fn from_error(err: &EngineError) -> Self {
        let mut message = err.to_string();
        if message.trim().is_empty() {
            message = "command execution failed".into();
        }
        Self::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Render either branch to a single display string.
    pub fn render(&self) -> String {
        match self {
            Self::Success { output } => output.clone(),
            Self::Failure { message } => format!("❌ Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_output() {
        let result = CommandResult::success("done").unwrap();
        assert!(result.is_success());
        assert_eq!(result.render(), "done");
    }

    #[test]
    fn failure_renders_with_marker() {
        let result = CommandResult::failure("it broke").unwrap();
        assert!(!result.is_success());
        assert_eq!(result.render(), "❌ Error: it broke");
    }

    #[test]
    fn blank_success_is_rejected() {
        let err = CommandResult::success("   ").unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn blank_failure_is_rejected() {
        let err = CommandResult::failure("").unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn from_error_is_never_blank() {
        let result = CommandResult::from_error(&EngineError::NotFound("demo".into()));
        assert_eq!(result.render(), "❌ Error: not found: demo");
    }
}
