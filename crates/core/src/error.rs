use thiserror::Error;

/// Top-level error type for the adjutant command engine.
///
/// `DuplicateRegistration` (and invalid command names) abort engine
/// construction; every other kind is converted to a `Failure` result at the
/// dispatch boundary and never escapes to the host loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("disabled: {0}")]
    Disabled(String),

    #[error("duplicate registration: {0}")]
    DuplicateRegistration(String),

    #[error("execution fault: {0}")]
    ExecutionFault(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
