//! `adjutant-core` — shared types for the adjutant command engine.
//!
//! Provides:
//! - The error taxonomy (`EngineError`)
//! - The command result model (`CommandResult`)
//! - The `Command` / `CommandExecutor` traits and the executor handle
//! - Command metadata records and the descriptive registry

pub mod error;
pub mod registry;
pub mod result;
pub mod traits;

pub use error::EngineError;
pub use registry::{CommandMetadata, CommandRegistry};
pub use result::CommandResult;
pub use traits::{argument, default_matches, Command, CommandExecutor, ExecutorHandle};
