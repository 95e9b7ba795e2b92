//! `adjutant-engine` — alias resolution and command dispatch.
//!
//! Provides:
//! - `AliasResolver`: natural-language phrase → canonical command token
//! - `CommandEngine`: the ordered-scan dispatcher and executor capability

pub mod alias;
pub mod engine;

pub use alias::{AliasResolver, LOOKUP_TOKEN};
pub use engine::{CommandEngine, EMPTY_INPUT_PROMPT, EXIT_SENTINEL, UNKNOWN_COMMAND_MESSAGE};
