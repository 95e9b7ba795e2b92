//! `adjutant-logging` — structured logging setup.
//!
//! Console output plus a daily-rolling NDJSON file, with `RUST_LOG` /
//! configured-level filtering.

pub mod logger;

pub use logger::init_logger;
