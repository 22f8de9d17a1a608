//! Logger setup for binaries built on the scene crate.
//!
//! The math and scene crates only emit through the `log` facade; this module
//! wires that facade to `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
