//! # Snippet
//!
//! Command-line front end for snippet-core. `cli` holds the argument
//! parser, logging setup and the build command; `main.rs` only wires them
//! together so the integration tests can call `cmd_build` directly.

pub mod cli;

pub use snippet_core;
