//! # CLI Layer
//!
//! This module is **one possible UI client** for ocean. It is the only place
//! that knows about stdout/stderr, prompts, and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap ([`setup`])
//! 2. **Context Setup**: data directory, config, logging, and the `TodoApi`
//! 3. **API Dispatch**: one handler per command ([`commands`])
//! 4. **Output Formatting**: `CmdResult` into terminal output ([`render`])
//! 5. **Transient UI State**: the inline-edit draft ([`edit`]), which never
//!    reaches the core until it is committed

pub mod commands;
pub mod edit;
pub mod logging;
pub mod render;
pub mod setup;

pub use commands::run;
