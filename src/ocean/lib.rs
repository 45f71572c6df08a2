//! # Ocean Architecture
//!
//! Ocean is a **UI-agnostic task list library** with a terminal client on top.
//! The core is a small state manager: an ordered collection of todos plus an
//! active filter, written through to a best-effort key-value store after every
//! change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, prompts, exit codes    │
//! │  - Owns transient UI state such as the inline-edit draft    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the collection and the filter                       │
//! │  - Dispatches to commands, writes through to the store      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure transitions over TodoState                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore: encoding and graceful fallbacks               │
//! │  - KeyValueBackend: FsBackend (production), MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Storage is injected, so the same core can sit behind any UI
//! and tests run against [`store::mem_backend::MemBackend`].
//!
//! ## Failure Model
//!
//! Storage is a cache, not a log. Unreadable data loads as an empty list,
//! failed writes are logged and dropped, and invalid input to an operation
//! (blank title, unknown id) is a no-op. None of these surface as errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The state manager facade
//! - [`commands`]: One pure transition per operation
//! - [`state`]: Collection, filter, and derived views
//! - [`store`]: Slot backends and the todo store adapter
//! - [`model`]: `Todo`, `Priority`, `Filter`, partial updates
//! - [`index`]: Display indexes for the CLI
//! - [`config`]: Client configuration
//! - [`remote`]: Placeholder contract for a future server
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod remote;
pub mod state;
pub mod store;

