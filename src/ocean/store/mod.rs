//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::KeyValueBackend`]: raw named string slots, the shape of a
//!   browser's `localStorage`. Implemented by [`fs_backend::FsBackend`]
//!   (one file per slot, atomic writes) and [`mem_backend::MemBackend`]
//!   (a `RefCell<HashMap>` for tests, with write error simulation).
//! - [`todo_store::TodoStore`]: encodes the collection and the filter into
//!   their slots and treats the backend as a best-effort cache.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── ocean_todos_v1          # JSON array of todo records
//! ├── ocean_todos_filter_v1   # all | active | completed
//! └── config.json             # Client configuration
//! ```
//!
//! The store only ever receives full-collection snapshots, never diffs.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod todo_store;

pub use backend::KeyValueBackend;
pub use todo_store::TodoStore;

/// Slot holding the JSON array of todos.
pub const TODOS_KEY: &str = "ocean_todos_v1";

/// Slot holding the active filter.
pub const FILTER_KEY: &str = "ocean_todos_filter_v1";
