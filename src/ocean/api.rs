//! # API Facade
//!
//! [`TodoApi`] is the state manager: the single owner of the todo collection
//! and the active filter, and the only entry point UIs should use.
//!
//! ## Role and Responsibilities
//!
//! - **Seeds** state once, at construction, from the [`TodoStore`]
//! - **Dispatches** each operation to its command in `commands/*.rs`
//! - **Writes through** to the store after every change: the full collection
//!   when todos changed, the filter when the filter changed
//! - **Returns structured types** (`CmdResult`), never strings
//!
//! Storage failures never reach the caller. The in-memory state stays the
//! source of truth for the session even when a write is dropped.
//!
//! ## Generic Over KeyValueBackend
//!
//! `TodoApi<B: KeyValueBackend>` is generic over the slot backend:
//! - Production: `TodoApi<FsBackend>`
//! - Testing: `TodoApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::index::{index_todos, TodoSelector};
use crate::model::{AddOptions, Filter, Todo, TodoUpdate};
use crate::state::{Counts, TodoState};
use crate::store::{KeyValueBackend, TodoStore};
use tracing::debug;

/// The main API facade for todo operations.
pub struct TodoApi<B: KeyValueBackend> {
    store: TodoStore<B>,
    state: TodoState,
}

impl<B: KeyValueBackend> TodoApi<B> {
    /// Seeds the collection and filter from storage. This is the only read
    /// the API ever makes.
    pub fn new(backend: B) -> Self {
        let store = TodoStore::new(backend);
        let state = TodoState::new(store.load(), store.load_filter());
        debug!(
            todos = state.todos.len(),
            filter = %state.filter,
            "state seeded from storage"
        );
        Self { store, state }
    }

    pub fn add(&mut self, title: &str, options: AddOptions) -> commands::CmdResult {
        let result = commands::add::run(&mut self.state, title, options);
        self.write_todos(&result, "add");
        result
    }

    pub fn toggle(&mut self, id: &str) -> commands::CmdResult {
        let result = commands::toggle::run(&mut self.state, id);
        self.write_todos(&result, "toggle");
        result
    }

    pub fn update(&mut self, id: &str, update: TodoUpdate) -> commands::CmdResult {
        let result = commands::update::run(&mut self.state, id, update);
        self.write_todos(&result, "update");
        result
    }

    pub fn delete(&mut self, id: &str) -> commands::CmdResult {
        let result = commands::delete::run(&mut self.state, id);
        self.write_todos(&result, "delete");
        result
    }

    pub fn clear_completed(&mut self) -> commands::CmdResult {
        let result = commands::clear::completed(&mut self.state);
        self.write_todos(&result, "clear_completed");
        result
    }

    pub fn toggle_all(&mut self, completed: bool) -> commands::CmdResult {
        let result = commands::toggle_all::run(&mut self.state, completed);
        self.write_todos(&result, "toggle_all");
        result
    }

    /// Removes every todo. Confirmation is up to the caller.
    pub fn clear_all(&mut self) -> commands::CmdResult {
        let result = commands::clear::all(&mut self.state);
        self.write_todos(&result, "clear_all");
        result
    }

    pub fn set_filter(&mut self, filter: Filter) -> commands::CmdResult {
        let result = commands::filter::run(&mut self.state, filter);
        debug!(op = "set_filter", %filter, "writing filter through");
        self.store.save_filter(self.state.filter);
        result
    }

    /// Lists the active filter's view, or `filter` when given (without
    /// changing the active filter).
    pub fn list(&self, filter: Option<Filter>) -> commands::CmdResult {
        commands::list::run(&self.state, filter.unwrap_or(self.state.filter))
    }

    /// Resolves user selectors (display indexes or raw ids) against the
    /// active filter's view.
    pub fn resolve<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<String>> {
        let selectors = parse_selectors(inputs)?;
        let view = index_todos(self.state.filtered());
        let resolved = commands::helpers::resolve_selectors(&view, &selectors)?;
        Ok(resolved.into_iter().map(|(_, id)| id).collect())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state.todos
    }

    pub fn filtered_todos(&self) -> Vec<&Todo> {
        self.state.filtered()
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn counts(&self) -> Counts {
        self.state.counts()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.state.get(id)
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    fn write_todos(&self, result: &commands::CmdResult, op: &str) {
        if !result.changed() {
            debug!(op, "no change, nothing to write");
            return;
        }
        debug!(op, count = self.state.todos.len(), "writing todos through");
        self.store.save(&self.state.todos);
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<TodoSelector>> {
    inputs
        .iter()
        .map(|s| {
            s.as_ref()
                .parse::<TodoSelector>()
                .map_err(crate::error::OceanError::Api)
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
