//! # Command Layer
//!
//! One module per operation. Each command is a pure transition over
//! [`TodoState`](crate::state::TodoState): no storage, no terminal, no clock
//! other than stamping new records. Persistence is the API's job.
//!
//! Commands never fail on bad input. Blank titles, unknown ids and the like
//! become no-ops reported through an info message.

use crate::config::OceanConfig;
use crate::index::DisplayTodo;
use crate::model::{Filter, Todo};
use crate::state::Counts;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod filter;
pub mod helpers;
pub mod list;
pub mod toggle;
pub mod toggle_all;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed, in their post-operation form
    /// (removed records as they were just before removal).
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<DisplayTodo>,
    pub counts: Option<Counts>,
    pub filter: Option<Filter>,
    pub config: Option<OceanConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_counts(mut self, counts: Counts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_config(mut self, config: OceanConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the collection was changed by the command.
    pub fn changed(&self) -> bool {
        !self.affected_todos.is_empty()
    }
}
