//! Remote backend contract.
//!
//! Describes the operations a future server integration must offer. Nothing
//! calls a network yet: [`NoopRemote`] answers every call immediately with a
//! placeholder, and [`crate::api::TodoApi`] does not use a remote at all.
//! Keep these signatures stable when a real client lands.

use crate::error::Result;
use crate::model::{Todo, TodoUpdate};

/// Acknowledgement returned by mutating remote calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAck {
    pub id: String,
    pub updates: Option<TodoUpdate>,
}

pub trait RemoteApi {
    fn list_todos(&self) -> Result<Vec<Todo>>;

    fn create_todo(&self, todo: &Todo) -> Result<Todo>;

    fn update_todo(&self, id: &str, updates: &TodoUpdate) -> Result<RemoteAck>;

    fn delete_todo(&self, id: &str) -> Result<RemoteAck>;

    /// Returns the completion state that was applied.
    fn toggle_all(&self, completed: bool) -> Result<bool>;

    fn clear_completed(&self) -> Result<bool>;
}

/// Placeholder remote that performs no I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRemote;

impl RemoteApi for NoopRemote {
    fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(Vec::new())
    }

    fn create_todo(&self, todo: &Todo) -> Result<Todo> {
        Ok(todo.clone())
    }

    fn update_todo(&self, id: &str, updates: &TodoUpdate) -> Result<RemoteAck> {
        Ok(RemoteAck {
            id: id.to_string(),
            updates: Some(updates.clone()),
        })
    }

    fn delete_todo(&self, id: &str) -> Result<RemoteAck> {
        Ok(RemoteAck {
            id: id.to_string(),
            updates: None,
        })
    }

    fn toggle_all(&self, completed: bool) -> Result<bool> {
        Ok(completed)
    }

    fn clear_completed(&self) -> Result<bool> {
        Ok(true)
    }
}
