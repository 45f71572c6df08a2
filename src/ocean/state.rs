use crate::model::{Filter, Todo};

/// The collection and the active filter, owned by the state manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: Filter,
}

/// Totals over the whole collection, independent of the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>, filter: Filter) -> Self {
        Self { todos, filter }
    }

    /// The todos visible under the active filter, in collection order.
    pub fn filtered(&self) -> Vec<&Todo> {
        self.filtered_by(self.filter)
    }

    /// Projection under an arbitrary filter. Never mutates the collection.
    pub fn filtered_by(&self, filter: Filter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn counts(&self) -> Counts {
        let active = self.todos.iter().filter(|t| !t.completed).count();
        Counts {
            total: self.todos.len(),
            active,
            completed: self.todos.len() - active,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }
}
