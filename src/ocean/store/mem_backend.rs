use super::backend::KeyValueBackend;
use crate::error::{OceanError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory slot storage for testing.
///
/// Uses `RefCell` for interior mutability since ocean is single-threaded.
/// This keeps the `KeyValueBackend` trait on `&self` without a lock.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot directly, bypassing write error simulation.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation (quota exceeded, storage disabled).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(OceanError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Priority, Todo};
    use crate::store::TODOS_KEY;

    /// Builds a backend whose todo slot already holds a collection.
    pub struct BackendFixture {
        todos: Vec<Todo>,
    }

    impl Default for BackendFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self { todos: Vec::new() }
        }

        /// Appends `count` open todos titled "Todo 1".."Todo N" (display order).
        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Todo {}", i + 1);
                self.todos.push(Todo::new(&title, Priority::Medium, None));
            }
            self
        }

        pub fn with_active(mut self, title: &str) -> Self {
            self.todos.push(Todo::new(title, Priority::Medium, None));
            self
        }

        pub fn with_completed(mut self, title: &str) -> Self {
            let mut todo = Todo::new(title, Priority::Medium, None);
            todo.completed = true;
            self.todos.push(todo);
            self
        }

        pub fn todos(&self) -> &[Todo] {
            &self.todos
        }

        pub fn build(self) -> MemBackend {
            let raw = serde_json::to_string(&self.todos).unwrap();
            MemBackend::new().with_slot(TODOS_KEY, &raw)
        }
    }
}
