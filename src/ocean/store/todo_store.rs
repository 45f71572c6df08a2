use super::backend::KeyValueBackend;
use super::{FILTER_KEY, TODOS_KEY};
use crate::model::{normalize_due_date, Filter, Todo};
use serde_json::Value;
use tracing::{debug, warn};

/// Best-effort persistence for the todo collection and the active filter.
///
/// Nothing here returns an error: unreadable data degrades to defaults and
/// failed writes are dropped. The in-memory state owned by the caller stays
/// authoritative for the rest of the session.
pub struct TodoStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> TodoStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the collection. Missing slot, read failure, invalid JSON or a
    /// non-array value all yield an empty collection.
    pub fn load(&self) -> Vec<Todo> {
        let raw = match self.backend.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read todos, starting empty");
                return Vec::new();
            }
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("stored todos are not an array, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "stored todos are not valid JSON, starting empty");
                return Vec::new();
            }
        };

        let total = items.len();
        let todos: Vec<Todo> = items.into_iter().filter_map(decode_todo).collect();
        if todos.len() != total {
            warn!(
                skipped = total - todos.len(),
                "dropped unreadable todo records"
            );
        }
        debug!(count = todos.len(), "loaded todos");
        todos
    }

    /// Write the full collection. Failures are logged and discarded.
    pub fn save(&self, todos: &[Todo]) {
        let raw = match serde_json::to_string(todos) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to encode todos, write skipped");
                return;
            }
        };
        match self.backend.set(TODOS_KEY, &raw) {
            Ok(()) => debug!(count = todos.len(), "saved todos"),
            Err(e) => warn!(error = %e, "failed to save todos, write discarded"),
        }
    }

    /// Load the active filter, defaulting to `all`.
    pub fn load_filter(&self) -> Filter {
        match self.backend.get(FILTER_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "unknown stored filter, using all");
                Filter::All
            }),
            Ok(None) => Filter::All,
            Err(e) => {
                warn!(error = %e, "failed to read filter, using all");
                Filter::All
            }
        }
    }

    /// Write the active filter as a plain string. Failures are logged and discarded.
    pub fn save_filter(&self, filter: Filter) {
        match self.backend.set(FILTER_KEY, filter.as_str()) {
            Ok(()) => debug!(%filter, "saved filter"),
            Err(e) => warn!(error = %e, "failed to save filter, write discarded"),
        }
    }
}

fn decode_todo(value: Value) -> Option<Todo> {
    let mut todo: Todo = match serde_json::from_value(value) {
        Ok(todo) => todo,
        Err(e) => {
            debug!(error = %e, "skipping malformed todo");
            return None;
        }
    };
    if todo.title.trim().is_empty() {
        debug!(id = %todo.id, "skipping todo with blank title");
        return None;
    }
    todo.due_date = normalize_due_date(todo.due_date);
    Some(todo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::mem_backend::fixtures::BackendFixture;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn missing_slot_loads_empty() {
        let store = TodoStore::new(MemBackend::new());
        assert!(store.load().is_empty());
        assert_eq!(store.load_filter(), Filter::All);
    }

    #[test]
    fn corrupted_slot_loads_empty() {
        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, "{not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_array_value_loads_empty() {
        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, r#"{"id":"a"}"#));
        assert!(store.load().is_empty());

        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, "null"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_of_load_is_a_fixed_point() {
        let fixture = BackendFixture::new()
            .with_active("One")
            .with_completed("Two")
            .with_todos(3);
        let expected = fixture.todos().to_vec();
        let store = TodoStore::new(fixture.build());

        let loaded = store.load();
        assert_eq!(loaded, expected);

        store.save(&loaded);
        assert_eq!(store.load(), expected);
    }

    #[test]
    fn empty_collection_round_trips_after_corruption() {
        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, "garbage"));
        let loaded = store.load();
        assert!(loaded.is_empty());

        store.save(&loaded);
        assert_eq!(store.backend().get(TODOS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn skips_unreadable_records_but_keeps_the_rest() {
        let raw = r#"[
            {"id":"a","title":"Keep","completed":false,"priority":"low","createdAt":1},
            {"id":"b","completed":true},
            {"id":"c","title":"   ","completed":false,"priority":"low","createdAt":2},
            42,
            {"id":"d","title":"Also keep","priority":"bogus","dueDate":"","createdAt":3}
        ]"#;
        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, raw));

        let loaded = store.load();
        let ids: Vec<_> = loaded.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(loaded[1].priority, Priority::Medium);
        assert!(!loaded[1].completed);
        assert!(loaded[1].due_date.is_none());
    }

    #[test]
    fn non_string_priorities_are_coerced_and_survive_a_rewrite() {
        let raw = r#"[
            {"id":"a","title":"Null priority","completed":false,"priority":null,"createdAt":1},
            {"id":"b","title":"Numeric priority","completed":true,"priority":3,"createdAt":2}
        ]"#;
        let store = TodoStore::new(MemBackend::new().with_slot(TODOS_KEY, raw));

        let loaded = store.load();
        let ids: Vec<_> = loaded.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(loaded.iter().all(|t| t.priority == Priority::Medium));

        store.save(&loaded);
        let reloaded = store.load();
        assert_eq!(reloaded, loaded);
        assert!(reloaded[1].completed);
    }

    #[test]
    fn filter_round_trips_as_plain_string() {
        let store = TodoStore::new(MemBackend::new());
        store.save_filter(Filter::Completed);

        assert_eq!(
            store.backend().get(FILTER_KEY).unwrap().as_deref(),
            Some("completed")
        );
        assert_eq!(store.load_filter(), Filter::Completed);
    }

    #[test]
    fn unknown_filter_value_falls_back_to_all() {
        let store = TodoStore::new(MemBackend::new().with_slot(FILTER_KEY, "archived"));
        assert_eq!(store.load_filter(), Filter::All);
    }

    #[test]
    fn write_failures_are_swallowed() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let store = TodoStore::new(backend);

        store.save(&[Todo::new("Lost", Priority::High, None)]);
        store.save_filter(Filter::Active);

        assert!(store.load().is_empty());
        assert_eq!(store.load_filter(), Filter::All);
    }
}
