use crate::error::{OceanError, Result};
use crate::index::{DisplayTodo, TodoSelector};
use crate::model::Todo;
use crate::state::TodoState;

/// Resolves selectors against a listed view to todo ids.
///
/// Indexes must exist in `view`. Raw ids pass through untouched so the
/// command layer can treat unknown ones as no-ops.
pub fn resolve_selectors(
    view: &[DisplayTodo],
    selectors: &[TodoSelector],
) -> Result<Vec<(TodoSelector, String)>> {
    selectors
        .iter()
        .map(|selector| match selector {
            TodoSelector::Index(n) => view
                .iter()
                .find(|dt| dt.index == *n)
                .map(|dt| (selector.clone(), dt.todo.id.clone()))
                .ok_or_else(|| OceanError::Api(format!("Index {} not found in current view", n))),
            TodoSelector::Id(id) => Ok((selector.clone(), id.clone())),
        })
        .collect()
}

/// Fetch a mutable record by id.
pub fn find_mut<'a>(state: &'a mut TodoState, id: &str) -> Option<&'a mut Todo> {
    state.todos.iter_mut().find(|t| t.id == id)
}
