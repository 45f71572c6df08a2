use crate::commands::{CmdMessage, CmdResult};
use crate::state::TodoState;

use super::helpers::find_mut;

/// Flips `completed` on the matching todo.
pub fn run(state: &mut TodoState, id: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(todo) = find_mut(state, id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };

    todo.completed = !todo.completed;
    let verb = if todo.completed { "completed" } else { "reopened" };
    result.add_message(CmdMessage::success(format!("Todo {}: {}", verb, todo.title)));
    result.affected_todos.push(todo.clone());
    result
}
