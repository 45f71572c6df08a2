use crate::commands::{CmdMessage, CmdResult};
use crate::state::TodoState;

/// Sets `completed` on every todo. This is an assignment, not a flip.
pub fn run(state: &mut TodoState, completed: bool) -> CmdResult {
    let mut result = CmdResult::default();

    for todo in state.todos.iter_mut() {
        todo.completed = completed;
    }

    if state.todos.is_empty() {
        result.add_message(CmdMessage::info("No todos."));
        return result;
    }

    let verb = if completed { "completed" } else { "active" };
    result.add_message(CmdMessage::success(format!(
        "Marked {} todo(s) as {}",
        state.todos.len(),
        verb
    )));
    result.with_affected_todos(state.todos.clone())
}
