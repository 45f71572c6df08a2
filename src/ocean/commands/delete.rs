use crate::commands::{CmdMessage, CmdResult};
use crate::state::TodoState;

/// Removes the matching todo.
pub fn run(state: &mut TodoState, id: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(pos) = state.position(id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };

    let removed = state.todos.remove(pos);
    result.add_message(CmdMessage::success(format!("Todo deleted: {}", removed.title)));
    result.with_affected_todos(vec![removed])
}
