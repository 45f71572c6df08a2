use crate::commands::{toggle_all, CmdMessage, CmdResult};
use crate::state::TodoState;

/// Removes every completed todo, leaving active ones untouched and in order.
pub fn completed(state: &mut TodoState) -> CmdResult {
    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.todos)
        .into_iter()
        .partition(|t| t.completed);
    state.todos = kept;

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("No completed todos to clear."));
        return result;
    }

    result.add_message(CmdMessage::success(format!(
        "Cleared {} completed todo(s)",
        removed.len()
    )));
    result.with_affected_todos(removed)
}

/// Removes everything: marks all todos completed, then clears completed.
/// Callers must confirm with the user first.
pub fn all(state: &mut TodoState) -> CmdResult {
    if state.todos.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No todos to clear."));
        return result;
    }

    let marked = toggle_all::run(state, true);
    let mut result = completed(state);
    result.messages.clear();
    result.add_message(CmdMessage::success(format!(
        "Cleared all {} todo(s)",
        marked.affected_todos.len()
    )));
    result
}
