use crate::commands::{CmdMessage, CmdResult};
use crate::model::{AddOptions, Todo};
use crate::state::TodoState;

/// Prepends a new todo. Blank titles are ignored.
pub fn run(state: &mut TodoState, title: &str, options: AddOptions) -> CmdResult {
    let mut result = CmdResult::default();

    if title.trim().is_empty() {
        result.add_message(CmdMessage::info("Title is empty, nothing added."));
        return result;
    }

    let todo = Todo::new(title, options.priority.unwrap_or_default(), options.due_date);
    state.todos.insert(0, todo.clone());

    result.add_message(CmdMessage::success(format!("Todo added: {}", todo.title)));
    result.with_affected_todos(vec![todo])
}
