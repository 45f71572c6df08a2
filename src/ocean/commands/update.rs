use crate::commands::{CmdMessage, CmdResult};
use crate::model::{normalize_due_date, TodoUpdate};
use crate::state::TodoState;

use super::helpers::find_mut;

/// Shallow-merges the given fields into the matching todo.
///
/// A title that trims to empty is ignored; the rest of the update still applies.
/// The todo only counts as affected when some field ends up different.
pub fn run(state: &mut TodoState, id: &str, update: TodoUpdate) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(todo) = find_mut(state, id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };

    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return result;
    }

    let mut changed = false;
    if let Some(title) = update.title {
        let title = title.trim();
        if title.is_empty() {
            result.add_message(CmdMessage::info("Title is empty, keeping the current one."));
        } else if todo.title != title {
            todo.title = title.to_string();
            changed = true;
        }
    }
    if let Some(priority) = update.priority {
        if todo.priority != priority {
            todo.priority = priority;
            changed = true;
        }
    }
    if let Some(due_date) = update.due_date {
        let due_date = normalize_due_date(due_date);
        if todo.due_date != due_date {
            todo.due_date = due_date;
            changed = true;
        }
    }

    if !changed {
        result.add_message(CmdMessage::info(format!("Todo unchanged: {}", todo.title)));
        return result;
    }

    result.add_message(CmdMessage::success(format!("Todo updated: {}", todo.title)));
    result.affected_todos.push(todo.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{AddOptions, Priority};

    fn seeded() -> (TodoState, String) {
        let mut state = TodoState::default();
        add::run(
            &mut state,
            "Original",
            AddOptions::new().priority(Priority::Low).due_date("2024-01-01"),
        );
        let id = state.todos[0].id.clone();
        (state, id)
    }

    #[test]
    fn merges_only_given_fields() {
        let (mut state, id) = seeded();
        let created_at = state.todos[0].created_at;

        run(&mut state, &id, TodoUpdate::title("Renamed"));

        let todo = &state.todos[0];
        assert_eq!(todo.title, "Renamed");
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.due_date.as_deref(), Some("2024-01-01"));
        assert_eq!(todo.id, id);
        assert_eq!(todo.created_at, created_at);
    }

    #[test]
    fn changes_priority_and_clears_due_date() {
        let (mut state, id) = seeded();

        run(&mut state, &id, TodoUpdate::priority(Priority::Low.cycle()));
        run(&mut state, &id, TodoUpdate::due_date(None));

        assert_eq!(state.todos[0].priority, Priority::Medium);
        assert!(state.todos[0].due_date.is_none());
    }

    #[test]
    fn blank_title_keeps_existing_title() {
        let (mut state, id) = seeded();
        let result = run(&mut state, &id, TodoUpdate::title("   "));

        assert_eq!(state.todos[0].title, "Original");
        assert!(!result.changed());
        assert!(result
            .messages
            .iter()
            .all(|m| !m.content.starts_with("Todo updated")));
    }

    #[test]
    fn blank_title_with_other_fields_still_applies_them() {
        let (mut state, id) = seeded();
        let update = TodoUpdate {
            title: Some(" ".into()),
            priority: Some(Priority::High),
            due_date: None,
        };

        let result = run(&mut state, &id, update);
        assert!(result.changed());
        assert_eq!(state.todos[0].title, "Original");
        assert_eq!(state.todos[0].priority, Priority::High);
    }

    #[test]
    fn same_values_and_empty_updates_are_not_changes() {
        let (mut state, id) = seeded();

        assert!(!run(&mut state, &id, TodoUpdate::priority(Priority::Low)).changed());
        assert!(!run(&mut state, &id, TodoUpdate::title("Original")).changed());
        assert!(!run(&mut state, &id, TodoUpdate::default()).changed());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let (mut state, _) = seeded();
        let before = state.todos.clone();

        let result = run(&mut state, "missing", TodoUpdate::title("X"));
        assert_eq!(state.todos, before);
        assert!(!result.changed());
    }
}
