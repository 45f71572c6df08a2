use crate::commands::CmdResult;
use crate::index::index_todos;
use crate::model::Filter;
use crate::state::TodoState;

/// Lists the todos visible under `filter` with their display indexes.
pub fn run(state: &TodoState, filter: Filter) -> CmdResult {
    let listed = index_todos(state.filtered_by(filter));
    CmdResult::default()
        .with_listed_todos(listed)
        .with_counts(state.counts())
        .with_filter(filter)
}
