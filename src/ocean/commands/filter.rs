use crate::commands::{CmdMessage, CmdResult};
use crate::model::Filter;
use crate::state::TodoState;

/// Replaces the active filter.
pub fn run(state: &mut TodoState, filter: Filter) -> CmdResult {
    state.filter = filter;
    let mut result = CmdResult::default().with_filter(filter);
    result.add_message(CmdMessage::success(format!("Showing {} todos", filter)));
    result
}
