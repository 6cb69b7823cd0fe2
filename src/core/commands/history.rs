use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::session::EditorSession;

/// Show the undo and redo logs
#[derive(Clone)]
pub struct ShowHistory;

impl Command for ShowHistory {
    fn execute(&self, session: &mut EditorSession) -> DispatchResult {
        DispatchResult::History(session.history())
    }
}
