/// Session control commands
use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::session::EditorSession;

/// End the input loop and go to the save step
#[derive(Clone)]
pub struct Exit;

impl Command for Exit {
    fn execute(&self, _session: &mut EditorSession) -> DispatchResult {
        DispatchResult::Exit
    }
}
