use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::session::EditorSession;

/// Undo the last word
#[derive(Clone)]
pub struct Undo;

impl Command for Undo {
    fn execute(&self, session: &mut EditorSession) -> DispatchResult {
        session.undo().into()
    }
}

/// Redo the last undone word
#[derive(Clone)]
pub struct Redo;

impl Command for Redo {
    fn execute(&self, session: &mut EditorSession) -> DispatchResult {
        session.redo().into()
    }
}
