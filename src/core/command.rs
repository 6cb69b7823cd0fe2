//! Command Pattern implementation for wedit
//!
//! Every named editor command implements [`Command`]. Commands are stored in
//! a [`CommandRegistry`](crate::core::commands::CommandRegistry) by name and
//! looked up by the [`Dispatcher`](crate::core::dispatcher::Dispatcher) when
//! an input token is bound to them.

use crate::core::dispatcher::DispatchResult;
use crate::core::session::EditorSession;

/// Core command trait implementing the Command Pattern
///
/// # Parameters
/// - `session`: Mutable reference to the editing state
///
/// # Returns
/// `DispatchResult` describing what happened, for the driver to render
pub trait Command: Send + Sync {
    /// Execute the command against the session
    fn execute(&self, session: &mut EditorSession) -> DispatchResult;
}
