//! SessionListener port - Observers of conversation session changes.

use crate::domain::conversation::SessionEvent;

/// Receives session events in the order the session produced them.
///
/// Listeners are invoked synchronously while the session is locked, so
/// they should be quick and must not call back into the controller.
pub trait SessionListener: Send + Sync {
    /// Handle one event.
    fn on_event(&self, event: &SessionEvent);

    /// Listener name for logging.
    fn name(&self) -> &'static str;
}
