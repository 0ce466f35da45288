//! Session domain events, delivered to subscribed listeners.

use serde::{Deserialize, Serialize};

use super::Message;
use crate::domain::foundation::SessionId;
use crate::domain::staff::StaffFunction;

/// Observable state transitions of a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the log.
    MessageAppended {
        session_id: SessionId,
        message: Message,
    },

    /// The current staff-function selection changed.
    StaffFunctionSelected {
        session_id: SessionId,
        staff_function: StaffFunction,
    },

    /// The awaiting-analysis flag flipped.
    AwaitingChanged { session_id: SessionId, awaiting: bool },
}

impl SessionEvent {
    /// Dotted event name for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::MessageAppended { .. } => "session.message_appended",
            SessionEvent::StaffFunctionSelected { .. } => "session.staff_function_selected",
            SessionEvent::AwaitingChanged { .. } => "session.awaiting_changed",
        }
    }

    pub fn session_id(&self) -> &SessionId {
        match self {
            SessionEvent::MessageAppended { session_id, .. }
            | SessionEvent::StaffFunctionSelected { session_id, .. }
            | SessionEvent::AwaitingChanged { session_id, .. } => session_id,
        }
    }
}
