//! Conversation module - the advisory chat session.
//!
//! A session holds the append-only message log, the current staff-function
//! selection, and a single-flight request state. Every change is recorded
//! as a [`SessionEvent`] for subscribed listeners.

mod errors;
mod events;
mod message;
mod session;
mod state;

pub use errors::SessionError;
pub use events::SessionEvent;
pub use message::{Author, Message, MessageId};
pub use session::{
    reply_text, ConversationSession, SessionSnapshot, Submission, ANALYSIS_FAILED, GREETING,
};
pub use state::SessionState;
