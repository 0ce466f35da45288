//! Message entity for conversations.
//!
//! Messages are immutable records of user/assistant exchanges. Each message
//! is tagged with the staff function it was routed to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::analysis::Analysis;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::staff::StaffFunction;

/// Unique identifier for a message within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random MessageId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - `id` is unique (random UUID)
/// - `text` is non-empty after trimming
/// - `analysis`, when present, is tagged with `staff_function`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    author: Author,
    text: String,
    created_at: Timestamp,
    staff_function: StaffFunction,
    analysis: Option<Analysis>,
}

impl Message {
    /// Creates an operator message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty
    pub fn user(text: impl Into<String>, staff_function: StaffFunction) -> Result<Self, DomainError> {
        Self::new(Author::User, text.into(), staff_function, None)
    }

    /// Creates an assistant reply, optionally carrying an analysis.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty
    /// - `AnalysisMismatch` if the analysis belongs to another function
    pub fn assistant(
        text: impl Into<String>,
        staff_function: StaffFunction,
        analysis: Option<Analysis>,
    ) -> Result<Self, DomainError> {
        if let Some(analysis) = &analysis {
            if analysis.staff_function() != staff_function {
                return Err(DomainError::new(
                    ErrorCode::AnalysisMismatch,
                    "Analysis variant does not match message staff function",
                )
                .with_detail("expected", staff_function.tag())
                .with_detail("actual", analysis.staff_function().tag()));
            }
        }
        Self::new(Author::Assistant, text.into(), staff_function, analysis)
    }

    fn new(
        author: Author,
        text: String,
        staff_function: StaffFunction,
        analysis: Option<Analysis>,
    ) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "Message text cannot be empty"));
        }
        Ok(Self {
            id: MessageId::new(),
            author,
            text,
            created_at: Timestamp::now(),
            staff_function,
            analysis,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn staff_function(&self) -> StaffFunction {
        self.staff_function
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn is_assistant(&self) -> bool {
        self.author == Author::Assistant
    }
}
