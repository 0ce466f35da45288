//! Conversation session aggregate.
//!
//! Owns the append-only message log, the current staff-function selection
//! and the single-flight request state. The message log is the full audit
//! trail for the process lifetime; nothing is ever removed or reordered.

use serde::{Deserialize, Serialize};

use super::{Message, MessageId, SessionError, SessionEvent, SessionState};
use crate::domain::analysis::Analysis;
use crate::domain::foundation::{SessionId, StateMachine, Timestamp};
use crate::domain::staff::StaffFunction;

/// Greeting seeded as the first assistant message.
pub const GREETING: &str = "안녕하세요. 저는 종합 군사 참모 보조 AI입니다. \
작전과, 군수과, 인사과, 행정과, 정보과 업무를 지원할 수 있습니다. \
참모 기능을 선택하시고 어떤 도움이 필요한지 말씀해 주세요.";

/// Reply text shown when the engine could not produce an analysis.
pub const ANALYSIS_FAILED: &str = "요청을 분석하지 못했습니다. 다시 시도해 주세요.";

/// Text of the assistant reply that carries an analysis.
pub fn reply_text(function: StaffFunction) -> String {
    format!("{} 요청을 분석했습니다. 다음은 제 평가입니다:", function.display_name())
}

/// A submission accepted by the session, awaiting analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message_id: MessageId,
    pub text: String,
    pub staff_function: StaffFunction,
}

/// Read-only copy of session state for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub messages: Vec<Message>,
    pub current_function: StaffFunction,
    pub awaiting: bool,
}

/// Conversation session aggregate.
///
/// # Invariants
///
/// - `messages` is append-only and starts with the greeting
/// - `pending` is `Some` exactly when `state` is `Awaiting`
/// - every assistant message with an analysis is tagged with the
///   analysis' staff function
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: SessionId,
    messages: Vec<Message>,
    current_function: StaffFunction,
    state: SessionState,
    pending: Option<StaffFunction>,
    created_at: Timestamp,
    domain_events: Vec<SessionEvent>,
}

impl ConversationSession {
    /// Starts a session with the seeded greeting.
    ///
    /// # Errors
    ///
    /// Only if the greeting itself fails message validation.
    pub fn new(initial_function: StaffFunction) -> Result<Self, SessionError> {
        let greeting = Message::assistant(GREETING, initial_function, None)?;
        Ok(Self {
            id: SessionId::new(),
            messages: vec![greeting],
            current_function: initial_function,
            state: SessionState::Idle,
            pending: None,
            created_at: Timestamp::now(),
            domain_events: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn current_function(&self) -> StaffFunction {
        self.current_function
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state.is_awaiting()
    }

    /// Staff function of the request in flight, if any.
    pub fn pending_function(&self) -> Option<StaffFunction> {
        self.pending
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            messages: self.messages.clone(),
            current_function: self.current_function,
            awaiting: self.is_awaiting(),
        }
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an operator submission and starts waiting for its analysis.
    ///
    /// Whitespace-only text is a no-op and returns `Ok(None)` in any state.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` if an analysis is already outstanding
    pub fn submit(
        &mut self,
        text: &str,
        function: StaffFunction,
    ) -> Result<Option<Submission>, SessionError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let next = self
            .state
            .transition_to(SessionState::Awaiting)
            .map_err(|_| SessionError::invalid_state("submit", self.state))?;

        let message = Message::user(text, function)?;
        let submission = Submission {
            message_id: *message.id(),
            text: text.to_string(),
            staff_function: function,
        };

        self.append(message);
        self.set_function(function);
        self.state = next;
        self.pending = Some(function);
        self.record(SessionEvent::AwaitingChanged {
            session_id: self.id,
            awaiting: true,
        });

        Ok(Some(submission))
    }

    /// Appends the assistant reply carrying `analysis` and returns to idle.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` if no analysis is outstanding
    /// - `AnalysisMismatch` if `analysis` is for another staff function
    pub fn complete(&mut self, analysis: Analysis) -> Result<MessageId, SessionError> {
        let expected = self.pending_or_reject()?;
        let actual = analysis.staff_function();
        if actual != expected {
            return Err(SessionError::AnalysisMismatch { expected, actual });
        }
        self.finish(Message::assistant(reply_text(expected), expected, Some(analysis))?)
    }

    /// Closes the outstanding request with a notice instead of an analysis.
    ///
    /// Used when the engine fails, so a pending request still ends in
    /// exactly one assistant reply.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` if no analysis is outstanding
    pub fn complete_without_analysis(&mut self, notice: &str) -> Result<MessageId, SessionError> {
        let expected = self.pending_or_reject()?;
        self.finish(Message::assistant(notice, expected, None)?)
    }

    /// Changes the current staff function.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` while an analysis is outstanding
    pub fn select_staff_function(&mut self, function: StaffFunction) -> Result<(), SessionError> {
        if !self.state.accepts_submission() {
            return Err(SessionError::invalid_state("select a staff function", self.state));
        }
        self.set_function(function);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn pending_or_reject(&self) -> Result<StaffFunction, SessionError> {
        match (self.state, self.pending) {
            (SessionState::Awaiting, Some(function)) => Ok(function),
            _ => Err(SessionError::invalid_state("complete", self.state)),
        }
    }

    fn finish(&mut self, reply: Message) -> Result<MessageId, SessionError> {
        let next = self
            .state
            .transition_to(SessionState::Idle)
            .map_err(|_| SessionError::invalid_state("complete", self.state))?;

        let id = *reply.id();
        self.append(reply);
        self.state = next;
        self.pending = None;
        self.record(SessionEvent::AwaitingChanged {
            session_id: self.id,
            awaiting: false,
        });
        Ok(id)
    }

    fn append(&mut self, message: Message) {
        self.messages.push(message.clone());
        self.record(SessionEvent::MessageAppended {
            session_id: self.id,
            message,
        });
    }

    fn set_function(&mut self, function: StaffFunction) {
        if self.current_function != function {
            self.current_function = function;
            self.record(SessionEvent::StaffFunctionSelected {
                session_id: self.id,
                staff_function: function,
            });
        }
    }

    fn record(&mut self, event: SessionEvent) {
        self.domain_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::StaffAnalyzer;
    use crate::domain::conversation::Author;
    use crate::domain::reference::ReferenceData;

    fn session() -> ConversationSession {
        ConversationSession::new(StaffFunction::Operations).unwrap()
    }

    fn analysis_for(function: StaffFunction, text: &str) -> Analysis {
        StaffAnalyzer::analyze(text, function, &ReferenceData::sample())
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_idle_with_greeting() {
            let s = session();
            assert_eq!(s.state(), SessionState::Idle);
            assert_eq!(s.message_count(), 1);

            let greeting = s.last_message().unwrap();
            assert_eq!(greeting.author(), Author::Assistant);
            assert_eq!(greeting.text(), GREETING);
            assert!(greeting.analysis().is_none());
            assert_eq!(greeting.staff_function(), StaffFunction::Operations);
        }

        #[test]
        fn greeting_uses_initial_function() {
            let s = ConversationSession::new(StaffFunction::Intelligence).unwrap();
            assert_eq!(s.current_function(), StaffFunction::Intelligence);
            assert_eq!(s.messages()[0].staff_function(), StaffFunction::Intelligence);
        }

        #[test]
        fn no_events_before_first_transition() {
            let mut s = session();
            assert!(s.take_events().is_empty());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn empty_and_blank_text_are_no_ops() {
            let mut s = session();
            for text in ["", "   ", "\t\n"] {
                assert_eq!(s.submit(text, StaffFunction::Logistics).unwrap(), None);
            }
            assert_eq!(s.message_count(), 1);
            assert_eq!(s.state(), SessionState::Idle);
            assert_eq!(s.current_function(), StaffFunction::Operations);
            assert!(s.take_events().is_empty());
        }

        #[test]
        fn appends_user_message_and_awaits() {
            let mut s = session();
            let submission = s.submit("차량 현황", StaffFunction::Logistics).unwrap().unwrap();

            assert_eq!(s.state(), SessionState::Awaiting);
            assert_eq!(s.pending_function(), Some(StaffFunction::Logistics));
            assert_eq!(s.current_function(), StaffFunction::Logistics);

            let last = s.last_message().unwrap();
            assert!(last.is_user());
            assert_eq!(last.id(), &submission.message_id);
            assert_eq!(last.text(), "차량 현황");
            assert_eq!(last.staff_function(), StaffFunction::Logistics);
        }

        #[test]
        fn second_submit_while_awaiting_is_rejected() {
            let mut s = session();
            s.submit("첫 요청", StaffFunction::Operations).unwrap();

            let err = s.submit("둘째 요청", StaffFunction::Operations).unwrap_err();
            assert!(matches!(
                err,
                SessionError::InvalidSessionState { operation: "submit", state: SessionState::Awaiting }
            ));
            assert_eq!(s.message_count(), 2);
            assert_eq!(s.pending_function(), Some(StaffFunction::Operations));
        }

        #[test]
        fn blank_submit_while_awaiting_is_still_a_no_op() {
            let mut s = session();
            s.submit("요청", StaffFunction::Operations).unwrap();
            assert_eq!(s.submit(" ", StaffFunction::Admin).unwrap(), None);
            assert_eq!(s.message_count(), 2);
        }

        #[test]
        fn records_events_in_transition_order() {
            let mut s = session();
            s.submit("인원 현황", StaffFunction::Personnel).unwrap();

            let events = s.take_events();
            assert_eq!(events.len(), 3);
            assert!(matches!(events[0], SessionEvent::MessageAppended { .. }));
            assert!(matches!(
                events[1],
                SessionEvent::StaffFunctionSelected { staff_function: StaffFunction::Personnel, .. }
            ));
            assert!(matches!(events[2], SessionEvent::AwaitingChanged { awaiting: true, .. }));
        }

        #[test]
        fn same_function_does_not_emit_selection_event() {
            let mut s = session();
            s.submit("정찰", StaffFunction::Operations).unwrap();
            let events = s.take_events();
            assert_eq!(events.len(), 2);
        }
    }

    mod complete {
        use super::*;

        #[test]
        fn while_idle_is_invalid_state() {
            let mut s = session();
            let err = s.complete(analysis_for(StaffFunction::Operations, "")).unwrap_err();
            assert!(matches!(
                err,
                SessionError::InvalidSessionState { operation: "complete", state: SessionState::Idle }
            ));
            assert_eq!(s.message_count(), 1);
        }

        #[test]
        fn appends_reply_after_user_message() {
            let mut s = session();
            s.submit("0600시 정찰 실시", StaffFunction::Operations).unwrap();
            let analysis = analysis_for(StaffFunction::Operations, "0600시 정찰 실시");
            let reply_id = s.complete(analysis.clone()).unwrap();

            let messages = s.messages();
            let (user, reply) = (&messages[messages.len() - 2], &messages[messages.len() - 1]);
            assert!(user.is_user());
            assert_eq!(user.text(), "0600시 정찰 실시");
            assert!(reply.is_assistant());
            assert_eq!(reply.id(), &reply_id);
            assert_eq!(reply.text(), reply_text(StaffFunction::Operations));
            assert_eq!(reply.analysis(), Some(&analysis));
            assert_eq!(s.state(), SessionState::Idle);
            assert_eq!(s.pending_function(), None);
        }

        #[test]
        fn mismatched_analysis_leaves_request_pending() {
            let mut s = session();
            s.submit("보급", StaffFunction::Logistics).unwrap();

            let err = s.complete(analysis_for(StaffFunction::Personnel, "")).unwrap_err();
            assert!(matches!(
                err,
                SessionError::AnalysisMismatch {
                    expected: StaffFunction::Logistics,
                    actual: StaffFunction::Personnel
                }
            ));
            assert!(s.is_awaiting());
            assert_eq!(s.message_count(), 2);
        }

        #[test]
        fn completes_exactly_once() {
            let mut s = session();
            s.submit("보급", StaffFunction::Logistics).unwrap();
            s.complete(analysis_for(StaffFunction::Logistics, "")).unwrap();
            assert!(s.complete(analysis_for(StaffFunction::Logistics, "")).is_err());
            assert_eq!(s.message_count(), 3);
        }

        #[test]
        fn without_analysis_still_closes_request() {
            let mut s = session();
            s.submit("보급", StaffFunction::Logistics).unwrap();
            s.complete_without_analysis(ANALYSIS_FAILED).unwrap();

            let reply = s.last_message().unwrap();
            assert!(reply.is_assistant());
            assert!(reply.analysis().is_none());
            assert_eq!(reply.staff_function(), StaffFunction::Logistics);
            assert!(!s.is_awaiting());
        }

        #[test]
        fn reply_text_names_section() {
            assert_eq!(
                reply_text(StaffFunction::Logistics),
                "군수과 요청을 분석했습니다. 다음은 제 평가입니다:"
            );
        }
    }

    mod select {
        use super::*;

        #[test]
        fn while_idle_updates_selection_only() {
            let mut s = session();
            s.select_staff_function(StaffFunction::Admin).unwrap();
            assert_eq!(s.current_function(), StaffFunction::Admin);
            assert_eq!(s.message_count(), 1);
            assert_eq!(s.take_events().len(), 1);
        }

        #[test]
        fn reselecting_current_function_is_silent() {
            let mut s = session();
            s.select_staff_function(StaffFunction::Operations).unwrap();
            assert!(s.take_events().is_empty());
        }

        #[test]
        fn while_awaiting_is_rejected() {
            let mut s = session();
            s.submit("정찰", StaffFunction::Operations).unwrap();
            let err = s.select_staff_function(StaffFunction::Admin).unwrap_err();
            assert!(matches!(err, SessionError::InvalidSessionState { .. }));
            assert_eq!(s.current_function(), StaffFunction::Operations);
        }
    }

    #[test]
    fn assistant_analyses_always_match_message_function() {
        let mut s = session();
        for function in StaffFunction::ALL {
            s.submit("현황", function).unwrap();
            s.complete(analysis_for(function, "현황")).unwrap();
        }
        for message in s.messages() {
            if let Some(analysis) = message.analysis() {
                assert_eq!(analysis.staff_function(), message.staff_function());
            }
        }
        assert_eq!(s.message_count(), 1 + 2 * StaffFunction::ALL.len());
    }
}
