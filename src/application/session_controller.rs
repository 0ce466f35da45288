//! Session controller - the presentation-facing entry point.
//!
//! Forwards operator actions to the conversation session, drives the
//! analysis engine off the caller's task, and publishes every session event
//! to subscribed listeners in the order the session recorded them.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::adapters::events::{ListenerRegistry, Subscription};
use crate::domain::analysis::AnalysisError;
use crate::domain::conversation::{
    ConversationSession, MessageId, SessionError, SessionSnapshot, Submission, ANALYSIS_FAILED,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::staff::StaffFunction;
use crate::ports::{AnalysisEngine, SessionListener};

/// Result of a submit call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,

    /// The message was recorded and an analysis is running.
    Accepted {
        message_id: MessageId,
        pending: PendingAnalysis,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// Waits for the background analysis, if one was started.
    ///
    /// Returns the id of the assistant reply, or `None` for ignored input.
    pub async fn wait(self) -> Result<Option<MessageId>, SessionError> {
        match self {
            SubmitOutcome::Ignored => Ok(None),
            SubmitOutcome::Accepted { pending, .. } => pending.wait().await.map(Some),
        }
    }
}

/// Handle to the background task that completes a submission.
///
/// Dropping the handle does not cancel the analysis; the session still
/// receives exactly one completion.
#[derive(Debug)]
pub struct PendingAnalysis(JoinHandle<Result<MessageId, SessionError>>);

impl PendingAnalysis {
    /// Waits for completion and returns the assistant reply id.
    pub async fn wait(self) -> Result<MessageId, SessionError> {
        self.0.await.map_err(|err| {
            SessionError::Domain(DomainError::new(
                ErrorCode::InternalError,
                format!("Analysis task failed: {}", err),
            ))
        })?
    }
}

/// Owns one conversation session and its listeners.
pub struct SessionController {
    session: Arc<Mutex<ConversationSession>>,
    engine: Arc<dyn AnalysisEngine>,
    listeners: Arc<ListenerRegistry>,
}

impl SessionController {
    pub fn new(session: ConversationSession, engine: Arc<dyn AnalysisEngine>) -> Self {
        tracing::info!(
            session_id = %session.id(),
            staff_function = session.current_function().tag(),
            engine = engine.name(),
            "Session started"
        );
        Self {
            session: Arc::new(Mutex::new(session)),
            engine,
            listeners: Arc::new(ListenerRegistry::new()),
        }
    }

    /// Submits operator text under the current staff function.
    ///
    /// Returns immediately after the user message is recorded; the reply is
    /// appended by a background task once the engine answers.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` if a previous submission is still pending
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let submission = {
            let mut session = self.session.lock().await;
            let function = session.current_function();
            let submitted = session.submit(text, function);
            let submission = match submitted {
                Ok(Some(submission)) => submission,
                Ok(None) => {
                    tracing::debug!("Ignoring blank submission");
                    return Ok(SubmitOutcome::Ignored);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Submission rejected");
                    return Err(err);
                }
            };
            self.listeners.publish_all(&session.take_events());
            submission
        };

        tracing::info!(
            message_id = %submission.message_id,
            staff_function = submission.staff_function.tag(),
            "Submission accepted"
        );

        let message_id = submission.message_id;
        let handle = tokio::spawn(run_analysis(
            Arc::clone(&self.session),
            Arc::clone(&self.engine),
            Arc::clone(&self.listeners),
            submission,
        ));

        Ok(SubmitOutcome::Accepted {
            message_id,
            pending: PendingAnalysis(handle),
        })
    }

    /// Changes the staff function used for the next submission.
    ///
    /// # Errors
    ///
    /// - `InvalidSessionState` while an analysis is pending
    pub async fn select_staff_function(&self, function: StaffFunction) -> Result<(), SessionError> {
        let mut session = self.session.lock().await;
        session.select_staff_function(function)?;
        self.listeners.publish_all(&session.take_events());
        tracing::debug!(staff_function = function.tag(), "Staff function selected");
        Ok(())
    }

    /// Registers a listener for all subsequent session events.
    pub fn subscribe(&self, listener: Arc<dyn SessionListener>) -> Subscription {
        ListenerRegistry::subscribe(&self.listeners, listener)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn is_awaiting(&self) -> bool {
        self.session.lock().await.is_awaiting()
    }

    pub async fn current_function(&self) -> StaffFunction {
        self.session.lock().await.current_function()
    }
}

/// Runs the engine and completes the session exactly once.
async fn run_analysis(
    session: Arc<Mutex<ConversationSession>>,
    engine: Arc<dyn AnalysisEngine>,
    listeners: Arc<ListenerRegistry>,
    submission: Submission,
) -> Result<MessageId, SessionError> {
    // The engine runs in its own task so a panic surfaces as a JoinError
    // and the session still gets its completion.
    let analysis_task = {
        let engine = Arc::clone(&engine);
        let text = submission.text.clone();
        let function = submission.staff_function;
        tokio::spawn(async move { engine.analyze(&text, function).await })
    };
    let result = analysis_task.await.unwrap_or_else(|err| {
        Err(AnalysisError::EngineFailed(format!("engine task aborted: {}", err)))
    });

    let mut session = session.lock().await;
    let completed = match result {
        Ok(analysis) => match session.complete(analysis) {
            Err(SessionError::AnalysisMismatch { expected, actual }) => {
                tracing::error!(
                    engine = engine.name(),
                    expected = expected.tag(),
                    actual = actual.tag(),
                    "Engine returned analysis for wrong staff function"
                );
                session.complete_without_analysis(ANALYSIS_FAILED)
            }
            other => other,
        },
        Err(err) => {
            tracing::error!(
                engine = engine.name(),
                staff_function = submission.staff_function.tag(),
                error = %err,
                "Analysis failed"
            );
            session.complete_without_analysis(ANALYSIS_FAILED)
        }
    };
    listeners.publish_all(&session.take_events());

    if let Ok(reply_id) = &completed {
        tracing::info!(
            message_id = %reply_id,
            staff_function = submission.staff_function.tag(),
            "Analysis completed"
        );
    }
    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::KeywordAnalysisEngine;
    use crate::domain::analysis::{Analysis, StaffAnalyzer};
    use crate::domain::conversation::{reply_text, SessionEvent};
    use crate::domain::reference::ReferenceData;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    fn controller_with(engine: Arc<dyn AnalysisEngine>) -> SessionController {
        let session = ConversationSession::new(StaffFunction::Operations).unwrap();
        SessionController::new(session, engine)
    }

    fn keyword_controller() -> SessionController {
        controller_with(Arc::new(KeywordAnalysisEngine::new(Arc::new(
            ReferenceData::sample(),
        ))))
    }

    #[derive(Default)]
    struct EventLog(StdMutex<Vec<SessionEvent>>);

    impl EventLog {
        fn kinds(&self) -> Vec<&'static str> {
            self.0.lock().unwrap().iter().map(SessionEvent::event_type).collect()
        }
    }

    impl SessionListener for EventLog {
        fn on_event(&self, event: &SessionEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
        fn name(&self) -> &'static str {
            "EventLog"
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl AnalysisEngine for FailingEngine {
        async fn analyze(&self, _: &str, function: StaffFunction) -> Result<Analysis, AnalysisError> {
            Err(AnalysisError::EngineFailed(format!("{} unavailable", function)))
        }
        fn name(&self) -> &'static str {
            "FailingEngine"
        }
    }

    struct PanickingEngine;

    #[async_trait]
    impl AnalysisEngine for PanickingEngine {
        async fn analyze(&self, _: &str, _: StaffFunction) -> Result<Analysis, AnalysisError> {
            panic!("engine crashed")
        }
        fn name(&self) -> &'static str {
            "PanickingEngine"
        }
    }

    struct WrongFunctionEngine;

    #[async_trait]
    impl AnalysisEngine for WrongFunctionEngine {
        async fn analyze(&self, text: &str, _: StaffFunction) -> Result<Analysis, AnalysisError> {
            Ok(StaffAnalyzer::analyze(text, StaffFunction::Intelligence, &ReferenceData::sample()))
        }
        fn name(&self) -> &'static str {
            "WrongFunctionEngine"
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn blank_text_is_ignored() {
            let controller = keyword_controller();
            let log = Arc::new(EventLog::default());
            controller.subscribe(log.clone());

            let outcome = controller.submit("   ").await.unwrap();

            assert!(!outcome.is_accepted());
            assert_eq!(controller.snapshot().await.messages.len(), 1);
            assert!(log.kinds().is_empty());
        }

        #[tokio::test]
        async fn appends_user_message_then_reply() {
            let controller = keyword_controller();
            controller.select_staff_function(StaffFunction::Logistics).await.unwrap();

            let reply_id = controller.submit("차량 현황").await.unwrap().wait().await.unwrap();

            let snapshot = controller.snapshot().await;
            assert_eq!(snapshot.messages.len(), 3);
            assert!(snapshot.messages[1].is_user());
            let reply = &snapshot.messages[2];
            assert_eq!(Some(*reply.id()), reply_id);
            assert_eq!(reply.text(), reply_text(StaffFunction::Logistics));
            assert_eq!(
                reply.analysis().map(Analysis::staff_function),
                Some(StaffFunction::Logistics)
            );
            assert!(!snapshot.awaiting);
        }

        #[tokio::test]
        async fn listeners_see_transitions_in_order() {
            let controller = keyword_controller();
            let log = Arc::new(EventLog::default());
            controller.subscribe(log.clone());

            controller.submit("정찰").await.unwrap().wait().await.unwrap();

            assert_eq!(
                log.kinds(),
                vec![
                    "session.message_appended",
                    "session.awaiting_changed",
                    "session.message_appended",
                    "session.awaiting_changed",
                ]
            );
        }

        #[tokio::test]
        async fn engine_failure_still_completes_once() {
            let controller = controller_with(Arc::new(FailingEngine));

            controller.submit("보고").await.unwrap().wait().await.unwrap();

            let snapshot = controller.snapshot().await;
            let reply = snapshot.messages.last().unwrap();
            assert!(reply.is_assistant());
            assert_eq!(reply.text(), ANALYSIS_FAILED);
            assert!(reply.analysis().is_none());
            assert!(!controller.is_awaiting().await);
        }

        #[tokio::test]
        async fn engine_panic_still_returns_session_to_idle() {
            let controller = controller_with(Arc::new(PanickingEngine));

            let reply_id = controller.submit("정찰").await.unwrap().wait().await.unwrap();

            let snapshot = controller.snapshot().await;
            assert!(!snapshot.awaiting);
            assert_eq!(snapshot.messages.len(), 3);
            let reply = &snapshot.messages[2];
            assert_eq!(Some(*reply.id()), reply_id);
            assert_eq!(reply.text(), ANALYSIS_FAILED);
            assert!(reply.analysis().is_none());

            assert!(controller.submit("재요청").await.unwrap().is_accepted());
        }

        #[tokio::test]
        async fn mismatched_engine_output_is_not_attached() {
            let controller = controller_with(Arc::new(WrongFunctionEngine));

            controller.submit("정찰").await.unwrap().wait().await.unwrap();

            let snapshot = controller.snapshot().await;
            assert_eq!(snapshot.messages.len(), 3);
            assert!(snapshot.messages[2].analysis().is_none());
        }
    }

    mod select {
        use super::*;

        #[tokio::test]
        async fn changes_function_used_for_next_submit() {
            let controller = keyword_controller();
            controller.select_staff_function(StaffFunction::Personnel).await.unwrap();
            assert_eq!(controller.current_function().await, StaffFunction::Personnel);

            controller.submit("인원").await.unwrap().wait().await.unwrap();
            let snapshot = controller.snapshot().await;
            assert_eq!(snapshot.messages[1].staff_function(), StaffFunction::Personnel);
        }

        #[tokio::test]
        async fn reselecting_emits_nothing() {
            let controller = keyword_controller();
            let log = Arc::new(EventLog::default());
            controller.subscribe(log.clone());

            controller.select_staff_function(StaffFunction::Operations).await.unwrap();

            assert!(log.kinds().is_empty());
        }
    }

    #[tokio::test]
    async fn unsubscribed_listener_stops_receiving() {
        let controller = keyword_controller();
        let log = Arc::new(EventLog::default());
        let subscription = controller.subscribe(log.clone());

        controller.select_staff_function(StaffFunction::Admin).await.unwrap();
        subscription.unsubscribe();
        controller.select_staff_function(StaffFunction::Intelligence).await.unwrap();

        assert_eq!(log.kinds(), vec!["session.staff_function_selected"]);
    }

    #[tokio::test]
    async fn snapshot_starts_idle_with_greeting() {
        let controller = keyword_controller();
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.awaiting);
        assert_eq!(snapshot.current_function, StaffFunction::Operations);
    }
}
