//! Plain-text transcript renderer.
//!
//! Subscribes to session events and writes each appended message, selection
//! change and busy indicator to a line-oriented sink (stdout in the binary,
//! a buffer in tests).

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::domain::analysis::Analysis;
use crate::domain::conversation::{Author, Message, SessionEvent};
use crate::ports::SessionListener;

/// Shown while an analysis is outstanding.
pub const THINKING: &str = "분석 중...";

/// Renders session events as text lines.
pub struct TerminalRenderer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn write_text(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "Failed to write transcript");
        }
    }
}

impl<W: Write + Send> SessionListener for TerminalRenderer<W> {
    fn on_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::MessageAppended { message, .. } => {
                self.write_text(&render_message(message));
            }
            SessionEvent::StaffFunctionSelected { staff_function, .. } => {
                self.write_text(&format!("[{} 선택됨]\n", staff_function.display_name()));
            }
            SessionEvent::AwaitingChanged { awaiting: true, .. } => {
                self.write_text(&format!("{}\n", THINKING));
            }
            SessionEvent::AwaitingChanged { awaiting: false, .. } => {}
        }
    }

    fn name(&self) -> &'static str {
        "TerminalRenderer"
    }
}

/// Formats one message with its analysis, if any.
pub fn render_message(message: &Message) -> String {
    let speaker = match message.author() {
        Author::User => "사용자",
        Author::Assistant => "참모 보조",
    };
    let mut out = format!(
        "[{}] {} ({}): {}\n",
        message.created_at().clock_label(),
        speaker,
        message.staff_function().display_name(),
        message.text()
    );
    if let Some(analysis) = message.analysis() {
        out.push_str(&render_analysis(analysis));
    }
    out
}

/// Formats an analysis as an indented block.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();
    for (label, value) in analysis.summary_fields() {
        out.push_str(&format!("  {}: {}\n", label, value));
    }
    if let Analysis::Operations(ops) = analysis {
        render_list(&mut out, "위험요소", &ops.risks);
    }
    render_list(&mut out, guidance_heading(analysis), analysis.guidance());
    out.push_str(&format!("  근거: {}\n", analysis.doctrine_ref()));
    out
}

fn guidance_heading(analysis: &Analysis) -> &'static str {
    match analysis {
        Analysis::Operations(_) => "제안사항",
        Analysis::Logistics(_) | Analysis::Intelligence(_) => "권고사항",
        Analysis::Personnel(_) => "조치사항",
        Analysis::Admin(_) => "우선순위",
    }
}

fn render_list(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("  {}:\n", heading));
    for item in items {
        out.push_str(&format!("    - {}\n", item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::StaffAnalyzer;
    use crate::domain::foundation::SessionId;
    use crate::domain::reference::ReferenceData;
    use crate::domain::staff::StaffFunction;

    fn rendered(events: &[SessionEvent]) -> String {
        let renderer = TerminalRenderer::new(Vec::new());
        for event in events {
            renderer.on_event(event);
        }
        String::from_utf8(renderer.out.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn user_message_line_names_section() {
        let message = Message::user("보급 현황", StaffFunction::Logistics).unwrap();
        let line = render_message(&message);
        assert!(line.contains("사용자 (군수과): 보급 현황"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn analysis_block_lists_fields_guidance_and_citation() {
        let analysis =
            StaffAnalyzer::analyze("", StaffFunction::Logistics, &ReferenceData::sample());
        let block = render_analysis(&analysis);

        assert!(block.contains("  수송능력: 4대 중 3대 가동\n"));
        assert!(block.contains("  권고사항:\n"));
        assert!(block.contains("  근거: 야전교범 4-0 군수지원\n"));
        assert!(!block.contains("위험요소"));
    }

    #[test]
    fn operations_block_includes_risks() {
        let analysis =
            StaffAnalyzer::analyze("정찰", StaffFunction::Operations, &ReferenceData::sample());
        let block = render_analysis(&analysis);
        assert!(block.contains("  위험요소:\n"));
        assert!(block.contains("  제안사항:\n"));
    }

    #[test]
    fn busy_indicator_only_when_awaiting_starts() {
        let id = SessionId::new();
        let text = rendered(&[
            SessionEvent::AwaitingChanged { session_id: id, awaiting: true },
            SessionEvent::AwaitingChanged { session_id: id, awaiting: false },
        ]);
        assert_eq!(text, format!("{}\n", THINKING));
    }

    #[test]
    fn selection_change_is_announced() {
        let text = rendered(&[SessionEvent::StaffFunctionSelected {
            session_id: SessionId::new(),
            staff_function: StaffFunction::Intelligence,
        }]);
        assert_eq!(text, "[정보과 선택됨]\n");
    }
}
