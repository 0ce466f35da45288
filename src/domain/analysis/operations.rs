//! Operations (S3) classifier.

use super::payload::{owned, MissionSummary, OperationsAnalysis};
use super::rules::{Cues, KeywordRule};

pub const DOCTRINE_REF: &str = "야전교범 3-0 작전술";

pub const RISKS: &[&str] = &["제한된 시계 조건", "통신두절 지역 가능성", "이동 중 노출 위험"];

pub const SUGGESTIONS: &[&str] = &[
    "감시초소 설치",
    "통신절차 확인",
    "인접부대와 협조",
    "집결지 및 비상계획 수립",
];

pub const OBJECTIVE_DEFAULT: &str = "임무 분석 필요";
pub const UNIT_SIZE_DEFAULT: &str = "부대규모 미지정";
pub const TIMELINE_DEFAULT: &str = "시간계획 명확화 필요";
pub const LOCATION_DEFAULT: &str = "위치좌표 필요";

const OBJECTIVE_RULES: &[KeywordRule] = &[KeywordRule::new(
    &["정찰", "순찰", "reconnaissance", "recon", "patrol"],
    "정찰순찰 실시",
)];

const UNIT_SIZE_RULES: &[KeywordRule] = &[
    KeywordRule::new(&["분대", "squad"], "분대 (9-12명)"),
    KeywordRule::new(&["소대", "platoon"], "소대 (30-40명)"),
];

const IMMEDIATE_KEYWORDS: &[&str] = &["즉시", "immediate"];

const LOCATION_RULES: &[KeywordRule] =
    &[KeywordRule::new(&["좌표", "coordinate", "grid"], "좌표 제공됨")];

/// An explicit clock time outranks "immediately".
fn timeline(cues: &Cues) -> String {
    if let Some(token) = cues.time_token() {
        format!("H시간: {}", token)
    } else if cues.contains_any(IMMEDIATE_KEYWORDS) {
        "즉시 실행".to_string()
    } else {
        TIMELINE_DEFAULT.to_string()
    }
}

pub(super) fn analyze(cues: &Cues) -> OperationsAnalysis {
    OperationsAnalysis {
        summary: MissionSummary {
            objective: cues.classify(OBJECTIVE_RULES, OBJECTIVE_DEFAULT),
            unit_size: cues.classify(UNIT_SIZE_RULES, UNIT_SIZE_DEFAULT),
            timeline: timeline(cues),
            location: cues.classify(LOCATION_RULES, LOCATION_DEFAULT),
        },
        risks: owned(RISKS),
        suggestions: owned(SUGGESTIONS),
        doctrine_ref: DOCTRINE_REF.to_string(),
    }
}
