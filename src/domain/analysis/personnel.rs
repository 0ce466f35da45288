//! Personnel (S1) assessment, computed from the personnel snapshot.

use super::payload::{owned, PersonnelAnalysis, PersonnelStrength, StrengthReading};
use crate::domain::reference::{CasualtyType, PersonnelData};

pub const DOCTRINE_REF: &str = "육군규정 600-8-1 손실작전";

pub const ACTIONS: &[&str] = &[
    "8명 보충 요청 처리",
    "2월 1일까지 전투구급법 완료",
    "2명 포상 추천서 제출",
    "손실현황 보고서 갱신",
];

pub const NO_CASUALTIES: &str = "손실 없음";
pub const NO_TRAINING: &str = "훈련 현황 없음";

/// Groups reports by type and condition, keeping first-seen order:
/// "부상 1명 안정, 복귀 1명 완전복무".
fn casualty_summary(data: &PersonnelData) -> String {
    let mut groups: Vec<(CasualtyType, &str, usize)> = Vec::new();
    for report in &data.casualties {
        match groups
            .iter_mut()
            .find(|(kind, status, _)| *kind == report.casualty_type && *status == report.status)
        {
            Some((_, _, count)) => *count += 1,
            None => groups.push((report.casualty_type, report.status.as_str(), 1)),
        }
    }

    if groups.is_empty() {
        return NO_CASUALTIES.to_string();
    }
    groups
        .iter()
        .map(|(kind, status, count)| format!("{} {}명 {}", kind.label(), count, status))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The first listed course is the one the unit tracks as its priority.
fn training_summary(data: &PersonnelData) -> String {
    data.training.first().map_or_else(
        || NO_TRAINING.to_string(),
        |record| format!("{} {} 완료", record.training, record.completion()),
    )
}

pub(super) fn analyze(data: &PersonnelData) -> PersonnelAnalysis {
    PersonnelAnalysis {
        strength: PersonnelStrength {
            current_strength: StrengthReading {
                authorized: data.strength.authorized,
                available: data.strength.available,
                availability: data.strength.availability(),
            },
            casualties: casualty_summary(data),
            training_status: training_summary(data),
        },
        actions: owned(ACTIONS),
        doctrine_ref: DOCTRINE_REF.to_string(),
    }
}
