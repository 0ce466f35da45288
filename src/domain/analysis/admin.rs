//! Administration classifier. Every field is a standing task.

use super::payload::{owned, AdminAnalysis, AdminTasks};

pub const DOCTRINE_REF: &str = "육군규정 25-50 공문서 작성";

pub const PRIORITIES: &[&str] = &[
    "일일 병력현황 보고서 제출",
    "안전교육 문서 작성 완료",
    "휴가신청서 처리 (5건 대기)",
    "부대명부 및 연락처 갱신",
];

pub const REPORTS: &str = "일일 병력현황 보고 0800시 마감";
pub const CORRESPONDENCE: &str = "3건 행정업무 대기";
pub const RECORDS: &str = "인사기록 갱신 필요";
pub const COMPLIANCE: &str = "이번 주 안전교육 실시";

pub(super) fn analyze() -> AdminAnalysis {
    AdminAnalysis {
        tasks: AdminTasks {
            reports: REPORTS.to_string(),
            correspondence: CORRESPONDENCE.to_string(),
            records: RECORDS.to_string(),
            compliance: COMPLIANCE.to_string(),
        },
        priorities: owned(PRIORITIES),
        doctrine_ref: DOCTRINE_REF.to_string(),
    }
}
