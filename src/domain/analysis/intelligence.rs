//! Intelligence (S2) classifier.

use super::payload::{owned, IntelligenceAnalysis, IntelligenceAssessment};

pub const DOCTRINE_REF: &str = "야전교범 2-0 정보";

pub const RECOMMENDATIONS: &[&str] = &[
    "현재 경계태세 유지",
    "정찰순찰 지속",
    "통신감청 모니터링",
    "위협평가 일일 갱신",
];

pub const THREAT_LEVEL: &str = "보통 - 해당 지역 활동 증가";
pub const WEATHER: &str = "맑음, 가시거리 10km 이상";
pub const TERRAIN: &str = "개활지로 기계화 이동 유리";
pub const ENEMY: &str = "최근 24시간 적 접촉 없음";

pub(super) fn analyze() -> IntelligenceAnalysis {
    IntelligenceAnalysis {
        assessment: IntelligenceAssessment {
            threat_level: THREAT_LEVEL.to_string(),
            weather: WEATHER.to_string(),
            terrain: TERRAIN.to_string(),
            enemy: ENEMY.to_string(),
        },
        recommendations: owned(RECOMMENDATIONS),
        doctrine_ref: DOCTRINE_REF.to_string(),
    }
}
