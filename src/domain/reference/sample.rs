//! Built-in reference snapshot used when no data file is configured.

use chrono::NaiveDate;

use super::logistics::{
    FuelLevel, FuelStatus, LogisticsData, MaintenanceItem, MaintenancePriority, SupplyItem,
    SupplyStatus, Vehicle, VehicleStatus,
};
use super::personnel::{
    AwardRecommendation, AwardStatus, CasualtyReport, CasualtyType, PersonnelData,
    TrainingStatus, UnitStrength,
};
use super::ReferenceData;
use crate::domain::foundation::Percentage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal calendar dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn supply(id: &str, name: &str, quantity: u32, unit: &str, status: SupplyStatus, location: &str) -> SupplyItem {
    SupplyItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        status,
        location: location.to_string(),
    }
}

fn vehicle(id: &str, kind: &str, call_sign: &str, status: VehicleStatus, fuel: u8, location: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        vehicle_type: kind.to_string(),
        call_sign: call_sign.to_string(),
        status,
        fuel_level: Percentage::new(fuel),
        location: location.to_string(),
    }
}

fn maintenance(id: &str, vehicle: &str, kind: &str, due: NaiveDate, priority: MaintenancePriority) -> MaintenanceItem {
    MaintenanceItem {
        id: id.to_string(),
        vehicle: vehicle.to_string(),
        maintenance_type: kind.to_string(),
        due_date: due,
        priority,
    }
}

pub(super) fn sample() -> ReferenceData {
    let logistics = LogisticsData {
        supplies: vec![
            supply("1", "전투식량", 450, "식", SupplyStatus::Adequate, "보급소 알파"),
            supply("2", "5.56mm 탄약", 12000, "발", SupplyStatus::Adequate, "탄약고 브라보"),
            supply("3", "의료용품", 85, "세트", SupplyStatus::Low, "의무대"),
            supply("4", "급수", 2400, "리터", SupplyStatus::Critical, "급수소 찰리"),
        ],
        vehicles: vec![
            vehicle("1", "K-131 소형트럭", "강철-1", VehicleStatus::Operational, 85, "차량정비소"),
            vehicle("2", "K2 흑표", "천둥-6", VehicleStatus::Operational, 70, "전차주기장"),
            vehicle("3", "K21 보병전투차", "전사-3", VehicleStatus::Maintenance, 45, "정비창"),
            vehicle("4", "KM250 중형트럭", "화물-2", VehicleStatus::Operational, 90, "보급지역"),
        ],
        fuel_status: FuelStatus {
            diesel: FuelLevel { current: 8500, capacity: 12000 },
            gasoline: FuelLevel { current: 3200, capacity: 5000 },
            jp8: FuelLevel { current: 15000, capacity: 20000 },
        },
        maintenance_schedule: vec![
            maintenance("1", "천둥-6", "예방정비", date(2024, 1, 15), MaintenancePriority::Routine),
            maintenance("2", "전사-3", "엔진수리", date(2024, 1, 12), MaintenancePriority::Critical),
            maintenance("3", "강철-1", "타이어교체", date(2024, 1, 18), MaintenancePriority::Urgent),
        ],
    };

    let personnel = PersonnelData {
        strength: UnitStrength {
            authorized: 120,
            assigned: 115,
            present: 108,
            available: 102,
        },
        casualties: vec![
            CasualtyReport {
                id: "1".to_string(),
                name: "김철수".to_string(),
                rank: "중사".to_string(),
                casualty_type: CasualtyType::Wia,
                date: date(2024, 1, 10),
                status: "안정".to_string(),
            },
            CasualtyReport {
                id: "2".to_string(),
                name: "이영희".to_string(),
                rank: "일병".to_string(),
                casualty_type: CasualtyType::Rtd,
                date: date(2024, 1, 8),
                status: "완전복무".to_string(),
            },
        ],
        training: vec![
            TrainingStatus {
                id: "1".to_string(),
                training: "전투구급법".to_string(),
                completed: 85,
                total: 108,
                due_date: date(2024, 2, 1),
            },
            TrainingStatus {
                id: "2".to_string(),
                training: "사격술 검정".to_string(),
                completed: 102,
                total: 108,
                due_date: date(2024, 1, 30),
            },
            TrainingStatus {
                id: "3".to_string(),
                training: "NBC 훈련".to_string(),
                completed: 45,
                total: 108,
                due_date: date(2024, 3, 15),
            },
        ],
        awards: vec![
            AwardRecommendation {
                id: "1".to_string(),
                name: "박민수".to_string(),
                rank: "상사".to_string(),
                award: "육군포장".to_string(),
                status: AwardStatus::Pending,
            },
            AwardRecommendation {
                id: "2".to_string(),
                name: "정수진".to_string(),
                rank: "병장".to_string(),
                award: "육군표창".to_string(),
                status: AwardStatus::Approved,
            },
        ],
    };

    ReferenceData { logistics, personnel }
}
