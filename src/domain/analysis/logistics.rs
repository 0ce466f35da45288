//! Logistics (S4) assessment, computed from the logistics snapshot.
//!
//! None of the assessment depends on the operator's wording; the request
//! only routes here.

use super::payload::{
    owned, FuelReading, LogisticsAnalysis, LogisticsAssessment, MaintenanceBacklog,
    TransportCapacity,
};
use crate::domain::reference::{FuelType, LogisticsData, MaintenancePriority, SupplyStatus};

pub const DOCTRINE_REF: &str = "야전교범 4-0 군수지원";

pub const RECOMMENDATIONS: &[&str] = &[
    "급수 즉시 보급 필요",
    "의료용품 긴급 배송",
    "전사-3 긴급정비 완료",
    "48시간 내 연료 보급 계획",
];

pub const ALL_SUPPLIES_ADEQUATE: &str = "전 품목 충분";

/// Fuel class reported in the headline reading.
const PRIMARY_FUEL: FuelType = FuelType::Diesel;

/// Critical shortages first, then low stock, in snapshot order.
fn supply_status(data: &LogisticsData) -> String {
    let flagged: Vec<String> = [SupplyStatus::Critical, SupplyStatus::Low]
        .into_iter()
        .flat_map(|status| {
            data.supplies_with_status(status)
                .map(move |item| format!("{} {}", item.name, status.label()))
        })
        .collect();

    if flagged.is_empty() {
        ALL_SUPPLIES_ADEQUATE.to_string()
    } else {
        flagged.join(", ")
    }
}

pub(super) fn analyze(data: &LogisticsData) -> LogisticsAnalysis {
    LogisticsAnalysis {
        assessment: LogisticsAssessment {
            supply_status: supply_status(data),
            transport_capacity: TransportCapacity {
                operational: data.operational_vehicle_count(),
                total: data.vehicles.len(),
            },
            fuel_status: FuelReading {
                fuel: PRIMARY_FUEL,
                fill: data.fuel_status.level(PRIMARY_FUEL).fill(),
            },
            maintenance_priority: MaintenanceBacklog {
                critical: data.maintenance_count(MaintenancePriority::Critical),
                urgent: data.maintenance_count(MaintenancePriority::Urgent),
            },
        },
        recommendations: owned(RECOMMENDATIONS),
        doctrine_ref: DOCTRINE_REF.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::{ReferenceData, VehicleStatus};

    #[test]
    fn sample_snapshot_assessment() {
        let analysis = analyze(&ReferenceData::sample().logistics);
        let assessment = &analysis.assessment;

        assert_eq!(assessment.supply_status, "급수 위험, 의료용품 부족");
        assert_eq!(assessment.transport_capacity.to_string(), "4대 중 3대 가동");
        assert_eq!(assessment.fuel_status.to_string(), "경유 71% 보유");
        assert_eq!(assessment.maintenance_priority.to_string(), "긴급정비 1건, 우선정비 1건");
    }

    #[test]
    fn capacity_tracks_vehicle_status() {
        let mut data = ReferenceData::sample().logistics;
        for vehicle in &mut data.vehicles {
            vehicle.status = VehicleStatus::Deadlined;
        }
        data.vehicles[0].status = VehicleStatus::Operational;

        let capacity = analyze(&data).assessment.transport_capacity;
        assert_eq!(capacity, TransportCapacity { operational: 1, total: 4 });
    }

    #[test]
    fn all_adequate_supplies_are_reported_as_such() {
        let mut data = ReferenceData::sample().logistics;
        for item in &mut data.supplies {
            item.status = SupplyStatus::Adequate;
        }
        assert_eq!(analyze(&data).assessment.supply_status, ALL_SUPPLIES_ADEQUATE);
    }

    #[test]
    fn empty_fleet_reports_zero_of_zero() {
        let mut data = ReferenceData::sample().logistics;
        data.vehicles.clear();
        data.maintenance_schedule.clear();

        let assessment = analyze(&data).assessment;
        assert_eq!(assessment.transport_capacity.to_string(), "0대 중 0대 가동");
        assert_eq!(assessment.maintenance_priority, MaintenanceBacklog { critical: 0, urgent: 0 });
    }

    #[test]
    fn recommendations_are_canonical() {
        let analysis = analyze(&ReferenceData::sample().logistics);
        assert_eq!(analysis.recommendations, owned(RECOMMENDATIONS));
        assert_eq!(analysis.doctrine_ref, DOCTRINE_REF);
    }
}
