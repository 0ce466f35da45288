//! Logistics reference records: supplies, vehicles, fuel, maintenance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// Stock level classification of a supply item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyStatus {
    Adequate,
    Low,
    Critical,
}

impl SupplyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SupplyStatus::Adequate => "충분",
            SupplyStatus::Low => "부족",
            SupplyStatus::Critical => "위험",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub status: SupplyStatus,
    pub location: String,
}

/// Readiness of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Operational,
    Maintenance,
    Deadlined,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Operational => "가동",
            VehicleStatus::Maintenance => "정비중",
            VehicleStatus::Deadlined => "고장",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub call_sign: String,
    pub status: VehicleStatus,
    /// Tank level; deserialization rejects values above 100.
    pub fuel_level: Percentage,
    pub location: String,
}

/// Fuel classes tracked by the supply point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Gasoline,
    Jp8,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "경유",
            FuelType::Gasoline => "휘발유",
            FuelType::Jp8 => "JP-8",
        }
    }
}

/// Current stock against storage capacity, in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelLevel {
    pub current: u32,
    pub capacity: u32,
}

impl FuelLevel {
    pub fn fill(&self) -> Percentage {
        Percentage::of(u64::from(self.current), u64::from(self.capacity))
    }

    fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if self.current > self.capacity {
            return Err(ValidationError::out_of_range(
                format!("fuel_status.{field}.current"),
                0,
                i64::from(self.capacity),
                i64::from(self.current),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelStatus {
    pub diesel: FuelLevel,
    pub gasoline: FuelLevel,
    pub jp8: FuelLevel,
}

impl FuelStatus {
    pub fn level(&self, fuel: FuelType) -> &FuelLevel {
        match fuel {
            FuelType::Diesel => &self.diesel,
            FuelType::Gasoline => &self.gasoline,
            FuelType::Jp8 => &self.jp8,
        }
    }
}

/// Urgency of a scheduled maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Routine,
    Urgent,
    Critical,
}

impl MaintenancePriority {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenancePriority::Routine => "일반",
            MaintenancePriority::Urgent => "우선",
            MaintenancePriority::Critical => "긴급",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub id: String,
    /// Call sign of the vehicle the job belongs to.
    pub vehicle: String,
    #[serde(rename = "type")]
    pub maintenance_type: String,
    pub due_date: NaiveDate,
    pub priority: MaintenancePriority,
}

/// Logistics snapshot as maintained by the S4 section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsData {
    pub supplies: Vec<SupplyItem>,
    pub vehicles: Vec<Vehicle>,
    pub fuel_status: FuelStatus,
    pub maintenance_schedule: Vec<MaintenanceItem>,
}

impl LogisticsData {
    pub fn supplies_with_status(&self, status: SupplyStatus) -> impl Iterator<Item = &SupplyItem> {
        self.supplies.iter().filter(move |item| item.status == status)
    }

    pub fn operational_vehicle_count(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Operational)
            .count()
    }

    pub fn maintenance_count(&self, priority: MaintenancePriority) -> usize {
        self.maintenance_schedule
            .iter()
            .filter(|item| item.priority == priority)
            .count()
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        self.fuel_status.diesel.validate("diesel")?;
        self.fuel_status.gasoline.validate("gasoline")?;
        self.fuel_status.jp8.validate("jp8")?;

        for vehicle in &self.vehicles {
            if vehicle.call_sign.trim().is_empty() {
                return Err(ValidationError::empty_field("vehicles.call_sign"));
            }
        }
        for item in &self.maintenance_schedule {
            if !self.vehicles.iter().any(|v| v.call_sign == item.vehicle) {
                return Err(ValidationError::invalid_format(
                    "maintenance_schedule.vehicle",
                    format!("no vehicle with call sign '{}'", item.vehicle),
                ));
            }
        }
        Ok(())
    }
}
