#![deny(clippy::all)]

use std::collections::HashMap;

use napi_derive::napi;
use rota_engine::model as engine;

// ---------------------------------------------------------------------------
// Mirror types: input side
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub day: u32,
    pub hour: u32,
}

impl TryFrom<Slot> for engine::Slot {
    type Error = napi::Error;

    fn try_from(v: Slot) -> Result<Self, Self::Error> {
        let day = u8::try_from(v.day)
            .map_err(|_| napi::Error::from_reason(format!("invalid day of week ({})", v.day)))?;
        let hour = u8::try_from(v.hour)
            .map_err(|_| napi::Error::from_reason(format!("invalid hour ({})", v.hour)))?;
        Ok(engine::Slot::new(day, hour))
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct EmployeeAvailability {
    pub employee_id: String,
    pub display_name: String,
    pub slots: Vec<Slot>,
}

impl TryFrom<EmployeeAvailability> for engine::EmployeeAvailability {
    type Error = napi::Error;

    fn try_from(v: EmployeeAvailability) -> Result<Self, Self::Error> {
        Ok(engine::EmployeeAvailability {
            employee_id: v.employee_id,
            display_name: v.display_name,
            slots: convert_slots(v.slots)?,
        })
    }
}

#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptions {
    pub max_hours_per_barista: Option<f64>,
    pub min_hours_per_barista: Option<f64>,
    pub preferred_balance: Option<f64>,
    pub enforce_max_hours: Option<bool>,
}

impl From<ScheduleOptions> for engine::ScheduleOptions {
    fn from(v: ScheduleOptions) -> Self {
        engine::ScheduleOptions {
            max_hours_per_barista: v.max_hours_per_barista,
            min_hours_per_barista: v.min_hours_per_barista,
            preferred_balance: v.preferred_balance,
            enforce_max_hours: v.enforce_max_hours.unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Mirror types: output side
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct GeneratedShift {
    pub employee_id: String,
    pub display_name: String,
    pub day: u32,
    pub hour: u32,
    pub priority: i32,
}

impl From<engine::GeneratedShift> for GeneratedShift {
    fn from(v: engine::GeneratedShift) -> Self {
        GeneratedShift {
            employee_id: v.employee_id,
            display_name: v.display_name,
            day: u32::from(v.day),
            hour: u32::from(v.hour),
            priority: v.priority,
        }
    }
}

/// Field names stay snake_case on the JS side to match the stored result shape.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    #[napi(js_name = "total_slots")]
    pub total_slots: u32,
    #[napi(js_name = "covered_slots")]
    pub covered_slots: u32,
    #[napi(js_name = "uncovered_slots")]
    pub uncovered_slots: u32,
    #[napi(js_name = "hours_per_barista")]
    pub hours_per_barista: HashMap<String, u32>,
    #[napi(js_name = "min_hours")]
    pub min_hours: u32,
    #[napi(js_name = "max_hours")]
    pub max_hours: u32,
    #[napi(js_name = "avg_hours")]
    pub avg_hours: f64,
}

impl From<engine::ScheduleStats> for ScheduleStats {
    fn from(v: engine::ScheduleStats) -> Self {
        ScheduleStats {
            total_slots: engine::clamp_count(v.total_slots),
            covered_slots: engine::clamp_count(v.covered_slots),
            uncovered_slots: engine::clamp_count(v.uncovered_slots),
            hours_per_barista: v.hours_per_barista.into_iter().collect(),
            min_hours: v.min_hours,
            max_hours: v.max_hours,
            avg_hours: v.avg_hours,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    pub shifts: Vec<GeneratedShift>,
    pub coverage: f64,
    pub balance: f64,
    pub stats: ScheduleStats,
    pub warnings: Vec<String>,
}

impl From<engine::ScheduleResult> for ScheduleResult {
    fn from(v: engine::ScheduleResult) -> Self {
        ScheduleResult {
            shifts: v.shifts.into_iter().map(Into::into).collect(),
            coverage: v.coverage,
            balance: v.balance,
            stats: v.stats.into(),
            warnings: v.warnings,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation result
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<rota_engine::validator::ValidationResult> for ValidationResult {
    fn from(v: rota_engine::validator::ValidationResult) -> Self {
        ValidationResult {
            errors: v.errors,
            warnings: v.warnings,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn convert_slots(slots: Vec<Slot>) -> napi::Result<Vec<engine::Slot>> {
    slots.into_iter().map(engine::Slot::try_from).collect()
}

fn convert_input(
    employees: Vec<EmployeeAvailability>,
    shop_slots: Vec<Slot>,
) -> napi::Result<(Vec<engine::EmployeeAvailability>, Vec<engine::Slot>)> {
    let employees = employees
        .into_iter()
        .map(engine::EmployeeAvailability::try_from)
        .collect::<napi::Result<Vec<_>>>()?;
    Ok((employees, convert_slots(shop_slots)?))
}

fn checked(
    employees: Vec<EmployeeAvailability>,
    shop_slots: Vec<Slot>,
    options: Option<ScheduleOptions>,
) -> napi::Result<ScheduleResult> {
    let (employees, shop_slots) = convert_input(employees, shop_slots)?;
    let options = options.map(engine::ScheduleOptions::from);
    rota_engine::solver::generate_checked(&employees, &shop_slots, options.as_ref())
        .map(Into::into)
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

// ---------------------------------------------------------------------------
// Exported functions
// ---------------------------------------------------------------------------

/// Generate a weekly roster. Validates the input first; returns an error if
/// any slot is out of range or employee IDs clash.
#[napi]
pub fn generate_schedule(
    employees: Vec<EmployeeAvailability>,
    shop_slots: Vec<Slot>,
) -> napi::Result<ScheduleResult> {
    checked(employees, shop_slots, None)
}

/// Generate a weekly roster and report employees outside the hour bounds.
#[napi]
pub fn generate_optimized_schedule(
    employees: Vec<EmployeeAvailability>,
    shop_slots: Vec<Slot>,
    options: Option<ScheduleOptions>,
) -> napi::Result<ScheduleResult> {
    checked(employees, shop_slots, Some(options.unwrap_or_default()))
}

/// Validate generator input and return errors and warnings without generating.
#[napi]
pub fn validate(
    employees: Vec<EmployeeAvailability>,
    shop_slots: Vec<Slot>,
) -> napi::Result<ValidationResult> {
    let (employees, shop_slots) = convert_input(employees, shop_slots)?;
    Ok(rota_engine::validator::validate(&employees, &shop_slots).into())
}

