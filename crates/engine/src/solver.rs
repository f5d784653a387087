use crate::assigner::assign;
use crate::constraints::check_constraints;
use crate::index::AvailabilityIndex;
use crate::model::{EmployeeAvailability, ScheduleOptions, ScheduleResult, Slot};
use crate::priority::prioritize;
use crate::stats;
use crate::validator;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Invalid week start '{0}' -- expected YYYY-MM-DD")]
    InvalidWeekStart(String),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a roster for one week of shop hours.
///
/// 1. Bails out early with a warning when there are no employees, no shop
///    slots, or nobody has submitted availability.
/// 2. Indexes availability by slot and orders shop slots scarcest first.
/// 3. Assigns each slot greedily to the least-loaded available employee.
/// 4. Derives coverage, balance and statistics, adding their warnings after
///    the uncovered-slot ones.
pub fn generate_schedule(employees: &[EmployeeAvailability], shop_slots: &[Slot]) -> ScheduleResult {
    run(employees, shop_slots, None)
}

/// Same as [`generate_schedule`], followed by the advisory hour-bound check.
///
/// With `enforce_max_hours` set, the max bound also excludes full employees
/// during assignment.
pub fn generate_optimized_schedule(
    employees: &[EmployeeAvailability],
    shop_slots: &[Slot],
    options: &ScheduleOptions,
) -> ScheduleResult {
    let limit = options.enforce_max_hours.then(|| options.hour_limit());
    let mut result = run(employees, shop_slots, limit);
    check_constraints(&mut result, employees, options);
    result
}

/// Validate the input first, then generate. Validation errors become
/// [`ScheduleError::InvalidInput`]; validation warnings are dropped.
pub fn generate_checked(
    employees: &[EmployeeAvailability],
    shop_slots: &[Slot],
    options: Option<&ScheduleOptions>,
) -> Result<ScheduleResult, ScheduleError> {
    let validation = validator::validate(employees, shop_slots);
    if !validation.is_ok() {
        return Err(ScheduleError::InvalidInput(validation.errors.join("; ")));
    }

    Ok(match options {
        Some(opts) => generate_optimized_schedule(employees, shop_slots, opts),
        None => generate_schedule(employees, shop_slots),
    })
}

fn run(employees: &[EmployeeAvailability], shop_slots: &[Slot], hour_limit: Option<u32>) -> ScheduleResult {
    if employees.is_empty() {
        return ScheduleResult::empty(
            shop_slots,
            vec!["No employees available to assign shifts".to_string()],
        );
    }

    if shop_slots.is_empty() {
        return ScheduleResult::empty(
            shop_slots,
            vec!["The shop has no working hours to staff".to_string()],
        );
    }

    if employees.iter().all(|e| e.slots.is_empty()) {
        return ScheduleResult::empty(
            shop_slots,
            vec!["No employee has specified availability".to_string()],
        );
    }

    let index = AvailabilityIndex::build(employees);
    let order = prioritize(shop_slots, &index);
    let assignment = assign(employees, &order, &index, hour_limit);

    let stats = stats::compute_stats(&assignment.shifts, shop_slots.len(), &assignment.hours, employees);
    let balance = stats::balance(&assignment.hours);
    let coverage = stats::coverage(stats.covered_slots, stats.total_slots);

    let mut warnings = assignment.warnings;
    warnings.extend(stats::evaluate(&stats, coverage, balance));

    tracing::info!(
        shifts = assignment.shifts.len(),
        total = stats.total_slots,
        coverage,
        balance,
        "generated schedule"
    );

    ScheduleResult {
        shifts: assignment.shifts,
        coverage,
        balance,
        stats,
        warnings,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
