use std::collections::HashSet;

use crate::model::{EmployeeAvailability, ScheduleOptions, ScheduleResult};

pub const VIOLATIONS_HEADER: &str = "Constraint violations:";

/// Report employees whose assigned hours fall outside the configured bounds.
///
/// Advisory only: shifts and stats are left as they are. Employees with zero
/// hours are never reported as under the minimum. Lines follow employee
/// order; a repeated display name is reported once, at its first position.
pub fn check_constraints(
    result: &mut ScheduleResult,
    employees: &[EmployeeAvailability],
    options: &ScheduleOptions,
) {
    let max_hours = options.max_hours();
    let min_hours = options.min_hours();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut violations: Vec<String> = Vec::new();
    for employee in employees {
        let name = employee.display_name.as_str();
        if !seen.insert(name) {
            continue;
        }
        let Some(&hours) = result.stats.hours_per_barista.get(name) else {
            continue;
        };
        let worked = f64::from(hours);

        if worked > max_hours {
            violations.push(format!(
                "{}: {} hours (exceeds limit of {})",
                name, hours, max_hours
            ));
        }
        if hours > 0 && worked < min_hours {
            violations.push(format!(
                "{}: {} hours (below minimum of {})",
                name, hours, min_hours
            ));
        }
    }

    if violations.is_empty() {
        return;
    }

    tracing::warn!(count = violations.len(), "hour bounds violated");
    result.warnings.push(VIOLATIONS_HEADER.to_string());
    result.warnings.extend(violations);
}
