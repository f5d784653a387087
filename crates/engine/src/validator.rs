use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::model::{EmployeeAvailability, Slot};

/// Fewer offered hours than this draws a warning.
pub const RECOMMENDED_MIN_HOURS: usize = 10;

/// More offered hours than this draws a warning.
pub const RECOMMENDED_MAX_HOURS: usize = 40;

/// More offered hours on a single day than this draws a warning.
pub const MAX_HOURS_PER_DAY: usize = 12;

// ---------------------------------------------------------------------------
// Validation result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validate implementation
// ---------------------------------------------------------------------------

/// Check generator input, returning errors (block generation) and warnings
/// (advisory). Errors are listed before warnings.
pub fn validate(employees: &[EmployeeAvailability], shop_slots: &[Slot]) -> ValidationResult {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let shop_set: HashSet<Slot> = shop_slots.iter().copied().collect();

    // -----------------------------------------------------------------------
    // Shop slots
    // -----------------------------------------------------------------------
    for (i, slot) in shop_slots.iter().enumerate() {
        check_range(&mut errors, "Shop slot", i, slot);
    }
    if shop_set.len() < shop_slots.len() {
        warnings.push(format!(
            "Shop hours contain {} duplicate slot(s) -- each will be staffed separately",
            shop_slots.len() - shop_set.len()
        ));
    }

    // -----------------------------------------------------------------------
    // Error: duplicate or blank employee IDs
    // -----------------------------------------------------------------------
    {
        let mut seen: HashSet<&str> = HashSet::new();
        for employee in employees {
            if employee.employee_id.trim().is_empty() {
                errors.push(format!(
                    "Employee '{}' has no ID -- every employee needs a unique ID",
                    employee.display_name
                ));
            } else if !seen.insert(employee.employee_id.as_str()) {
                errors.push(format!(
                    "Duplicate employee ID '{}' -- each employee must have a unique ID",
                    employee.employee_id
                ));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Per-employee availability
    // -----------------------------------------------------------------------
    for employee in employees {
        let name = employee.display_name.as_str();
        let label = format!("Employee '{}' slot", name);
        for (i, slot) in employee.slots.iter().enumerate() {
            check_range(&mut errors, &label, i, slot);
        }

        let distinct: HashSet<Slot> = employee.slots.iter().copied().collect();
        let offered = distinct.len();

        if offered < employee.slots.len() {
            warnings.push(format!(
                "Employee '{}' listed {} duplicate slot(s) -- each counts once",
                name,
                employee.slots.len() - offered
            ));
        }

        if offered == 0 {
            warnings.push(format!("Employee '{}' has not selected any available hours", name));
            continue;
        }

        if offered < RECOMMENDED_MIN_HOURS {
            warnings.push(format!(
                "Employee '{}' offered only {} hours -- at least {} per week is recommended",
                name, offered, RECOMMENDED_MIN_HOURS
            ));
        }
        if offered > RECOMMENDED_MAX_HOURS {
            warnings.push(format!(
                "Employee '{}' offered {} hours -- at most {} per week is recommended",
                name, offered, RECOMMENDED_MAX_HOURS
            ));
        }

        let closed = distinct.iter().filter(|s| !shop_set.contains(*s)).count();
        if closed > 0 {
            warnings.push(format!(
                "Employee '{}' offered {} slot(s) when the shop is closed -- they will not be used",
                name, closed
            ));
        }

        let mut per_day: BTreeMap<u8, usize> = BTreeMap::new();
        for slot in &distinct {
            *per_day.entry(slot.day).or_insert(0) += 1;
        }
        if per_day.len() == 1 {
            warnings.push(format!(
                "Employee '{}' is available on a single day only -- several days are recommended",
                name
            ));
        }
        for (day, count) in per_day {
            if count > MAX_HOURS_PER_DAY {
                warnings.push(format!(
                    "Employee '{}' offered {} hours on {} -- that may be too many",
                    name,
                    count,
                    crate::model::weekday_name(day)
                ));
            }
        }
    }

    ValidationResult { errors, warnings }
}

fn check_range(errors: &mut Vec<String>, label: &str, position: usize, slot: &Slot) {
    if slot.day > 6 {
        errors.push(format!(
            "{} {}: invalid day of week ({}) -- must be 0 to 6",
            label,
            position + 1,
            slot.day
        ));
    }
    if slot.hour > 23 {
        errors.push(format!(
            "{} {}: invalid hour ({}) -- must be 0 to 23",
            label,
            position + 1,
            slot.hour
        ));
    }
}
