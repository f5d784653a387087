use std::collections::BTreeMap;

use crate::assigner::HourCounter;
use crate::model::{EmployeeAvailability, GeneratedShift, ScheduleStats};

/// Below this balance coefficient an imbalance warning is emitted.
pub const BALANCE_WARNING_THRESHOLD: f64 = 0.7;

/// Coverage (percent) below which an incomplete-coverage warning is emitted.
pub const FULL_COVERAGE: f64 = 100.0;

/// Summarise the final hour counter and shift list.
pub fn compute_stats(
    shifts: &[GeneratedShift],
    total_slots: usize,
    hours: &HourCounter<'_>,
    employees: &[EmployeeAvailability],
) -> ScheduleStats {
    // Keyed by display name; a repeated name keeps the later employee's count.
    let hours_per_barista: BTreeMap<String, u32> = employees
        .iter()
        .map(|e| (e.display_name.clone(), hours.get(&e.employee_id)))
        .collect();

    let (min_hours, max_hours) = hours.spread();
    let avg_hours = if hours.is_empty() {
        0.0
    } else {
        hours.values().map(f64::from).sum::<f64>() / hours.len() as f64
    };

    ScheduleStats {
        total_slots,
        covered_slots: shifts.len(),
        uncovered_slots: total_slots.saturating_sub(shifts.len()),
        hours_per_barista,
        min_hours,
        max_hours,
        avg_hours,
    }
}

/// Percentage of shop slots covered. Zero when there were no slots.
pub fn coverage(covered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    covered as f64 / total as f64 * 100.0
}

/// `1 - (max - min) / max`, or 1.0 when there is at most one employee or
/// nobody has any hours.
pub fn balance(hours: &HourCounter<'_>) -> f64 {
    if hours.len() <= 1 {
        return 1.0;
    }
    let (min, max) = hours.spread();
    if max == 0 {
        return 1.0;
    }
    let ratio = 1.0 - f64::from(max - min) / f64::from(max);
    ratio.clamp(0.0, 1.0)
}

/// Imbalance and partial-coverage warnings, in that order.
pub fn evaluate(stats: &ScheduleStats, coverage: f64, balance: f64) -> Vec<String> {
    let mut warnings = Vec::new();

    if balance < BALANCE_WARNING_THRESHOLD {
        warnings.push(format!(
            "Significant hour imbalance: from {} to {} hours",
            stats.min_hours, stats.max_hours
        ));
    }

    if coverage < FULL_COVERAGE {
        warnings.push(format!(
            "Incomplete coverage: {}/{} slots ({:.1}%)",
            stats.covered_slots, stats.total_slots, coverage
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assigner::assign;
    use crate::index::AvailabilityIndex;
    use crate::model::Slot;
    use crate::priority::prioritize;

    fn employee(id: &str, name: &str, slots: &[(u8, u8)]) -> EmployeeAvailability {
        EmployeeAvailability {
            employee_id: id.to_string(),
            display_name: name.to_string(),
            slots: slots.iter().map(|&(d, h)| Slot::new(d, h)).collect(),
        }
    }

    #[test]
    fn test_coverage_zero_total() {
        assert_eq!(coverage(0, 0), 0.0);
        assert_eq!(coverage(1, 2), 50.0);
        assert_eq!(coverage(3, 3), 100.0);
    }

    #[test]
    fn test_balance_edge_cases() {
        let one = vec![employee("a", "A", &[])];
        assert_eq!(balance(&HourCounter::new(&one)), 1.0);

        let none_assigned = vec![employee("a", "A", &[]), employee("b", "B", &[])];
        assert_eq!(balance(&HourCounter::new(&none_assigned)), 1.0);
    }

    #[test]
    fn test_stats_and_balance_from_assignment() {
        let employees = vec![
            employee("u1", "Ann", &[(0, 8), (0, 9), (0, 10)]),
            employee("u2", "Bob", &[(0, 10)]),
        ];
        let shop: Vec<Slot> = vec![Slot::new(0, 8), Slot::new(0, 9), Slot::new(0, 10)];
        let index = AvailabilityIndex::build(&employees);
        let order = prioritize(&shop, &index);
        let result = assign(&employees, &order, &index, None);

        let stats = compute_stats(&result.shifts, shop.len(), &result.hours, &employees);
        assert_eq!(stats.covered_slots, 3);
        assert_eq!(stats.uncovered_slots, 0);
        assert_eq!(stats.hours_per_barista["Ann"], 2);
        assert_eq!(stats.hours_per_barista["Bob"], 1);
        assert_eq!(stats.min_hours, 1);
        assert_eq!(stats.max_hours, 2);
        assert!((stats.avg_hours - 1.5).abs() < 1e-9);
        assert!((balance(&result.hours) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_thresholds() {
        let stats = ScheduleStats {
            total_slots: 4,
            covered_slots: 3,
            uncovered_slots: 1,
            min_hours: 1,
            max_hours: 2,
            ..ScheduleStats::default()
        };
        let warnings = evaluate(&stats, 75.0, 0.5);
        assert_eq!(
            warnings,
            vec![
                "Significant hour imbalance: from 1 to 2 hours".to_string(),
                "Incomplete coverage: 3/4 slots (75.0%)".to_string(),
            ]
        );

        assert!(evaluate(&stats, 100.0, 0.7).is_empty());
    }
}
