use std::collections::HashMap;

use crate::index::AvailabilityIndex;
use crate::model::{EmployeeAvailability, GeneratedShift, Slot};

// ---------------------------------------------------------------------------
// Hour counter
// ---------------------------------------------------------------------------

/// Assigned hours per employee id. Every known employee starts at zero, even
/// with no availability, so they take part in min/max and balance.
#[derive(Debug, Clone, Default)]
pub struct HourCounter<'a> {
    hours: HashMap<&'a str, u32>,
}

impl<'a> HourCounter<'a> {
    pub fn new(employees: &'a [EmployeeAvailability]) -> Self {
        let hours = employees
            .iter()
            .map(|e| (e.employee_id.as_str(), 0))
            .collect();
        HourCounter { hours }
    }

    pub fn get(&self, employee_id: &str) -> u32 {
        self.hours.get(employee_id).copied().unwrap_or(0)
    }

    fn increment(&mut self, employee_id: &'a str) {
        *self.hours.entry(employee_id).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.hours.values().copied()
    }

    /// (min, max) over all counters, or (0, 0) when empty.
    pub fn spread(&self) -> (u32, u32) {
        let min = self.values().min().unwrap_or(0);
        let max = self.values().max().unwrap_or(0);
        (min, max)
    }
}

// ---------------------------------------------------------------------------
// Greedy assignment
// ---------------------------------------------------------------------------

/// Output of one assignment pass.
#[derive(Debug)]
pub struct Assignment<'a> {
    pub shifts: Vec<GeneratedShift>,
    pub hours: HourCounter<'a>,
    /// One entry per slot left uncovered, in processing order.
    pub warnings: Vec<String>,
}

/// Walk `order` once and give each slot to the least-loaded candidate.
///
/// Ties go to the candidate listed first in the index (employee order).
/// Decisions are never revisited. When `hour_limit` is set, candidates whose
/// counter already reached it are skipped.
pub fn assign<'a>(
    employees: &'a [EmployeeAvailability],
    order: &[Slot],
    index: &AvailabilityIndex,
    hour_limit: Option<u32>,
) -> Assignment<'a> {
    let mut hours = HourCounter::new(employees);
    let mut shifts: Vec<GeneratedShift> = Vec::with_capacity(order.len());
    let mut warnings: Vec<String> = Vec::new();

    for &slot in order {
        let candidates = index.candidates(slot);

        if candidates.is_empty() {
            tracing::warn!(%slot, "slot has no available employees");
            warnings.push(format!("No coverage: {}", slot));
            continue;
        }

        let selected = select_least_loaded(employees, candidates, &hours, hour_limit);

        let Some(idx) = selected else {
            // Only reachable with a limit: everyone who could work it is full.
            let limit = hour_limit.unwrap_or_default();
            tracing::warn!(%slot, limit, "all candidates at hour limit");
            warnings.push(format!(
                "No coverage: {} (every available employee is at the {}-hour limit)",
                slot, limit
            ));
            continue;
        };

        let employee = &employees[idx];
        let priority = priority_score(candidates.len(), &hours);

        tracing::debug!(
            %slot,
            employee = %employee.employee_id,
            load = hours.get(&employee.employee_id),
            candidates = candidates.len(),
            "assigned slot"
        );

        shifts.push(GeneratedShift {
            employee_id: employee.employee_id.clone(),
            display_name: employee.display_name.clone(),
            day: slot.day,
            hour: slot.hour,
            priority,
        });
        hours.increment(employee.employee_id.as_str());
    }

    Assignment {
        shifts,
        hours,
        warnings,
    }
}

/// Stable minimum: a later candidate only wins with strictly fewer hours.
fn select_least_loaded(
    employees: &[EmployeeAvailability],
    candidates: &[usize],
    hours: &HourCounter<'_>,
    hour_limit: Option<u32>,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for &idx in candidates {
        let load = hours.get(&employees[idx].employee_id);
        if hour_limit.is_some_and(|limit| load >= limit) {
            continue;
        }
        match best {
            Some((_, best_load)) if load >= best_load => {}
            _ => best = Some((idx, load)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Scarcity term (10 minus candidate count) plus the current load spread.
fn priority_score(candidate_count: usize, hours: &HourCounter<'_>) -> i32 {
    let (min, max) = hours.spread();
    let scarcity = 10 - candidate_count as i32;
    scarcity + (max - min) as i32
}
