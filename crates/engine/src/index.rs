use std::collections::{HashMap, HashSet};

use crate::model::{EmployeeAvailability, Slot};

/// Lookup from a slot to the employees who can work it.
///
/// Candidates are stored as positions into the employee list they were built
/// from, in employee order. That order is what breaks ties during assignment,
/// so it must survive construction.
#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    by_slot: HashMap<Slot, Vec<usize>>,
}

impl AvailabilityIndex {
    /// Build the index in one pass over every availability entry. An employee
    /// listing the same slot twice is recorded once.
    pub fn build(employees: &[EmployeeAvailability]) -> Self {
        let mut by_slot: HashMap<Slot, Vec<usize>> = HashMap::new();

        for (i, employee) in employees.iter().enumerate() {
            let mut seen: HashSet<Slot> = HashSet::with_capacity(employee.slots.len());
            for slot in &employee.slots {
                if seen.insert(*slot) {
                    by_slot.entry(*slot).or_default().push(i);
                }
            }
        }

        tracing::debug!(slots = by_slot.len(), "built availability index");
        AvailabilityIndex { by_slot }
    }

    /// Employee positions available for `slot`, in employee order.
    pub fn candidates(&self, slot: Slot) -> &[usize] {
        self.by_slot.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct employees available for `slot`.
    pub fn count(&self, slot: Slot) -> usize {
        self.candidates(slot).len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, slots: &[(u8, u8)]) -> EmployeeAvailability {
        EmployeeAvailability {
            employee_id: id.to_string(),
            display_name: id.to_string(),
            slots: slots.iter().map(|&(d, h)| Slot::new(d, h)).collect(),
        }
    }

    #[test]
    fn test_empty_input() {
        let index = AvailabilityIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.candidates(Slot::new(0, 8)).is_empty());
    }

    #[test]
    fn test_candidates_follow_employee_order() {
        let employees = vec![
            employee("c", &[(0, 8)]),
            employee("a", &[(0, 8), (0, 9)]),
            employee("b", &[(0, 8)]),
        ];
        let index = AvailabilityIndex::build(&employees);
        assert_eq!(index.candidates(Slot::new(0, 8)), &[0, 1, 2]);
        assert_eq!(index.candidates(Slot::new(0, 9)), &[1]);
        assert_eq!(index.count(Slot::new(1, 9)), 0);
    }

    #[test]
    fn test_repeated_entries_count_once() {
        let employees = vec![employee("a", &[(3, 10), (3, 10), (3, 10)])];
        let index = AvailabilityIndex::build(&employees);
        assert_eq!(index.count(Slot::new(3, 10)), 1);
    }
}
