use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound on weekly hours used when the caller gives no (or a zero) limit.
pub const DEFAULT_MAX_HOURS: f64 = 40.0;

/// Lower bound on weekly hours used when the caller gives no (or a zero) limit.
pub const DEFAULT_MIN_HOURS: f64 = 10.0;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English name for a day-of-week index (0 = Monday). Out-of-range values
/// render as `Day N` rather than failing.
pub fn weekday_name(day: u8) -> String {
    WEEKDAY_NAMES
        .get(day as usize)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Day {}", day))
}

/// Narrow a slot count for 32-bit consumers, saturating at `u32::MAX`.
pub fn clamp_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// One hour of one weekday. Used both for what the shop needs staffed and for
/// what an employee can work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Day of week, 0 (Monday) through 6 (Sunday).
    pub day: u8,
    /// Hour of day, 0 through 23.
    pub hour: u8,
}

impl Slot {
    pub fn new(day: u8, hour: u8) -> Self {
        Slot { day, hour }
    }

    pub fn is_in_range(&self) -> bool {
        self.day <= 6 && self.hour <= 23
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:00", weekday_name(self.day), self.hour)
    }
}

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// An employee and the hour slots they submitted for the week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAvailability {
    pub employee_id: String,
    pub display_name: String,
    /// Treated as a set: repeated entries are counted once.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Bounds for the advisory constraint pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// Fractional bounds such as 37.5 are allowed.
    #[serde(default)]
    pub max_hours_per_barista: Option<f64>,
    #[serde(default)]
    pub min_hours_per_barista: Option<f64>,
    /// Accepted for compatibility with existing callers; has no effect.
    #[serde(default)]
    pub preferred_balance: Option<f64>,
    /// Exclude employees who already reached the max bound while assigning.
    /// Off by default, in which case the bounds are only reported.
    #[serde(default)]
    pub enforce_max_hours: bool,
}

impl ScheduleOptions {
    /// Effective max bound. Zero counts as unset.
    pub fn max_hours(&self) -> f64 {
        self.max_hours_per_barista
            .filter(|&h| h > 0.0)
            .unwrap_or(DEFAULT_MAX_HOURS)
    }

    /// Effective min bound. Zero counts as unset.
    pub fn min_hours(&self) -> f64 {
        self.min_hours_per_barista
            .filter(|&h| h > 0.0)
            .unwrap_or(DEFAULT_MIN_HOURS)
    }

    /// Whole-hour cap for assignment: the most hours that stay within the
    /// max bound, so 37.5 allows 37.
    pub fn hour_limit(&self) -> u32 {
        self.max_hours().floor() as u32
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One covered shop slot and the employee assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedShift {
    pub employee_id: String,
    pub display_name: String,
    pub day: u8,
    pub hour: u8,
    /// Diagnostic only: scarcity of the slot plus the load spread at the
    /// moment it was assigned.
    pub priority: i32,
}

impl GeneratedShift {
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.hour)
    }
}

/// Coverage and workload figures derived from the final hour counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleStats {
    pub total_slots: usize,
    pub covered_slots: usize,
    pub uncovered_slots: usize,
    /// Assigned hours keyed by display name.
    pub hours_per_barista: BTreeMap<String, u32>,
    pub min_hours: u32,
    pub max_hours: u32,
    pub avg_hours: f64,
}

/// The complete output of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleResult {
    pub shifts: Vec<GeneratedShift>,
    /// Percentage of shop slots that received an assignment, 0..=100.
    pub coverage: f64,
    /// 1.0 means hours are spread perfectly evenly.
    pub balance: f64,
    pub stats: ScheduleStats,
    /// Human-readable notes (uncovered slots, imbalance, violations).
    pub warnings: Vec<String>,
}

impl ScheduleResult {
    /// Result for runs that stop before assignment: nothing covered, every
    /// shop slot counted as uncovered.
    pub fn empty(shop_slots: &[Slot], warnings: Vec<String>) -> Self {
        ScheduleResult {
            shifts: Vec::new(),
            coverage: 0.0,
            balance: 0.0,
            stats: ScheduleStats {
                total_slots: shop_slots.len(),
                uncovered_slots: shop_slots.len(),
                ..ScheduleStats::default()
            },
            warnings,
        }
    }
}
