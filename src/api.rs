//! Public API surface for the availability engine.
//!
//! This file consolidates the DTO types for the persisted payload — the only
//! bit-exact contract shared with the initial-state provider and the submit
//! handler. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::day::SlotMode;
pub use crate::models::time::{Interval, MalformedTime, TimeOfDay};

use serde::{Deserialize, Serialize};

/// Weekday index, Sunday = 0 through Saturday = 6.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: DayOfWeek = DayOfWeek(0);
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const TUESDAY: DayOfWeek = DayOfWeek(2);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(3);
    pub const THURSDAY: DayOfWeek = DayOfWeek(4);
    pub const FRIDAY: DayOfWeek = DayOfWeek(5);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);

    /// All seven weekdays in index order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::SUNDAY,
        DayOfWeek::MONDAY,
        DayOfWeek::TUESDAY,
        DayOfWeek::WEDNESDAY,
        DayOfWeek::THURSDAY,
        DayOfWeek::FRIDAY,
        DayOfWeek::SATURDAY,
    ];

    /// Create from a 0-based index; `None` when out of range.
    pub fn new(index: u8) -> Option<Self> {
        (index <= 6).then_some(DayOfWeek(index))
    }

    /// Raw index value (0..=6).
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Index usable for array access.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Monday through Friday.
    pub fn is_weekday(&self) -> bool {
        (1..=5).contains(&self.0)
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.0 == 0 || self.0 == 6
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::new(value)
            .ok_or_else(|| format!("day index must be in 0..=6, got {}", value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The active slot strategy of a serialized day, carrying only the data that
/// strategy needs. The `mode` tag plus the internally tagged representation
/// guarantee a slot never carries both `interval` and `customSlots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SlotPlan {
    /// Evenly spaced slots at `interval` minutes between the window bounds.
    Auto { interval: Interval },
    /// Explicit slot list, sorted ascending and duplicate-free.
    Custom {
        #[serde(rename = "customSlots")]
        custom_slots: Vec<TimeOfDay>,
    },
}

/// One enabled weekday in the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Weekday index (Sunday = 0)
    pub day: DayOfWeek,
    /// Window start as "HH:MM"
    pub start: TimeOfDay,
    /// Window end as "HH:MM"
    pub end: TimeOfDay,
    /// Active strategy and its data (`mode` + `interval` or `customSlots`)
    #[serde(flatten)]
    pub plan: SlotPlan,
}

/// One exception date in the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateException {
    /// Calendar date as "YYYY-MM-DD"
    pub date: chrono::NaiveDate,
    /// Free-text reason, may be empty
    #[serde(default)]
    pub reason: String,
}

/// The full persisted configuration.
///
/// Both fields serialize to `null` (never `[]`) when there is nothing to
/// say, and consumers treat `null` and "no entries" as the same signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPayload {
    /// Enabled days only; `null` when no day is enabled
    #[serde(default)]
    pub available_time_slots: Option<Vec<Slot>>,
    /// Sorted exception dates; `null` when the set is empty
    #[serde(default)]
    pub unavailable_dates: Option<Vec<DateException>>,
}
