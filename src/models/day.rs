use serde::{Deserialize, Serialize};

use crate::api::DayOfWeek;
use crate::config::ScheduleDefaults;
use crate::models::time::{generate_slots, Interval, TimeOfDay};

/// Which slot-generation strategy is authoritative for a day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotMode {
    /// Evenly spaced slots generated between the window bounds.
    Auto,
    /// An explicit, author-supplied slot list.
    Custom,
}

/// Editable schedule for a single weekday.
///
/// Both strategies' data (`interval` and the custom slot list) are retained
/// at all times; `mode` selects which one is live. Switching modes does not
/// clear the other strategy's data, so an author can flip back and forth
/// without losing entries. Only the serializer narrows to the active side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    day: DayOfWeek,
    enabled: bool,
    start: TimeOfDay,
    end: TimeOfDay,
    mode: SlotMode,
    interval: Interval,
    // Invariant: ascending, duplicate-free.
    custom_slots: Vec<TimeOfDay>,
}

impl DaySchedule {
    /// New disabled day with the hard-coded authoring defaults.
    pub fn new(day: DayOfWeek) -> Self {
        Self::with_defaults(day, &ScheduleDefaults::default())
    }

    /// New disabled day using the given authoring defaults.
    pub fn with_defaults(day: DayOfWeek, defaults: &ScheduleDefaults) -> Self {
        Self {
            day,
            enabled: false,
            start: defaults.start,
            end: defaults.end,
            mode: SlotMode::Auto,
            interval: defaults.interval,
            custom_slots: Vec::new(),
        }
    }

    /// Weekday identity (immutable).
    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn mode(&self) -> SlotMode {
        self.mode
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The custom slot list, always ascending and duplicate-free.
    pub fn custom_slots(&self) -> &[TimeOfDay] {
        &self.custom_slots
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_start(&mut self, start: TimeOfDay) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: TimeOfDay) {
        self.end = end;
    }

    /// Select the slot strategy. The inactive strategy's data is retained.
    pub fn set_mode(&mut self, mode: SlotMode) {
        self.mode = mode;
    }

    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    /// Insert a custom slot, keeping the list sorted. Idempotent: inserting a
    /// time that is already present is a no-op. Returns whether the list grew.
    pub fn add_custom_slot(&mut self, time: TimeOfDay) -> bool {
        match self.custom_slots.binary_search(&time) {
            Ok(_) => false,
            Err(pos) => {
                self.custom_slots.insert(pos, time);
                true
            }
        }
    }

    /// Remove a custom slot if present. Returns whether anything was removed.
    pub fn remove_custom_slot(&mut self, time: TimeOfDay) -> bool {
        match self.custom_slots.binary_search(&time) {
            Ok(pos) => {
                self.custom_slots.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Union a batch of times into the custom slot list.
    pub fn union_custom_slots(&mut self, times: &[TimeOfDay]) {
        for &time in times {
            self.add_custom_slot(time);
        }
    }

    /// Remove every listed time from the custom slot list.
    pub fn subtract_custom_slots(&mut self, times: &[TimeOfDay]) {
        for &time in times {
            self.remove_custom_slot(time);
        }
    }

    /// Whether selective bulk custom-slot edits apply to this day right now.
    pub fn bulk_eligible(&self) -> bool {
        self.enabled && self.mode == SlotMode::Custom
    }

    /// The slot start times this day currently offers, per the active mode.
    ///
    /// Auto mode recomputes the generated sequence on every call; an inverted
    /// window previews as empty rather than erroring.
    pub fn preview_slots(&self) -> Vec<TimeOfDay> {
        match self.mode {
            SlotMode::Auto => generate_slots(self.start, self.end, self.interval),
            SlotMode::Custom => self.custom_slots.clone(),
        }
    }

    /// Replace the custom slot list wholesale, restoring the sorted/deduped
    /// invariant. Used when hydrating a previously stored configuration.
    pub(crate) fn replace_custom_slots(&mut self, mut times: Vec<TimeOfDay>) {
        times.sort_unstable();
        times.dedup();
        self.custom_slots = times;
    }
}
