use crate::api::DayOfWeek;
use crate::config::ScheduleDefaults;
use crate::models::day::{DaySchedule, SlotMode};
use crate::models::time::{Interval, TimeOfDay};

/// Result of a selective bulk custom-slot edit.
///
/// Empty input is user guidance rather than a fault, so it is reported as a
/// variant instead of an error: the caller surfaces a warning and the session
/// continues untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BulkOutcome {
    /// The edit ran; `days_updated` counts the eligible days it touched.
    Applied { days_updated: usize },
    /// The proposed time list was empty; nothing was touched.
    EmptyInput,
}

/// The full week: exactly seven day records, Sunday (0) through Saturday (6).
///
/// Every day record is always present; a day that does not participate is
/// `enabled = false`, never missing. Disabling is the only "removal".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklySchedule {
    /// Fresh week: all seven days disabled with hard-coded defaults.
    pub fn new() -> Self {
        Self::with_defaults(&ScheduleDefaults::default())
    }

    /// Fresh week using the given authoring defaults.
    pub fn with_defaults(defaults: &ScheduleDefaults) -> Self {
        Self {
            days: DayOfWeek::ALL.map(|day| DaySchedule::with_defaults(day, defaults)),
        }
    }

    pub fn day(&self, day: DayOfWeek) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    /// All seven days in index order.
    pub fn days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }

    pub fn all_enabled(&self) -> bool {
        self.days.iter().all(|day| day.enabled())
    }

    /// Set the enabled flag uniformly across all seven days.
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for day in &mut self.days {
            day.set_enabled(enabled);
        }
    }

    /// True toggle: every day becomes the negation of "all seven enabled".
    /// Returns the new uniform enabled state.
    pub fn toggle_all_enabled(&mut self) -> bool {
        let enabled = !self.all_enabled();
        self.set_all_enabled(enabled);
        enabled
    }

    /// Enable Monday through Friday and explicitly disable the weekend,
    /// overwriting prior state on all seven days.
    pub fn apply_weekdays_only(&mut self) {
        for day in &mut self.days {
            let enabled = day.day().is_weekday();
            day.set_enabled(enabled);
        }
    }

    /// Enable Saturday and Sunday and explicitly disable the weekdays,
    /// overwriting prior state on all seven days.
    pub fn apply_weekends_only(&mut self) {
        for day in &mut self.days {
            let enabled = day.day().is_weekend();
            day.set_enabled(enabled);
        }
    }

    /// Overwrite the window start on all seven days regardless of `enabled`.
    pub fn apply_start_to_all(&mut self, start: TimeOfDay) {
        for day in &mut self.days {
            day.set_start(start);
        }
    }

    /// Overwrite the window end on all seven days regardless of `enabled`.
    pub fn apply_end_to_all(&mut self, end: TimeOfDay) {
        for day in &mut self.days {
            day.set_end(end);
        }
    }

    /// Overwrite the slot mode on all seven days regardless of `enabled`.
    pub fn apply_mode_to_all(&mut self, mode: SlotMode) {
        for day in &mut self.days {
            day.set_mode(mode);
        }
    }

    /// Overwrite the interval on all seven days regardless of `enabled`.
    pub fn apply_interval_to_all(&mut self, interval: Interval) {
        for day in &mut self.days {
            day.set_interval(interval);
        }
    }

    /// Union `times` into the custom slot list of every eligible day.
    ///
    /// Eligibility (`enabled && mode == custom`) is evaluated per day at the
    /// moment of application, never cached: the flags may have changed since
    /// the time list was assembled. Disabled and auto-mode days are left
    /// completely untouched.
    pub fn apply_bulk_add(&mut self, times: &[TimeOfDay]) -> BulkOutcome {
        if times.is_empty() {
            return BulkOutcome::EmptyInput;
        }

        let mut days_updated = 0;
        for day in &mut self.days {
            if day.bulk_eligible() {
                day.union_custom_slots(times);
                days_updated += 1;
            }
        }
        log::debug!("bulk add of {} times touched {} days", times.len(), days_updated);
        BulkOutcome::Applied { days_updated }
    }

    /// Remove every time in `times` from the custom slot list of every
    /// eligible day. Same eligibility and empty-input rules as
    /// [`apply_bulk_add`](Self::apply_bulk_add).
    pub fn apply_bulk_remove(&mut self, times: &[TimeOfDay]) -> BulkOutcome {
        if times.is_empty() {
            return BulkOutcome::EmptyInput;
        }

        let mut days_updated = 0;
        for day in &mut self.days {
            if day.bulk_eligible() {
                day.subtract_custom_slots(times);
                days_updated += 1;
            }
        }
        log::debug!(
            "bulk remove of {} times touched {} days",
            times.len(),
            days_updated
        );
        BulkOutcome::Applied { days_updated }
    }
}
