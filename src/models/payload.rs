// ============================================================================
// Payload projection and hydration
// ============================================================================
//
// These functions translate between the editable weekly state and the minimal
// persisted payload: `serialize_config` narrows each enabled day to its active
// strategy, and the hydration path rebuilds the full seven-day editable state
// from a previously stored (sparse) payload.

use anyhow::{Context, Result};
use thiserror::Error;

use crate::api::{AvailabilityPayload, DateException, Slot, SlotPlan};
use crate::config::ScheduleDefaults;
use crate::models::day::SlotMode;
use crate::models::unavailable::UnavailableDates;
use crate::models::week::WeeklySchedule;

/// Errors raised while taking a stored payload back in.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload did not match the persisted contract (bad JSON, malformed
    /// "HH:MM" or "YYYY-MM-DD" value, day index out of range).
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Project the editable state into the persisted payload.
///
/// Only enabled days are emitted, narrowed to their active strategy: auto
/// days carry `interval` and omit `customSlots`, custom days the reverse, so
/// the inactive side's stale data never leaks into the output. No enabled day
/// serializes as `null` (never `[]`), and likewise for an empty date set.
pub fn serialize_config(
    week: &WeeklySchedule,
    unavailable: &UnavailableDates,
) -> AvailabilityPayload {
    let slots: Vec<Slot> = week
        .days()
        .filter(|day| day.enabled())
        .map(|day| Slot {
            day: day.day(),
            start: day.start(),
            end: day.end(),
            plan: match day.mode() {
                SlotMode::Auto => SlotPlan::Auto {
                    interval: day.interval(),
                },
                SlotMode::Custom => SlotPlan::Custom {
                    custom_slots: day.custom_slots().to_vec(),
                },
            },
        })
        .collect();

    let dates: Vec<DateException> = unavailable
        .iter()
        .map(|entry| DateException {
            date: entry.date,
            reason: entry.reason.clone(),
        })
        .collect();

    AvailabilityPayload {
        available_time_slots: (!slots.is_empty()).then_some(slots),
        unavailable_dates: (!dates.is_empty()).then_some(dates),
    }
}

/// Rebuild the editable state from a stored payload, using hard-coded
/// authoring defaults for days the payload does not mention.
pub fn hydrate(payload: &AvailabilityPayload) -> (WeeklySchedule, UnavailableDates) {
    hydrate_with(payload, &ScheduleDefaults::default())
}

/// Rebuild the editable state from a stored payload.
///
/// Days absent from the sparse slot list stay disabled with the given
/// defaults. Custom slot lists are re-sorted and deduplicated on the way in,
/// so a hand-edited payload cannot break the invariant. A day listed twice is
/// resolved last-entry-wins; a date listed twice keeps the first entry (the
/// set's own duplicate rule).
pub fn hydrate_with(
    payload: &AvailabilityPayload,
    defaults: &ScheduleDefaults,
) -> (WeeklySchedule, UnavailableDates) {
    let mut week = WeeklySchedule::with_defaults(defaults);

    if let Some(slots) = &payload.available_time_slots {
        for slot in slots {
            let record = week.day_mut(slot.day);
            if record.enabled() {
                log::warn!("duplicate payload entry for day {}; keeping the later one", slot.day);
            }
            record.set_enabled(true);
            record.set_start(slot.start);
            record.set_end(slot.end);
            match &slot.plan {
                SlotPlan::Auto { interval } => {
                    record.set_mode(SlotMode::Auto);
                    record.set_interval(*interval);
                }
                SlotPlan::Custom { custom_slots } => {
                    record.set_mode(SlotMode::Custom);
                    record.replace_custom_slots(custom_slots.clone());
                }
            }
        }
    }

    let mut unavailable = UnavailableDates::new();
    if let Some(dates) = &payload.unavailable_dates {
        for exception in dates {
            if !unavailable.add(exception.date, exception.reason.clone()) {
                log::warn!("duplicate payload entry for date {}; keeping the first one", exception.date);
            }
        }
    }

    (week, unavailable)
}

/// Parse a stored payload from its JSON string form and hydrate it.
///
/// This is the ingestion boundary: malformed JSON, a malformed "HH:MM" time,
/// a malformed date, or an out-of-range day index all fail fast here as
/// [`PayloadError::MalformedInput`], since everything downstream assumes
/// already-normalized values.
pub fn parse_payload_json_str(json: &str) -> Result<(WeeklySchedule, UnavailableDates)> {
    let payload: AvailabilityPayload = serde_json::from_str(json)
        .map_err(|e| PayloadError::MalformedInput(e.to_string()))
        .context("Failed to deserialize availability payload")?;
    Ok(hydrate(&payload))
}

/// SHA-256 hex digest of the canonical JSON encoding of a payload.
///
/// The submit handler compares digests to skip storing a configuration that
/// did not actually change.
pub fn payload_checksum(payload: &AvailabilityPayload) -> String {
    use sha2::{Digest, Sha256};
    let json = serde_json::to_string(payload).expect("payload serialization is infallible");
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}
