use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a time string does not match the 24-hour "HH:MM" shape.
///
/// This is the only parse failure in the engine: every `TimeOfDay` in the
/// system was either built from minutes internally or went through
/// [`TimeOfDay::parse`] at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed time of day {input:?}: expected 24-hour \"HH:MM\"")]
pub struct MalformedTime {
    /// The rejected input, verbatim.
    pub input: String,
}

/// Time of day stored as minutes since midnight.
///
/// The canonical textual form is zero-padded 24-hour "HH:MM", which is also
/// the serde representation. Ordering is chronological, so sorted slot lists
/// fall out of the derived `Ord`.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from raw minutes since midnight.
    ///
    /// No bounds check is applied; formatting simply divides into hours and
    /// minutes, matching the arithmetic the slot generator relies on. Values
    /// are expected below 1440 (all internal callers stay within "23:59");
    /// anything larger formats with a widened hour field (e.g. `"25:00"`)
    /// that [`parse`](Self::parse) would reject on re-ingestion.
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight (`hour * 60 + minute`).
    pub const fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component.
    pub const fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component.
    pub const fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Parse a strict 24-hour "HH:MM" string (`"00:00"`..=`"23:59"`).
    ///
    /// Values produced by the authoring UI are already in this shape; this
    /// validation exists for the hydration boundary, where previously stored
    /// payloads are taken back in and must fail fast if corrupted.
    pub fn parse(input: &str) -> Result<Self, MalformedTime> {
        let malformed = || MalformedTime {
            input: input.to_string(),
        };

        let (hh, mm) = input.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(malformed());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour: u16 = hh.parse().map_err(|_| malformed())?;
        let minute: u16 = mm.parse().map_err(|_| malformed())?;
        if hour >= 24 || minute >= 60 {
            return Err(malformed());
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = MalformedTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = MalformedTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// Spacing between generated slots, in minutes.
///
/// Serialized as the bare number of minutes. The authoring UI offers a fixed
/// menu (15, 30, 60, ...) but the engine accepts any spacing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval(pub u16);

impl Interval {
    pub const QUARTER_HOUR: Interval = Interval(15);
    pub const HALF_HOUR: Interval = Interval(30);
    pub const HOUR: Interval = Interval(60);

    pub fn new(minutes: u16) -> Self {
        Interval(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

/// Generate evenly spaced slot start times within `[start, end)`.
///
/// Emits `start`, then advances by `interval` while strictly below `end`. An
/// inverted or empty window yields an empty sequence, as does a zero
/// interval (no step possible). The result is freshly computed on every call
/// and is a pure function of its inputs, which the authoring preview and the
/// round-trip tests rely on.
pub fn generate_slots(start: TimeOfDay, end: TimeOfDay, interval: Interval) -> Vec<TimeOfDay> {
    let step = interval.minutes();
    if step == 0 {
        return Vec::new();
    }

    // Widened arithmetic: a stored payload may carry any u16 interval, and
    // cursor + step can exceed u16::MAX even though every emitted value is
    // below end (< 1440).
    let end_minutes = u32::from(end.minutes());
    let step = u32::from(step);

    let mut slots = Vec::new();
    let mut cursor = u32::from(start.minutes());
    while cursor < end_minutes {
        slots.push(TimeOfDay::from_minutes(cursor as u16));
        cursor += step;
    }
    slots
}
