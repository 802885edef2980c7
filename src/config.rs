//! Authoring defaults and environment variable handling.

use std::env;

use crate::models::time::{Interval, TimeOfDay};

/// Default window and interval applied to fresh day schedules.
///
/// Every day starts disabled with this window; the values only matter once a
/// day is enabled, but they are always present so the form never shows an
/// empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDefaults {
    /// Window start for new day schedules
    pub start: TimeOfDay,
    /// Window end for new day schedules
    pub end: TimeOfDay,
    /// Auto-mode slot spacing for new day schedules
    pub interval: Interval,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            start: TimeOfDay::from_minutes(9 * 60),
            end: TimeOfDay::from_minutes(18 * 60),
            interval: Interval::HOUR,
        }
    }
}

impl ScheduleDefaults {
    /// Create authoring defaults from environment variables.
    ///
    /// # Environment Variables
    /// - `SCHEDULE_DEFAULT_START` (optional, default: `09:00`): window start as "HH:MM"
    /// - `SCHEDULE_DEFAULT_END` (optional, default: `18:00`): window end as "HH:MM"
    /// - `SCHEDULE_DEFAULT_INTERVAL` (optional, default: `60`): slot spacing in minutes
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let fallback = Self::default();

        let start = match env::var("SCHEDULE_DEFAULT_START") {
            Ok(raw) => TimeOfDay::parse(&raw)
                .map_err(|_| format!("SCHEDULE_DEFAULT_START must be \"HH:MM\", got '{}'", raw))?,
            Err(_) => fallback.start,
        };
        let end = match env::var("SCHEDULE_DEFAULT_END") {
            Ok(raw) => TimeOfDay::parse(&raw)
                .map_err(|_| format!("SCHEDULE_DEFAULT_END must be \"HH:MM\", got '{}'", raw))?,
            Err(_) => fallback.end,
        };
        let interval = match env::var("SCHEDULE_DEFAULT_INTERVAL") {
            Ok(raw) => raw
                .parse()
                .map(Interval::new)
                .map_err(|_| {
                    format!(
                        "SCHEDULE_DEFAULT_INTERVAL must be a number of minutes, got '{}'",
                        raw
                    )
                })?,
            Err(_) => fallback.interval,
        };

        Ok(Self {
            start,
            end,
            interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_nine_to_six_hourly() {
        let defaults = ScheduleDefaults::default();
        assert_eq!(defaults.start.to_string(), "09:00");
        assert_eq!(defaults.end.to_string(), "18:00");
        assert_eq!(defaults.interval, Interval::HOUR);
    }

    #[test]
    fn test_from_env_sequence() {
        // Single test to keep env mutation sequential; cargo runs tests in
        // parallel and these variables are process-global.
        env::remove_var("SCHEDULE_DEFAULT_START");
        env::remove_var("SCHEDULE_DEFAULT_END");
        env::remove_var("SCHEDULE_DEFAULT_INTERVAL");
        assert_eq!(ScheduleDefaults::from_env(), Ok(ScheduleDefaults::default()));

        env::set_var("SCHEDULE_DEFAULT_START", "10:00");
        env::set_var("SCHEDULE_DEFAULT_INTERVAL", "30");
        let loaded = ScheduleDefaults::from_env().unwrap();
        assert_eq!(loaded.start.to_string(), "10:00");
        assert_eq!(loaded.end.to_string(), "18:00");
        assert_eq!(loaded.interval, Interval::HALF_HOUR);

        env::set_var("SCHEDULE_DEFAULT_START", "not-a-time");
        assert!(ScheduleDefaults::from_env().is_err());

        env::remove_var("SCHEDULE_DEFAULT_START");
        env::remove_var("SCHEDULE_DEFAULT_INTERVAL");
    }
}
