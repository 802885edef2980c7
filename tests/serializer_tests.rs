//! Tests for the serialized payload shape: enabled-day filtering, strategy
//! narrowing, and the null-vs-empty contract.

use availability_engine::api::*;
use availability_engine::models::{
    payload_checksum, serialize_config, SlotMode, UnavailableDates, WeeklySchedule,
};
use serde_json::json;

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

#[test]
fn test_single_auto_day_payload() {
    let mut week = WeeklySchedule::new();
    let monday = week.day_mut(DayOfWeek::MONDAY);
    monday.set_enabled(true);
    monday.set_start(t("09:00"));
    monday.set_end(t("11:00"));
    monday.set_interval(Interval::HOUR);

    // The authoring preview for this window.
    assert_eq!(
        week.day(DayOfWeek::MONDAY).preview_slots(),
        vec![t("09:00"), t("10:00")]
    );

    let payload = serialize_config(&week, &UnavailableDates::new());
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "availableTimeSlots": [
                { "day": 1, "start": "09:00", "end": "11:00", "mode": "auto", "interval": 60 }
            ],
            "unavailableDates": null
        })
    );
}

#[test]
fn test_no_enabled_day_serializes_null_not_empty() {
    let payload = serialize_config(&WeeklySchedule::new(), &UnavailableDates::new());
    assert_eq!(payload.available_time_slots, None);

    let value = serde_json::to_value(&payload).unwrap();
    assert!(value["availableTimeSlots"].is_null());
    assert!(!value["availableTimeSlots"].is_array());
}

#[test]
fn test_custom_day_emits_sorted_slots_and_no_interval() {
    let mut week = WeeklySchedule::new();
    let tuesday = week.day_mut(DayOfWeek::TUESDAY);
    tuesday.set_enabled(true);
    tuesday.set_mode(SlotMode::Custom);
    tuesday.add_custom_slot(t("14:00"));
    tuesday.add_custom_slot(t("09:00"));
    tuesday.add_custom_slot(t("14:00"));

    let value =
        serde_json::to_value(serialize_config(&week, &UnavailableDates::new())).unwrap();
    let slot = &value["availableTimeSlots"][0];

    assert_eq!(slot["mode"], "custom");
    assert_eq!(slot["customSlots"], json!(["09:00", "14:00"]));
    assert!(slot.get("interval").is_none());
}

#[test]
fn test_unavailable_dates_sorted_in_payload() {
    let mut dates = UnavailableDates::new();
    dates.add("2025-09-10".parse().unwrap(), "maintenance");
    dates.add("2025-03-01".parse().unwrap(), "");

    let value = serde_json::to_value(serialize_config(&WeeklySchedule::new(), &dates)).unwrap();
    assert_eq!(
        value["unavailableDates"],
        json!([
            { "date": "2025-03-01", "reason": "" },
            { "date": "2025-09-10", "reason": "maintenance" }
        ])
    );
}

#[test]
fn test_days_emitted_in_index_order() {
    let mut week = WeeklySchedule::new();
    week.apply_weekends_only();

    let payload = serialize_config(&week, &UnavailableDates::new());
    let slots = payload.available_time_slots.unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day, DayOfWeek::SUNDAY);
    assert_eq!(slots[1].day, DayOfWeek::SATURDAY);
}

#[test]
fn test_checksum_ignores_inactive_strategy_data() {
    let mut week = WeeklySchedule::new();
    week.day_mut(DayOfWeek::MONDAY).set_enabled(true);
    let baseline = payload_checksum(&serialize_config(&week, &UnavailableDates::new()));

    // Stale custom data on an auto day never reaches the payload.
    week.day_mut(DayOfWeek::MONDAY).add_custom_slot(t("13:00"));
    let with_stale = payload_checksum(&serialize_config(&week, &UnavailableDates::new()));
    assert_eq!(baseline, with_stale);

    // A live change does.
    week.day_mut(DayOfWeek::MONDAY).set_interval(Interval::HALF_HOUR);
    let changed = payload_checksum(&serialize_config(&week, &UnavailableDates::new()));
    assert_ne!(baseline, changed);
}
