use chrono::NaiveDate;

/// One exception date with its free-text reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableDate {
    pub date: NaiveDate,
    pub reason: String,
}

/// Exception dates on which the item is not bookable regardless of the
/// weekly schedule.
///
/// Kept sorted ascending by date with no duplicates. There is deliberately
/// no calendar-validity policing: past dates and far-future dates are all
/// accepted, only duplicates are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnavailableDates {
    entries: Vec<UnavailableDate>,
}

impl UnavailableDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a date with a reason, keeping the set sorted.
    ///
    /// A date already present is a full no-op: the existing entry keeps its
    /// reason and `false` is returned. Use [`update_reason`](Self::update_reason)
    /// to change an existing entry.
    pub fn add(&mut self, date: NaiveDate, reason: impl Into<String>) -> bool {
        match self.position(date) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(
                    pos,
                    UnavailableDate {
                        date,
                        reason: reason.into(),
                    },
                );
                true
            }
        }
    }

    /// Remove the entry for `date` if present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        match self.position(date) {
            Ok(pos) => {
                self.entries.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Replace the reason of an existing entry; no-op when the date is absent.
    pub fn update_reason(&mut self, date: NaiveDate, reason: impl Into<String>) -> bool {
        match self.position(date) {
            Ok(pos) => {
                self.entries[pos].reason = reason.into();
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &UnavailableDate> {
        self.entries.iter()
    }

    fn position(&self, date: NaiveDate) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&date, |entry| entry.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_and_contains() {
        let mut dates = UnavailableDates::new();
        assert!(dates.add(d("2025-06-01"), "휴무"));
        assert!(dates.contains(d("2025-06-01")));
        assert!(!dates.contains(d("2025-06-02")));
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_full_noop() {
        let mut dates = UnavailableDates::new();
        assert!(dates.add(d("2025-06-01"), "휴무"));
        assert!(!dates.add(d("2025-06-01"), "다른 사유"));

        assert_eq!(dates.len(), 1);
        let entry = dates.iter().next().unwrap();
        assert_eq!(entry.date, d("2025-06-01"));
        assert_eq!(entry.reason, "휴무");
    }

    #[test]
    fn test_kept_sorted_by_date() {
        let mut dates = UnavailableDates::new();
        dates.add(d("2025-12-25"), "christmas");
        dates.add(d("2025-01-01"), "new year");
        dates.add(d("2025-06-01"), "");

        let order: Vec<NaiveDate> = dates.iter().map(|entry| entry.date).collect();
        assert_eq!(
            order,
            vec![d("2025-01-01"), d("2025-06-01"), d("2025-12-25")]
        );
    }

    #[test]
    fn test_remove() {
        let mut dates = UnavailableDates::new();
        dates.add(d("2025-06-01"), "");
        assert!(dates.remove(d("2025-06-01")));
        assert!(!dates.remove(d("2025-06-01")));
        assert!(dates.is_empty());
    }

    #[test]
    fn test_update_reason() {
        let mut dates = UnavailableDates::new();
        dates.add(d("2025-06-01"), "old");

        assert!(dates.update_reason(d("2025-06-01"), "new"));
        assert_eq!(dates.iter().next().unwrap().reason, "new");

        assert!(!dates.update_reason(d("2025-06-02"), "absent"));
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_past_dates_are_accepted() {
        let mut dates = UnavailableDates::new();
        assert!(dates.add(d("1999-01-01"), "long gone"));
    }
}
