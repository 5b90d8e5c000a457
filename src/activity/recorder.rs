//! Per-day request counters

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};

/// Sink for handled-request events, one count per call.
pub trait ActivityRecorder: Send + Sync {
    /// Count one handled request on `day`.
    fn record(&self, day: NaiveDate);

    /// Full day → count history.
    fn snapshot(&self) -> BTreeMap<NaiveDate, u64>;

    /// Count one handled request today (local time).
    fn record_today(&self) {
        self.record(Local::now().date_naive());
    }
}

/// In-memory activity recorder.
#[derive(Debug, Default)]
pub struct MemoryActivityRecorder {
    days: Mutex<BTreeMap<NaiveDate, u64>>,
}

impl MemoryActivityRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a single day, 0 if never recorded
    pub fn count(&self, day: NaiveDate) -> u64 {
        self.days
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&day)
            .copied()
            .unwrap_or(0)
    }

    /// Sum over all days
    pub fn total(&self) -> u64 {
        self.days
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }
}

impl ActivityRecorder for MemoryActivityRecorder {
    fn record(&self, day: NaiveDate) {
        let mut days = self.days.lock().unwrap_or_else(PoisonError::into_inner);
        *days.entry(day).or_insert(0) += 1;
    }

    fn snapshot(&self) -> BTreeMap<NaiveDate, u64> {
        self.days
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_accumulates_per_day() {
        let recorder = MemoryActivityRecorder::new();
        recorder.record(day(2024, 3, 1));
        recorder.record(day(2024, 3, 1));
        recorder.record(day(2024, 3, 2));

        assert_eq!(recorder.count(day(2024, 3, 1)), 2);
        assert_eq!(recorder.count(day(2024, 3, 2)), 1);
        assert_eq!(recorder.count(day(2024, 3, 3)), 0);
        assert_eq!(recorder.total(), 3);
    }

    #[test]
    fn test_snapshot_is_ordered_by_day() {
        let recorder = MemoryActivityRecorder::new();
        recorder.record(day(2024, 5, 9));
        recorder.record(day(2023, 1, 1));

        let days: Vec<NaiveDate> = recorder.snapshot().into_keys().collect();
        assert_eq!(days, vec![day(2023, 1, 1), day(2024, 5, 9)]);
    }

    #[test]
    fn test_record_today() {
        let recorder = MemoryActivityRecorder::new();
        recorder.record_today();
        assert_eq!(recorder.total(), 1);
    }
}
