//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date, discarding the time-of-day component.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_datetime_preserves_value() {
        let dt = Utc::now();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_datetime(), &dt);
    }

    #[test]
    fn timestamp_ordering_follows_time() {
        let ts1 = Timestamp::now();
        sleep(Duration::from_millis(10));
        let ts2 = Timestamp::now();

        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }

    #[test]
    fn timestamp_date_discards_time_of_day() {
        let morning = DateTime::parse_from_rfc3339("2024-01-15T00:05:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let night = DateTime::parse_from_rfc3339("2024-01-15T23:55:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(
            Timestamp::from_datetime(morning).date(),
            Timestamp::from_datetime(night).date()
        );
    }

    #[test]
    fn timestamp_minus_days_moves_back() {
        let ts = Timestamp::now();
        let earlier = ts.minus_days(8);
        assert!(earlier < ts);
        assert_eq!((ts.date() - earlier.date()).num_days(), 8);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ts = Timestamp::from_datetime(dt);

        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
