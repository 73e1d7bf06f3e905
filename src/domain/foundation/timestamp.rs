//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Serialized as Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix epoch milliseconds.
    ///
    /// Returns `None` when the value is outside the representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Returns the timestamp as Unix epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().timestamp_millis();
        let ts = Timestamp::now();
        let after = Utc::now().timestamp_millis();

        assert!(ts.as_millis() >= before);
        assert!(ts.as_millis() <= after);
    }

    #[test]
    fn timestamp_from_millis_roundtrips() {
        // 2024-01-15T00:00:00.250Z
        let ts = Timestamp::from_millis(1_705_276_800_250).unwrap();
        assert_eq!(ts.as_millis(), 1_705_276_800_250);
    }

    #[test]
    fn timestamp_from_millis_accepts_pre_epoch_values() {
        let ts = Timestamp::from_millis(-86_400_000).unwrap();
        assert_eq!(ts.as_millis(), -86_400_000);
    }

    #[test]
    fn timestamp_from_millis_rejects_out_of_range() {
        assert!(Timestamp::from_millis(i64::MAX).is_none());
        assert!(Timestamp::from_millis(i64::MIN).is_none());
    }

    #[test]
    fn timestamp_ordering_follows_millis() {
        let earlier = Timestamp::from_millis(1_000).unwrap();
        let later = Timestamp::from_millis(2_000).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let ts = Timestamp::from_millis(1_705_276_800_250).unwrap();

        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1705276800250");

        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
