use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// Timestamp type that wraps chrono::DateTime and serializes as the
/// millisecond unix epoch integer the API uses (`lastModified`, `date`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Create a Timestamp from milliseconds since the unix epoch,
    /// or `None` when chrono cannot represent it.
    pub fn try_from_unix_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Timestamp)
    }

    /// Create a Timestamp from milliseconds since the unix epoch.
    ///
    /// Out-of-range values fall back to the epoch.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::try_from_unix_millis(millis).unwrap_or(Timestamp(DateTime::<Utc>::UNIX_EPOCH))
    }

    /// Get the timestamp in milliseconds
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Format as an HTTP date (`Fri, 16 Oct 2026 12:00:00 GMT`)
    pub fn http_date(&self) -> String {
        self.0.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        Timestamp::try_from_unix_millis(millis).ok_or_else(|| {
            D::Error::custom(format!("timestamp {} ms is out of range", millis))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serialization() {
        let ts = Timestamp::from_unix_millis(1_597_242_491_747);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1597242491747");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let ts: Timestamp = serde_json::from_str("1597242491747").unwrap();
        assert_eq!(ts.unix(), 1_597_242_491);
        assert_eq!(ts.unix_millis(), 1_597_242_491_747);
    }

    #[test]
    fn test_http_date() {
        let ts = Timestamp::new(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap());
        assert_eq!(ts.http_date(), "Fri, 16 Oct 2026 12:00:00 GMT");
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let result = serde_json::from_str::<Timestamp>("9223372036854775807");
        assert!(result.is_err());
        assert!(Timestamp::try_from_unix_millis(i64::MAX).is_none());
        assert_eq!(Timestamp::from_unix_millis(i64::MAX).unix_millis(), 0);
    }

    #[test]
    fn test_timestamp_null() {
        let result: Result<Option<Timestamp>, _> = serde_json::from_str("null");
        assert!(result.unwrap().is_none());
    }
}
