//! Primitive types shared by every lexoffice resource.
//!
//! lexoffice sends and expects timestamps with millisecond precision and an
//! explicit UTC offset, e.g. `2023-02-21T00:00:00.000+01:00`. chrono's
//! default serde impl drops trailing zero fractions, so every timestamp
//! field in this crate goes through [`timestamp`] instead.

use chrono::{DateTime, FixedOffset};

/// A point in time as lexoffice represents it.
pub type Timestamp = DateTime<FixedOffset>;

/// Wire format for [`Timestamp`] values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Serde codec for [`Timestamp`] fields.
///
/// ```
/// use lexoffice_rs::models::{timestamp, Timestamp};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Wrapper {
///     #[serde(with = "timestamp")]
///     at: Timestamp,
/// }
///
/// let w: Wrapper = serde_json::from_str(r#"{"at":"2023-02-21T00:00:00+01:00"}"#).unwrap();
/// assert_eq!(
///     serde_json::to_string(&w).unwrap(),
///     r#"{"at":"2023-02-21T00:00:00.000+01:00"}"#
/// );
/// ```
pub mod timestamp {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{Timestamp, TIMESTAMP_FORMAT};

    /// Serialize with millisecond precision.
    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    /// Parse any RFC 3339 timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse_from_rfc3339(&raw).map_err(de::Error::custom)
    }

    /// Codec for `Option<Timestamp>` fields.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        use super::super::Timestamp;

        /// Serialize `Some` with millisecond precision, `None` as null.
        pub fn serialize<S: Serializer>(
            value: &Option<Timestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Accept a timestamp, null, or a missing field.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Timestamp>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|s| Timestamp::parse_from_rfc3339(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "timestamp")]
        at: Timestamp,
        #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
        maybe: Option<Timestamp>,
    }

    #[test]
    fn test_serialize_millis_and_offset() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let at = offset.with_ymd_and_hms(2023, 2, 21, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&Sample { at, maybe: None }).unwrap();
        assert_eq!(json, r#"{"at":"2023-02-21T00:00:00.000+01:00"}"#);
    }

    #[test]
    fn test_utc_uses_numeric_offset() {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap();
        let json = serde_json::to_string(&Sample { at, maybe: Some(at) }).unwrap();
        assert!(json.contains("2024-12-31T23:59:59.000+00:00"));
    }

    #[test]
    fn test_deserialize_variants() {
        let s: Sample =
            serde_json::from_str(r#"{"at":"2023-02-21T10:15:30.125Z","maybe":null}"#).unwrap();
        assert_eq!(s.at.timestamp_subsec_millis(), 125);
        assert_eq!(s.maybe, None);

        let s: Sample = serde_json::from_str(r#"{"at":"2023-02-21T10:15:30+02:00"}"#).unwrap();
        assert_eq!(s.at.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn test_reject_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"at":"yesterday"}"#).is_err());
    }
}
