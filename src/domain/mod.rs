//! Domain - Content records and their display projections
//!
//! Raw records mirror the content API; view models are what the views render.
//! Projections are pure and may be recomputed at will.

pub mod comment;
pub mod media;
pub mod story;

pub use comment::*;
pub use media::*;
pub use story::*;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamp layouts accepted without an offset; read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Accept ids sent either as JSON strings or numbers
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Treat JSON `null` like an absent field
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any timestamp [`parse_timestamp`] understands; anything else is `None`
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_timestamp(&s),
        _ => None,
    })
}

/// Parse RFC 3339, an offset-less date-time (as UTC) or a bare date (UTC midnight)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_parse_with_or_without_offset() {
        let expected = "2026-03-05T10:00:00Z";
        for value in [
            "2026-03-05T10:00:00Z",
            "2026-03-05T11:00:00+01:00",
            "2026-03-05 10:00:00",
            "2026-03-05T10:00:00",
            " 2026-03-05 10:00:00.000 ",
        ] {
            let parsed = parse_timestamp(value).expect(value);
            assert_eq!(parsed.to_rfc3339_opts(chrono::SecondsFormat::Secs, true), expected, "{value}");
        }

        assert_eq!(
            parse_timestamp("2026-03-05").map(|d| d.to_rfc3339()),
            Some("2026-03-05T00:00:00+00:00".to_string())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
