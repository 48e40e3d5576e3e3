//! Serde adapter for record timestamps
//!
//! Timestamps are written as RFC 3339 with the local UTC offset and
//! whole seconds, e.g. `2024-05-01T13:45:10+02:00`.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Days, Local, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a timestamp the way records serialize it
#[must_use]
pub fn format(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse an RFC 3339 timestamp into local time
///
/// # Errors
/// Returns an error if the text is not valid RFC 3339.
pub fn parse(text: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|t| t.with_timezone(&Local))
}

/// Convert a filesystem time to local time
///
/// Returns `None` when the instant is outside the representable range,
/// which some filesystems allow for modification times.
#[must_use]
pub fn from_system_time(time: SystemTime) -> Option<DateTime<Local>> {
    let utc = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => {
            let secs = i64::try_from(after.as_secs()).ok()?;
            DateTime::<Utc>::from_timestamp(secs, after.subsec_nanos())?
        }
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => DateTime::<Utc>::from_timestamp(secs.checked_neg()?, 0)?,
                nanos => DateTime::<Utc>::from_timestamp(
                    secs.checked_neg()?.checked_sub(1)?,
                    1_000_000_000 - nanos,
                )?,
            }
        }
    };

    // Leave room for the local offset at either end of the range
    if utc.checked_add_days(Days::new(1)).is_none() || utc.checked_sub_days(Days::new(1)).is_none() {
        return None;
    }
    Some(utc.with_timezone(&Local))
}

pub fn serialize<S>(time: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).map_err(serde::de::Error::custom)
}
