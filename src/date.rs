use chrono::NaiveTime;
use std::cmp::Ordering;

pub static TIME_FORMAT: &str = "%H:%M:%S";
static NULL: &str = "null";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{0}")]
    ChronoError(chrono::format::ParseError),
}

/// Parses a bare `HH:MM:SS` time of day.
///
/// Empty input and the literal `null` are not errors, they mean the time is
/// unknown.
pub fn parse_time_from_str(time: &str) -> Result<Option<NaiveTime>, ParseError> {
    if time.is_empty() || time == NULL {
        return Ok(None);
    }
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map(Some)
        .map_err(ParseError::ChronoError)
}

/// Orders known times chronologically, unknown ones after all of them.
pub fn cmp_times(a: &Option<NaiveTime>, b: &Option<NaiveTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn format_time(time: &Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Serde hooks for `#[serde(with = "date::naive_time")]` fields.
pub mod naive_time {
    use super::{parse_time_from_str, TIME_FORMAT};
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_str(&time.format(TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_time_from_str(&s).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
