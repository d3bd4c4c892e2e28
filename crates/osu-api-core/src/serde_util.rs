//! Deserialization helpers for the old API generation, which encodes every
//! scalar as a JSON string.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::mods::Mods;

/// Accept either a native JSON value or its decimal-string form.
pub(crate) fn from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Native(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Native(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

/// Like [`from_str`], but `null` maps to `None`.
pub(crate) fn from_str_opt<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Native(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Native(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A mods bitmask from a number or numeric string.
pub(crate) fn mods<'de, D>(deserializer: D) -> Result<Mods, D::Error>
where
    D: Deserializer<'de>,
{
    let bits: u64 = from_str(deserializer)?;
    Ok(Mods::from_bits(bits))
}

/// Datetimes in the old wire format, e.g. `"2007-10-06 17:46:31"` (UTC).
pub(crate) mod v1_date {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub(crate) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(text) => NaiveDateTime::parse_from_str(&text, FORMAT)
                .map(|naive| Some(naive.and_utc()))
                .map_err(serde::de::Error::custom),
        }
    }
}
