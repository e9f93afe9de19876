//! Serde helpers for the API's loosely typed JSON.
//!
//! The remote sends the same field as a number, a numeric string or an empty
//! string depending on the endpoint and the account's age. These helpers
//! accept all of those and fall back to `None` instead of failing the whole
//! response.

use crate::durations::UptimeDurations;
use crate::status_page::StatusPageMonitors;
use crate::time::StartTime;

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const LIST_SEPARATOR: &str = "-";
pub const RANGE_SEPARATOR: &str = "_";

/// Join values the way the API expects list parameters: `1-2-3`.
pub fn hyphen_join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

pub(crate) fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn epoch(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

fn optional<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

pub(crate) fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    lenient_i64(&value)
        .ok_or_else(|| D::Error::custom(format!("expected numeric id, found {value}")))
}

pub(crate) fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.as_ref().and_then(lenient_i64))
}

pub(crate) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64(deserializer)?.and_then(|number| u32::try_from(number).ok()))
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.as_ref().and_then(lenient_f64))
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Integer-coded enum; empty strings and garbage become `None`.
pub(crate) fn opt_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64>,
{
    Ok(opt_i64(deserializer)?.map(T::from))
}

/// Unix seconds to an absolute UTC instant.
pub(crate) fn opt_epoch<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_i64(deserializer)?.and_then(epoch))
}

/// `"99.980-100.000"` into `[99.98, 100.0]`.
pub(crate) fn opt_ratio_list<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        Some(Value::String(text)) if !text.trim().is_empty() => text
            .split(LIST_SEPARATOR)
            .map(|part| part.trim().parse::<f64>().ok())
            .collect(),
        Some(Value::Number(number)) => number.as_f64().map(|ratio| vec![ratio]),
        Some(Value::Array(items)) => items.iter().map(lenient_f64).collect(),
        _ => None,
    })
}

pub(crate) fn opt_durations<'de, D>(deserializer: D) -> Result<Option<UptimeDurations>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        Some(Value::String(text)) => text.parse().ok(),
        _ => None,
    })
}

pub(crate) fn opt_start_time<'de, D>(deserializer: D) -> Result<Option<StartTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        Some(Value::Number(number)) => number.as_i64().and_then(epoch).map(StartTime::Epoch),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else if let Ok(seconds) = text.parse::<i64>() {
                epoch(seconds).map(StartTime::Epoch)
            } else {
                Some(StartTime::TimeOfDay(text.to_string()))
            }
        }
        _ => None,
    })
}

/// `0` (or `"0"`) means every monitor; otherwise an array or hyphen list of ids.
pub(crate) fn opt_status_page_monitors<'de, D>(
    deserializer: D,
) -> Result<Option<StatusPageMonitors>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        Some(Value::Number(number)) => match number.as_i64() {
            Some(0) => Some(StatusPageMonitors::All),
            Some(id) => Some(StatusPageMonitors::Only(vec![id])),
            None => None,
        },
        Some(Value::String(text)) => match text.trim() {
            "" => None,
            "0" => Some(StatusPageMonitors::All),
            list => list
                .split(LIST_SEPARATOR)
                .map(|part| part.trim().parse::<i64>().ok())
                .collect::<Option<Vec<_>>>()
                .map(StatusPageMonitors::Only),
        },
        Some(Value::Array(items)) => Some(StatusPageMonitors::Only(
            items.iter().filter_map(lenient_i64).collect(),
        )),
        _ => None,
    })
}

/// Header objects; an empty JSON array stands in for an empty object.
pub(crate) fn opt_header_map<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match optional(deserializer)? {
        Some(Value::Object(entries)) => Some(
            entries
                .into_iter()
                .map(|(name, value)| match value {
                    Value::String(text) => (name, text),
                    other => (name, other.to_string()),
                })
                .collect(),
        ),
        Some(Value::Array(items)) if items.is_empty() => Some(BTreeMap::new()),
        _ => None,
    })
}
