use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or bool and returns its display text. Anything else is blank.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| value_to_display(&v)).unwrap_or_default())
}

/// Like `lenient_string`, but an empty result becomes `None`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

/// Integers may arrive as numbers or numeric strings; unparsable values are dropped.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Booleans may arrive as `true`, `"true"`, `1` or `"1"`; anything else is false.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

/// Like `lenient_bool`, but absent, null or unrecognised values stay `None`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Some(Value::String(s)) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// JSON the controller embeds as text. An inline array or object is accepted and
/// re-serialised; any other shape is dropped.
///
/// # Errors
///
/// Only fails when the input is not valid JSON at all.
pub fn lenient_embedded_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(v @ (Value::Array(_) | Value::Object(_))) => Some(v.to_string()),
        _ => None,
    })
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    if secs >= DAY {
        let days = secs / DAY;
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{days} days")
        }
    } else if secs >= HOUR {
        let hours = secs / HOUR;
        if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        }
    } else if secs >= MINUTE {
        let minutes = secs / MINUTE;
        if minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{minutes} minutes")
        }
    } else if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}
