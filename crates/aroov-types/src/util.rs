//! Lenient deserializers for API fields.
//!
//! The backend passes database values through untouched: numeric columns can
//! arrive as JSON numbers or as strings, and list columns as arrays or as a
//! comma-separated (sometimes bracketed) string.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<serde_json::Value>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(i64),
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) if n.is_finite() => Some(n),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) if n.fract() == 0.0 => Some(n as i64),
        Some(NumberOrText::Text(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_i64(deserializer)?
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<FlagValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        FlagValue::Bool(b) => b,
        FlagValue::Number(n) => n != 0,
    }))
}

pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub(crate) fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<ListOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(ListOrText::List(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(ListOrText::Text(text)) => split_tag_list(&text),
    })
}

/// Split `a,b`, `["a","b"]` or `[a, b]` into trimmed, non-empty entries.
pub fn split_tag_list(text: &str) -> Vec<String> {
    text.replace(['[', ']', '"'], "")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
