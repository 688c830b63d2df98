//! Lenient field decoders for payloads produced by SQL-backed JSON APIs.
//!
//! Aggregates such as `SUM(amount)` or `COUNT(*)` come back as `null` when no
//! rows match and as decimal strings from drivers that preserve `NUMERIC` /
//! `BIGINT` precision. Both shapes decode to plain numbers here.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

/// Decodes `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Monetary amount: number, numeric string or `null` (zero).
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Numeric::Number(value)) => Ok(value),
        Some(Numeric::Text(text)) => parse_amount(&text).map_err(D::Error::custom),
    }
}

/// Non-negative whole count: number, numeric string or `null` (zero).
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Numeric>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(Numeric::Number(value)) => value,
        Some(Numeric::Text(text)) => parse_amount(&text).map_err(D::Error::custom)?,
    };
    whole_count(value).map_err(D::Error::custom)
}

fn parse_amount(text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("invalid numeric value: {:?}", text)),
    }
}

fn whole_count(value: f64) -> Result<u64, String> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(format!("expected a non-negative whole count, got {}", value))
    }
}
