//! Deserializers for loosely-typed row fields.
//!
//! Absent, `null` and empty-string values become `None`. Numeric strings are
//! parsed. Anything else is discarded with a warning instead of failing the
//! whole row.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn optional_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| to_f32(&v)))
}

pub fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| to_u32(&v)))
}

pub fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| to_bool(&v)))
}

pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| to_datetime(&v)))
}

pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

pub fn f32_list<'de, D>(deserializer: D) -> Result<Vec<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .iter()
        .filter_map(to_f32)
        .collect())
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                warn!("ignoring non-numeric value {s:?}");
                None
            }
        },
        _ => {
            warn!("ignoring non-numeric value {value}");
            None
        }
    }
}

fn to_f32(value: &Value) -> Option<f32> {
    #[allow(clippy::cast_possible_truncation)]
    let value = to_f64(value).map(|v| v as f32);
    value
}

fn to_u32(value: &Value) -> Option<u32> {
    let v = to_f64(value)?;

    if v < 0.0 || v.fract() != 0.0 || v > f64::from(u32::MAX) {
        warn!("ignoring value {value} that is not a non-negative integer");
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let v = v as u32;
    Some(v)
}

fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "" => None,
            "true" | "t" | "yes" | "1" => Some(true),
            "false" | "f" | "no" | "0" => Some(false),
            _ => {
                warn!("ignoring non-boolean value {s:?}");
                None
            }
        },
        _ => {
            warn!("ignoring non-boolean value {value}");
            None
        }
    }
}

fn to_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match DateTime::parse_from_rfc3339(s.trim()) {
            Ok(t) => Some(t.with_timezone(&Utc)),
            Err(_) => {
                warn!("ignoring invalid timestamp {s:?}");
                None
            }
        },
        Value::Null => None,
        _ => {
            warn!("ignoring invalid timestamp {value}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Row {
        #[serde(default, deserialize_with = "optional_f32")]
        weight: Option<f32>,
        #[serde(default, deserialize_with = "optional_u32")]
        reps: Option<u32>,
        #[serde(default, deserialize_with = "optional_bool")]
        completed: Option<bool>,
        #[serde(default, deserialize_with = "optional_datetime")]
        performed_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "f32_list")]
        loads: Vec<f32>,
    }

    #[rstest]
    #[case::number(json!({"weight": 60.5}), Some(60.5))]
    #[case::numeric_string(json!({"weight": " 60.5 "}), Some(60.5))]
    #[case::null(json!({"weight": null}), None)]
    #[case::empty_string(json!({"weight": ""}), None)]
    #[case::absent(json!({}), None)]
    #[case::non_numeric_string(json!({"weight": "heavy"}), None)]
    #[case::not_a_number(json!({"weight": "NaN"}), None)]
    #[case::boolean(json!({"weight": true}), None)]
    fn test_optional_f32(#[case] row: Value, #[case] expected: Option<f32>) {
        assert_eq!(serde_json::from_value::<Row>(row).unwrap().weight, expected);
    }

    #[rstest]
    #[case::number(json!({"reps": 8}), Some(8))]
    #[case::decimal_string(json!({"reps": "10.0"}), Some(10))]
    #[case::fraction(json!({"reps": 8.5}), None)]
    #[case::negative(json!({"reps": -1}), None)]
    #[case::empty_string(json!({"reps": ""}), None)]
    #[case::non_numeric_string(json!({"reps": "AMRAP"}), None)]
    fn test_optional_u32(#[case] row: Value, #[case] expected: Option<u32>) {
        assert_eq!(serde_json::from_value::<Row>(row).unwrap().reps, expected);
    }

    #[rstest]
    #[case(json!({"completed": true}), Some(true))]
    #[case(json!({"completed": 0}), Some(false))]
    #[case(json!({"completed": "yes"}), Some(true))]
    #[case(json!({"completed": "FALSE"}), Some(false))]
    #[case(json!({"completed": "maybe"}), None)]
    #[case(json!({"completed": null}), None)]
    fn test_optional_bool(#[case] row: Value, #[case] expected: Option<bool>) {
        assert_eq!(
            serde_json::from_value::<Row>(row).unwrap().completed,
            expected
        );
    }

    #[rstest]
    #[case(
        json!({"performed_at": "2024-03-04T18:30:00Z"}),
        Some(Utc.with_ymd_and_hms(2024, 3, 4, 18, 30, 0).unwrap())
    )]
    #[case(
        json!({"performed_at": "2024-03-04T20:30:00+02:00"}),
        Some(Utc.with_ymd_and_hms(2024, 3, 4, 18, 30, 0).unwrap())
    )]
    #[case(json!({"performed_at": "yesterday"}), None)]
    #[case(json!({"performed_at": ""}), None)]
    fn test_optional_datetime(#[case] row: Value, #[case] expected: Option<DateTime<Utc>>) {
        assert_eq!(
            serde_json::from_value::<Row>(row).unwrap().performed_at,
            expected
        );
    }

    #[test]
    fn test_f32_list() {
        assert_eq!(
            serde_json::from_value::<Row>(json!({"loads": [10, "12.5", "", null, "x"]}))
                .unwrap()
                .loads,
            vec![10.0, 12.5]
        );
        assert_eq!(
            serde_json::from_value::<Row>(json!({"loads": null}))
                .unwrap()
                .loads,
            Vec::<f32>::new()
        );
    }
}
