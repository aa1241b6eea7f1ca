//! Lenient deserializers for fields the backend sends in varying shapes

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number, numeric string or null; anything else becomes 0
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).unwrap_or(0.0))
}

/// Like [`lenient_f64`] but keeps "absent" apart from zero
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value))
}

/// Whole-number variant of [`lenient_f64`]; fractions are truncated
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value).unwrap_or(0))
}

pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value))
}

/// String, number or null; null becomes empty
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value).unwrap_or_default())
}

/// `null` treated like a missing field
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numeric view of a JSON value
pub fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => number_of(value).map(|f| f.trunc() as i64),
    }
}

/// Text view of a JSON value; numbers are rendered, null and containers are not
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        total: f64,
        #[serde(default, deserialize_with = "lenient_opt_f64")]
        avg: Option<f64>,
    }

    #[test]
    fn test_lenient_numbers() {
        let row: Row = serde_json::from_value(json!({"total": "12.5", "avg": null})).unwrap();
        assert_eq!(row.total, 12.5);
        assert_eq!(row.avg, None);
        let row: Row = serde_json::from_value(json!({"total": null, "avg": 3})).unwrap();
        assert_eq!(row.total, 0.0);
        assert_eq!(row.avg, Some(3.0));
        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.total, 0.0);
    }

    #[derive(Deserialize)]
    struct Counted {
        #[serde(default, deserialize_with = "lenient_i64")]
        quantity: i64,
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        after: Option<i64>,
        #[serde(default, deserialize_with = "lenient_string")]
        number: String,
        #[serde(default, deserialize_with = "null_default")]
        deleted: bool,
    }

    #[test]
    fn test_lenient_integers_and_text() {
        let row: Counted =
            serde_json::from_value(json!({"quantity": null, "after": "7", "number": 120, "deleted": null}))
                .unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(row.after, Some(7));
        assert_eq!(row.number, "120");
        assert!(!row.deleted);

        let row: Counted =
            serde_json::from_value(json!({"quantity": "4", "after": 2.0, "number": null})).unwrap();
        assert_eq!(row.quantity, 4);
        assert_eq!(row.after, Some(2));
        assert_eq!(row.number, "");
    }
}
