//! Numeric coercion at the JSON boundary.
//!
//! Clients and the chat model are sloppy about number typing: nutrition
//! values arrive as numbers, numeric strings, or garbage. Two policies
//! exist. `strict_*` accepts a number or a numeric string and fails the
//! whole deserialization otherwise (used for meal-plan totals, which must
//! be persisted as real numbers). `lenient_*` maps anything unusable to 0
//! (used for per-food nutrition, where the aggregator expects zeros).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::nutrition::Nutrition;

/// Number-or-numeric-string to f64. NaN and infinities are rejected.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

pub fn strict_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_f64(&value).ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {value}")))
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or(0.0))
}

#[derive(Deserialize)]
struct StrictNutrition {
    #[serde(deserialize_with = "strict_f64")]
    calories: f64,
    #[serde(deserialize_with = "strict_f64")]
    protein: f64,
    #[serde(deserialize_with = "strict_f64")]
    carbs: f64,
    #[serde(deserialize_with = "strict_f64")]
    fat: f64,
}

impl From<StrictNutrition> for Nutrition {
    fn from(n: StrictNutrition) -> Self {
        Nutrition {
            calories: n.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
        }
    }
}

/// Strictly-coerced optional nutrition block. `null` and absent both
/// deserialize to `None`; a present block with a non-numeric field is an
/// error (fail fast before persistence).
pub fn opt_strict_nutrition<'de, D>(deserializer: D) -> Result<Option<Nutrition>, D::Error>
where
    D: Deserializer<'de>,
{
    let block = Option::<StrictNutrition>::deserialize(deserializer)?;
    Ok(block.map(Nutrition::from))
}

/// Leniently-coerced nutrition block: any missing or malformed field is 0,
/// and a value that is not an object at all is the zero vector.
pub fn lenient_nutrition<'de, D>(deserializer: D) -> Result<Nutrition, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(nutrition_from_value(&value))
}

/// Lenient coercion over an already-parsed JSON value. Shared with the
/// storage restore path, where totals blocks written by older clients may
/// carry string-typed numbers.
pub fn nutrition_from_value(value: &Value) -> Nutrition {
    let field = |name: &str| value.get(name).and_then(as_f64).unwrap_or(0.0);
    Nutrition {
        calories: field("calories"),
        protein: field("protein"),
        carbs: field("carbs"),
        fat: field("fat"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Strict {
        #[serde(deserialize_with = "strict_f64")]
        value: f64,
    }

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: f64,
    }

    #[test]
    fn strict_accepts_numbers_and_numeric_strings() {
        let s: Strict = serde_json::from_value(json!({"value": 500})).unwrap();
        assert_eq!(s.value, 500.0);
        let s: Strict = serde_json::from_value(json!({"value": "42.5"})).unwrap();
        assert_eq!(s.value, 42.5);
    }

    #[test]
    fn strict_rejects_garbage_and_nan() {
        assert!(serde_json::from_value::<Strict>(json!({"value": "abc"})).is_err());
        assert!(serde_json::from_value::<Strict>(json!({"value": "NaN"})).is_err());
        assert!(serde_json::from_value::<Strict>(json!({"value": null})).is_err());
        assert!(serde_json::from_value::<Strict>(json!({"value": [1]})).is_err());
    }

    #[test]
    fn lenient_zeroes_garbage() {
        let l: Lenient = serde_json::from_value(json!({"value": "abc"})).unwrap();
        assert_eq!(l.value, 0.0);
        let l: Lenient = serde_json::from_value(json!({"value": null})).unwrap();
        assert_eq!(l.value, 0.0);
        let l: Lenient = serde_json::from_value(json!({})).unwrap();
        assert_eq!(l.value, 0.0);
    }

    #[test]
    fn nutrition_from_value_fills_missing_fields() {
        let n = nutrition_from_value(&json!({"calories": "500", "protein": 40}));
        assert_eq!(n.calories, 500.0);
        assert_eq!(n.protein, 40.0);
        assert_eq!(n.carbs, 0.0);
        assert_eq!(n.fat, 0.0);
    }

    #[test]
    fn opt_strict_fails_fast_on_bad_block() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_strict_nutrition")]
            totals: Option<Nutrition>,
        }
        let w: Wrapper = serde_json::from_value(json!({})).unwrap();
        assert!(w.totals.is_none());
        let w: Wrapper = serde_json::from_value(json!({"totals": null})).unwrap();
        assert!(w.totals.is_none());
        let err = serde_json::from_value::<Wrapper>(json!({
            "totals": {"calories": "lots", "protein": 1, "carbs": 2, "fat": 3}
        }));
        assert!(err.is_err());
    }
}
