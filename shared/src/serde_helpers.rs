//! Serde helpers for partial-update payloads
//!
//! PATCH-style bodies need three states per field: absent, explicit `null`,
//! and a value. `Option<Option<T>>` models that when paired with
//! `#[serde(default, deserialize_with = "double_option")]`:
//!
//! | JSON | Rust |
//! |------|------|
//! | field missing | `None` |
//! | `null` | `Some(None)` |
//! | value | `Some(Some(v))` |

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a present field as `Some(..)`, keeping `null` as `Some(None)`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize any present JSON value (including `null`) as `Some(value)`
pub fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Deserialize f64 that treats null as zero
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|opt| opt.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        waiter_name: Option<Option<String>>,
        #[serde(default, deserialize_with = "present_value")]
        items: Option<Value>,
        #[serde(default, deserialize_with = "f64_or_zero")]
        amount: f64,
    }

    #[test]
    fn test_absent_fields() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.waiter_name, None);
        assert_eq!(patch.items, None);
        assert_eq!(patch.amount, 0.0);
    }

    #[test]
    fn test_null_fields() {
        let patch: Patch =
            serde_json::from_str(r#"{"waiter_name":null,"items":null,"amount":null}"#).unwrap();
        assert_eq!(patch.waiter_name, Some(None));
        assert_eq!(patch.items, Some(Value::Null));
        assert_eq!(patch.amount, 0.0);
    }

    #[test]
    fn test_value_fields() {
        let patch: Patch =
            serde_json::from_str(r#"{"waiter_name":"Ana","items":[],"amount":2.5}"#).unwrap();
        assert_eq!(patch.waiter_name, Some(Some("Ana".to_string())));
        assert_eq!(patch.items, Some(serde_json::json!([])));
        assert_eq!(patch.amount, 2.5);
    }
}
