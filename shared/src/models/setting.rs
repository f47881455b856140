//! Settings Model
//!
//! Settings are a flat `key → JSON value` map, stored as JSON text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw settings row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SettingRow {
    pub key: String,
    pub value: Option<String>,
}

impl SettingRow {
    /// Decode the stored text; non-JSON text is returned as a plain string
    pub fn decoded_value(&self) -> Value {
        match &self.value {
            None => Value::Null,
            Some(text) => {
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
            }
        }
    }
}

/// `{ "value": ... }` body of `/api/settings/{key}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingValue {
    #[serde(default)]
    pub value: Value,
}

/// `{ "key": ..., "value": ... }` echo after a write
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingEntry {
    pub key: String,
    pub value: Value,
}

/// Setting holding the default printer name
pub const SELECTED_PRINTER_KEY: &str = "selectedPrinter";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_value() {
        let row = SettingRow {
            key: "taxRate".into(),
            value: Some("0.1".into()),
        };
        assert_eq!(row.decoded_value(), serde_json::json!(0.1));

        let row = SettingRow {
            key: "restaurantName".into(),
            value: Some("Bistro".into()),
        };
        assert_eq!(row.decoded_value(), serde_json::json!("Bistro"));

        let row = SettingRow {
            key: "empty".into(),
            value: None,
        };
        assert_eq!(row.decoded_value(), Value::Null);
    }
}
