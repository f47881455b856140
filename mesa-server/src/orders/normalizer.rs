//! Order item normalization
//!
//! Turns whatever the client sent as `items` into priced [`OrderItem`]s:
//!
//! 1. accept an array, or a string holding a JSON array; anything else is empty
//! 2. keep entries with a non-empty string `id` and a finite `quantity`
//! 3. floor the quantity and drop lines that end up `<= 0`
//! 4. look up name/price on the menu (unknown ids → `""` / `0`)
//! 5. total = Σ price × quantity, rounded to cents
//!
//! Client-supplied `name`, `price` and `total` are never read.

use super::money;
use super::resolver::PriceResolver;
use super::{OrderError, OrderResult};
use serde_json::Value;
use shared::models::OrderItem;

/// Normalized items and their total
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItems {
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// A candidate line that passed validation, before pricing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanItem {
    pub id: String,
    pub quantity: i64,
}

/// Validate, price and total a raw item list
///
/// `None` (field absent) and `Some(Value::Null)` behave like an empty list.
pub async fn normalize_items<R: PriceResolver>(
    raw: Option<&Value>,
    resolver: &R,
) -> OrderResult<NormalizedItems> {
    let cleaned = raw.map(clean_items).unwrap_or_default();
    if cleaned.is_empty() {
        return Err(OrderError::InvalidItems);
    }

    let ids: Vec<String> = cleaned.iter().map(|item| item.id.clone()).collect();
    let prices = resolver.resolve(&ids).await?;

    let items: Vec<OrderItem> = cleaned
        .into_iter()
        .map(|item| {
            let (name, price) = prices
                .get(&item.id)
                .map(|p| (p.name.clone(), p.price))
                .unwrap_or_default();
            OrderItem {
                id: item.id,
                name,
                price,
                quantity: item.quantity,
            }
        })
        .collect();

    let total = money::sum_lines(items.iter().map(|item| (item.price, item.quantity)))
        .ok_or(OrderError::InvalidItems)?;

    Ok(NormalizedItems {
        items,
        total: money::to_f64(total),
    })
}

/// Steps 1-3: parse and filter candidate lines, keeping their order
pub fn clean_items(raw: &Value) -> Vec<CleanItem> {
    let parsed;
    let candidates: &[Value] = match raw {
        Value::Array(entries) => entries,
        Value::String(text) => {
            parsed = serde_json::from_str::<Value>(text).unwrap_or(Value::Null);
            match &parsed {
                Value::Array(entries) => entries,
                _ => &[],
            }
        }
        _ => &[],
    };

    candidates.iter().filter_map(clean_item).collect()
}

fn clean_item(candidate: &Value) -> Option<CleanItem> {
    let id = candidate.get("id")?.as_str()?;
    if id.is_empty() {
        return None;
    }

    let quantity = coerce_number(candidate.get("quantity").unwrap_or(&Value::Null))?.floor();
    if quantity <= 0.0 {
        return None;
    }

    Some(CleanItem {
        id: id.to_string(),
        // Saturates above i64::MAX; the total then overflows and is rejected
        quantity: quantity as i64,
    })
}

/// Loose numeric coercion for client-supplied quantities
///
/// numbers as-is; strings trimmed and parsed (blank → 0); booleans → 1/0;
/// null → 0. Returns `None` for anything that is not a finite number.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::resolver::MenuPrice;
    use serde_json::json;
    use std::collections::HashMap;

    fn menu() -> HashMap<String, MenuPrice> {
        [
            ("1", "Hambúrguer Clássico", 25.0),
            ("2", "Batata Frita Rústica", 18.0),
            ("3", "Refrigerante Artesanal", 8.0),
            ("9", "Água", 0.1),
        ]
        .into_iter()
        .map(|(id, name, price)| {
            (
                id.to_string(),
                MenuPrice {
                    name: name.to_string(),
                    price,
                },
            )
        })
        .collect()
    }

    #[tokio::test]
    async fn test_round_trip_single_item() {
        let raw = json!([{ "id": "1", "quantity": 2 }]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(
            result.items,
            vec![OrderItem {
                id: "1".into(),
                name: "Hambúrguer Clássico".into(),
                price: 25.0,
                quantity: 2,
            }]
        );
        assert_eq!(result.total, 50.0);
    }

    #[tokio::test]
    async fn test_client_price_and_name_are_ignored() {
        let raw = json!([
            { "id": "1", "quantity": 1, "price": 0.01, "name": "Free burger" },
            { "id": "2", "quantity": "2", "price": 0 }
        ]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.items[0].name, "Hambúrguer Clássico");
        assert_eq!(result.items[0].price, 25.0);
        assert_eq!(result.items[1].price, 18.0);
        assert_eq!(result.total, 61.0);
    }

    #[tokio::test]
    async fn test_quantity_is_floored() {
        let raw = json!([{ "id": "3", "quantity": 2.9 }, { "id": "2", "quantity": "1.5" }]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.items[0].quantity, 2);
        assert_eq!(result.items[1].quantity, 1);
        assert_eq!(result.total, 34.0);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_kept_at_zero() {
        let raw = json!([{ "id": "404", "quantity": 3 }, { "id": "1", "quantity": 1 }]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.items[0].name, "");
        assert_eq!(result.items[0].price, 0.0);
        assert_eq!(result.items[0].quantity, 3);
        assert_eq!(result.total, 25.0);
    }

    #[tokio::test]
    async fn test_string_encoded_array() {
        let raw = json!(r#"[{"id":"2","quantity":3}]"#);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.total, 54.0);
    }

    #[tokio::test]
    async fn test_cents_are_exact() {
        let raw = json!([{ "id": "9", "quantity": 3 }]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.total, 0.3);
    }

    #[tokio::test]
    async fn test_invalid_inputs_are_rejected() {
        let cases = [
            None,
            Some(json!(null)),
            Some(json!([])),
            Some(json!("not json")),
            Some(json!("{\"id\":\"1\",\"quantity\":1}")),
            Some(json!({ "id": "1", "quantity": 1 })),
            Some(json!(42)),
            Some(json!([{ "id": "1", "quantity": 0 }])),
            Some(json!([{ "id": "1", "quantity": -2 }])),
            Some(json!([{ "id": "1", "quantity": 0.5 }])),
            Some(json!([{ "id": "1", "quantity": "abc" }])),
            Some(json!([{ "id": "1" }])),
            Some(json!([{ "id": 1, "quantity": 1 }])),
            Some(json!([{ "id": "", "quantity": 1 }])),
            Some(json!([{ "quantity": 1 }])),
            Some(json!(["1", 2, null])),
        ];
        for raw in cases {
            let result = normalize_items(raw.as_ref(), &menu()).await;
            assert!(
                matches!(result, Err(OrderError::InvalidItems)),
                "expected InvalidItems for {:?}",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_bad_lines_are_dropped_not_fatal() {
        let raw = json!([
            { "id": "1", "quantity": 0 },
            { "id": 7, "quantity": 1 },
            { "id": "2", "quantity": 1 }
        ]);
        let result = normalize_items(Some(&raw), &menu()).await.unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].id, "2");
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected() {
        let mut prices = menu();
        prices.insert(
            "gold".into(),
            MenuPrice {
                name: "Gold".into(),
                price: 1e20,
            },
        );
        let raw = json!([{ "id": "gold", "quantity": 1e30 }]);
        let result = normalize_items(Some(&raw), &prices).await;
        assert!(matches!(result, Err(OrderError::InvalidItems)));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(3)), Some(3.0));
        assert_eq!(coerce_number(&json!(2.5)), Some(2.5));
        assert_eq!(coerce_number(&json!(" 4 ")), Some(4.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!("   ")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!(null)), Some(0.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!([1])), None);
        assert_eq!(coerce_number(&json!({})), None);
    }

    #[test]
    fn test_clean_items_keeps_order_and_duplicates() {
        let raw = json!([
            { "id": "2", "quantity": 1 },
            { "id": "1", "quantity": 2 },
            { "id": "2", "quantity": 3 }
        ]);
        let cleaned = clean_items(&raw);
        assert_eq!(
            cleaned,
            vec![
                CleanItem { id: "2".into(), quantity: 1 },
                CleanItem { id: "1".into(), quantity: 2 },
                CleanItem { id: "2".into(), quantity: 3 },
            ]
        );
    }
}
