//! Order Model
//!
//! Orders keep a denormalized copy of their items (JSON text in `orders.items`)
//! and the order total in the `value` column.

use crate::serde_helpers::{double_option, present_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// `pending → preparing → ready → completed | cancelled`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Lenient decode for values read back from storage: unknown → pending
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderStatus(pub String);

impl fmt::Display for UnknownOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.0)
    }
}

impl std::error::Error for UnknownOrderStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Line item embedded in an order (price copied from the menu)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    pub quantity: i64,
}

/// Raw `orders` row; every column except `id` may be NULL in older databases
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderRow {
    pub id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub order_type: Option<String>,
    /// Order total
    pub value: Option<f64>,
    /// JSON-encoded `OrderItem[]`
    pub items: Option<String>,
    pub created_at: Option<String>,
    pub table_number: Option<i64>,
    pub payment_method: Option<String>,
    pub waiter_name: Option<String>,
}

/// Order as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub table_number: i64,
    pub name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(rename = "type")]
    pub order_type: String,
    pub total: f64,
    pub created_at: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter_name: Option<String>,
}

/// Create order payload
///
/// `table_number`, `items` and `status` stay loosely typed so the lifecycle
/// manager can report domain errors instead of a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub id: Option<String>,
    pub table_number: Option<Value>,
    pub items: Option<Value>,
    pub status: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub payment_method: Option<String>,
    pub waiter_name: Option<String>,
}

/// Partial order update (`PUT /api/orders/{id}`)
///
/// Every field distinguishes absent (`None`) from `null` (`Some(None)`)
/// from a value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_value")]
    pub items: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_method: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub waiter_name: Option<Option<String>>,
}

impl OrderUpdate {
    /// No field present
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.items.is_none()
            && self.payment_method.is_none()
            && self.name.is_none()
            && self.waiter_name.is_none()
    }

    /// Waiter asserted by the request (present and non-empty)
    pub fn asserted_waiter(&self) -> Option<&str> {
        self.waiter_name
            .as_ref()
            .and_then(|w| w.as_deref())
            .filter(|w| !w.is_empty())
    }
}

/// Default order type
pub const DEFAULT_ORDER_TYPE: &str = "dine-in";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("ready".parse::<OrderStatus>().unwrap(), OrderStatus::Ready);
        assert!("served".parse::<OrderStatus>().is_err());
        assert!("Ready".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_from_stored() {
        assert_eq!(OrderStatus::from_stored(Some("cancelled")), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_stored(Some("archived")), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_stored(None), OrderStatus::Pending);
    }

    #[test]
    fn test_order_serializes_type_and_skips_absent() {
        let order = Order {
            id: "1".into(),
            table_number: 5,
            name: "Mesa 5".into(),
            items: vec![],
            status: OrderStatus::Pending,
            order_type: DEFAULT_ORDER_TYPE.into(),
            total: 0.0,
            created_at: "2026-01-01T00:00:00.000Z".into(),
            date: "2026-01-01T00:00:00.000Z".into(),
            payment_method: None,
            waiter_name: Some("Ana".into()),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "dine-in");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["waiter_name"], "Ana");
        assert!(json.get("payment_method").is_none());
    }

    #[test]
    fn test_update_field_states() {
        let update: OrderUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let update: OrderUpdate =
            serde_json::from_str(r#"{"waiter_name":null,"payment_method":"pix"}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.waiter_name, Some(None));
        assert_eq!(update.asserted_waiter(), None);
        assert_eq!(update.payment_method, Some(Some("pix".into())));

        let update: OrderUpdate = serde_json::from_str(r#"{"waiter_name":""}"#).unwrap();
        assert_eq!(update.asserted_waiter(), None);

        let update: OrderUpdate = serde_json::from_str(r#"{"waiter_name":"Bruno"}"#).unwrap();
        assert_eq!(update.asserted_waiter(), Some("Bruno"));
    }
}
