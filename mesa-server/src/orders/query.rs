//! Order reads
//!
//! Stored rows are decoded leniently: a damaged `items` column becomes an
//! empty list and missing columns fall back to neutral values, so one bad
//! row never breaks the whole board.

use super::{OrderError, OrderResult};
use crate::db::repository::order as order_repo;
use shared::models::{DEFAULT_ORDER_TYPE, Order, OrderItem, OrderRow, OrderStatus};
use sqlx::SqlitePool;

/// All orders, newest first
pub async fn list_orders(pool: &SqlitePool) -> OrderResult<Vec<Order>> {
    let rows = order_repo::find_all(pool).await?;
    Ok(rows.into_iter().map(decode_row).collect())
}

/// One order by id
pub async fn get_order(pool: &SqlitePool, id: &str) -> OrderResult<Order> {
    order_repo::find_by_id(pool, id)
        .await?
        .map(decode_row)
        .ok_or_else(|| OrderError::NotFound(id.to_string()))
}

/// Stored row → API view
pub fn decode_row(row: OrderRow) -> Order {
    let items = decode_items(&row.id, row.items.as_deref());
    let created_at = row
        .created_at
        .clone()
        .or_else(|| row.date.clone())
        .unwrap_or_default();
    let date = row.date.unwrap_or_else(|| created_at.clone());

    Order {
        status: OrderStatus::from_stored(row.status.as_deref()),
        table_number: row.table_number.unwrap_or(0),
        name: row.name.unwrap_or_default(),
        order_type: row
            .order_type
            .unwrap_or_else(|| DEFAULT_ORDER_TYPE.to_string()),
        total: row.value.unwrap_or(0.0),
        payment_method: row.payment_method,
        waiter_name: row.waiter_name,
        id: row.id,
        items,
        created_at,
        date,
    }
}

fn decode_items(order_id: &str, text: Option<&str>) -> Vec<OrderItem> {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str(text) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(order_id = %order_id, error = %e, "Stored order items are not valid JSON, returning empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[test]
    fn test_decode_row_defaults() {
        let order = decode_row(OrderRow {
            id: "legacy".into(),
            ..Default::default()
        });
        assert_eq!(order.table_number, 0);
        assert_eq!(order.name, "");
        assert_eq!(order.total, 0.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.order_type, "dine-in");
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_decode_row_tolerates_bad_data() {
        let order = decode_row(OrderRow {
            id: "x".into(),
            status: Some("archived".into()),
            items: Some("[{broken".into()),
            value: Some(12.5),
            date: Some("2026-10-16T10:00:00.000Z".into()),
            ..Default::default()
        });
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.items.is_empty());
        assert_eq!(order.total, 12.5);
        assert_eq!(order.created_at, "2026-10-16T10:00:00.000Z");
    }

    #[test]
    fn test_decode_row_items() {
        let order = decode_row(OrderRow {
            id: "x".into(),
            items: Some(r#"[{"id":"1","name":"Hambúrguer Clássico","price":25.0,"quantity":2}]"#.into()),
            ..Default::default()
        });
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = DbService::in_memory().await.unwrap();
        for (id, created_at) in [
            ("a", "2026-10-16T09:00:00.000Z"),
            ("b", "2026-10-16T11:00:00.000Z"),
            ("c", "2026-10-16T10:00:00.000Z"),
        ] {
            sqlx::query("INSERT INTO orders (id, created_at, items, value) VALUES (?, ?, '[]', 0)")
                .bind(id)
                .bind(created_at)
                .execute(&db.pool)
                .await
                .unwrap();
        }

        let ids: Vec<String> = list_orders(&db.pool)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let db = DbService::in_memory().await.unwrap();
        let result = get_order(&db.pool, "ghost").await;
        assert!(matches!(result, Err(OrderError::NotFound(id)) if id == "ghost"));
    }
}
