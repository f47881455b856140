//! Order Repository
//!
//! Orders are read back as raw [`OrderRow`]s; decoding into the API view
//! lives in `orders::query`.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderRow, OrderStatus};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, name, date, status, type, value, items, created_at, table_number, payment_method, waiter_name";

/// Column changes for a partial update; `None` leaves the column untouched
#[derive(Debug, Default, Clone)]
pub struct OrderChanges {
    pub status: Option<OrderStatus>,
    /// Normalized items JSON together with their total
    pub items: Option<(String, f64)>,
    pub payment_method: Option<Option<String>>,
    pub name: Option<Option<String>>,
    pub waiter_name: Option<Option<String>>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.items.is_none()
            && self.payment_method.is_none()
            && self.name.is_none()
            && self.waiter_name.is_none()
    }
}

/// Newest first; rowid breaks ties between orders created in the same millisecond
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {COLUMNS} FROM orders ORDER BY created_at DESC, rowid DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<OrderRow>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, order: &Order) -> RepoResult<()> {
    let items = serde_json::to_string(&order.items)
        .map_err(|e| RepoError::Database(format!("Failed to encode order items: {e}")))?;

    sqlx::query(&format!(
        "INSERT INTO orders ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(&order.id)
    .bind(&order.name)
    .bind(&order.date)
    .bind(order.status.as_str())
    .bind(&order.order_type)
    .bind(order.total)
    .bind(items)
    .bind(&order.created_at)
    .bind(order.table_number)
    .bind(&order.payment_method)
    .bind(&order.waiter_name)
    .execute(pool)
    .await?;
    Ok(())
}

/// Apply the present fields in one UPDATE; returns false when nothing matched
pub async fn update(pool: &SqlitePool, id: &str, changes: &OrderChanges) -> RepoResult<bool> {
    if changes.is_empty() {
        return Ok(true);
    }

    let mut qb = QueryBuilder::<Sqlite>::new("UPDATE orders SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(status) = changes.status {
            set.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some((items, total)) = &changes.items {
            set.push("items = ").push_bind_unseparated(items.as_str());
            set.push("value = ").push_bind_unseparated(*total);
        }
        if let Some(payment_method) = &changes.payment_method {
            set.push("payment_method = ")
                .push_bind_unseparated(payment_method.as_deref());
        }
        if let Some(name) = &changes.name {
            set.push("name = ").push_bind_unseparated(name.as_deref());
        }
        if let Some(waiter_name) = &changes.waiter_name {
            set.push("waiter_name = ")
                .push_bind_unseparated(waiter_name.as_deref());
        }
    }
    qb.push(" WHERE id = ").push_bind(id);

    let rows = qb.build().execute(pool).await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
