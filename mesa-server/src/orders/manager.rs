//! Order lifecycle
//!
//! Create, partially update and delete orders. Every read-modify-write on an
//! order runs under that order's own async lock, so concurrent requests for
//! the same id are applied one after another while different ids never wait
//! on each other.

use super::normalizer::normalize_items;
use super::query;
use super::resolver::SqlitePriceResolver;
use super::{OrderError, OrderResult};
use crate::db::repository::order::{self as order_repo, OrderChanges};
use crate::db::repository::RepoError;
use dashmap::DashMap;
use serde_json::Value;
use shared::models::{DEFAULT_ORDER_TYPE, Order, OrderCreate, OrderRow, OrderStatus, OrderUpdate};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

/// Largest magnitude accepted for a table number (exactly representable in f64)
const MAX_TABLE_NUMBER: f64 = 9_007_199_254_740_991.0;

/// Last generated order id, kept strictly increasing
static LAST_ORDER_ID: AtomicI64 = AtomicI64::new(0);

/// Order lifecycle manager
#[derive(Clone)]
pub struct OrdersManager {
    pool: SqlitePool,
    resolver: SqlitePriceResolver,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("locked_orders", &self.locks.len())
            .finish()
    }
}

impl OrdersManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            resolver: SqlitePriceResolver::new(pool.clone()),
            pool,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Acquire the per-order lock
    async fn lock(&self, order_id: &str) -> OwnedMutexGuard<()> {
        let mutex = self
            .locks
            .entry(order_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Forget the lock of an order nobody else holds or waits on
    ///
    /// Called once the caller's guard is dropped, so the map only keeps
    /// entries for orders with work in flight.
    fn release_lock(&self, order_id: &str) {
        self.locks
            .remove_if(order_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }

    /// Create an order from a client submission
    pub async fn create(&self, req: OrderCreate) -> OrderResult<Order> {
        let table_number = parse_table_number(req.table_number.as_ref())?;
        let status = match req.status.as_deref() {
            None => OrderStatus::Pending,
            Some(s) => s
                .parse()
                .map_err(|_| OrderError::InvalidStatus(s.to_string()))?,
        };
        let normalized = normalize_items(req.items.as_ref(), &self.resolver).await?;

        let id = req
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(next_order_id);
        let now = shared::util::now_rfc3339();

        let order = Order {
            id,
            table_number,
            name: req.name.unwrap_or_else(|| format!("Mesa {table_number}")),
            items: normalized.items,
            status,
            order_type: req
                .order_type
                .unwrap_or_else(|| DEFAULT_ORDER_TYPE.to_string()),
            total: normalized.total,
            created_at: now.clone(),
            date: now,
            payment_method: req.payment_method,
            waiter_name: req.waiter_name,
        };

        let inserted = {
            let _guard = self.lock(&order.id).await;
            order_repo::insert(&self.pool, &order).await
        };
        self.release_lock(&order.id);
        inserted.map_err(|e| match e {
            RepoError::Duplicate(_) => OrderError::AlreadyExists(order.id.clone()),
            other => OrderError::Storage(other),
        })?;

        info!(
            order_id = %order.id,
            table_number = order.table_number,
            items = order.items.len(),
            total = order.total,
            "Order created"
        );
        Ok(order)
    }

    /// Apply a partial update
    ///
    /// Only fields present in `req` are written; items and total always
    /// change together.
    pub async fn update(&self, order_id: &str, req: OrderUpdate) -> OrderResult<Order> {
        let result = {
            let _guard = self.lock(order_id).await;
            self.update_locked(order_id, req).await
        };
        self.release_lock(order_id);
        result
    }

    async fn update_locked(&self, order_id: &str, req: OrderUpdate) -> OrderResult<Order> {
        let current = self.load(order_id).await?;
        check_owner(&current, req.asserted_waiter())?;

        let mut changes = OrderChanges {
            payment_method: req.payment_method,
            name: req.name,
            waiter_name: req.waiter_name,
            ..Default::default()
        };

        if let Some(status) = req.status {
            let status = status.unwrap_or_default();
            changes.status = Some(
                status
                    .parse()
                    .map_err(|_| OrderError::InvalidStatus(status.clone()))?,
            );
        }

        if let Some(raw) = req.items {
            let normalized = normalize_items(Some(&raw), &self.resolver).await?;
            let json = serde_json::to_string(&normalized.items).map_err(|e| {
                RepoError::Database(format!("Failed to encode order items: {e}"))
            })?;
            changes.items = Some((json, normalized.total));
        }

        if changes.is_empty() {
            debug!(order_id = %order_id, "Order update without fields");
            return Ok(query::decode_row(current));
        }

        if !order_repo::update(&self.pool, order_id, &changes).await? {
            return Err(OrderError::NotFound(order_id.to_string()));
        }

        let updated = self.load(order_id).await?;
        info!(
            order_id = %order_id,
            status = ?changes.status,
            items_changed = changes.items.is_some(),
            "Order updated"
        );
        Ok(query::decode_row(updated))
    }

    /// Delete an order; `waiter` is the waiter asserted by the caller, if any
    pub async fn delete(&self, order_id: &str, waiter: Option<&str>) -> OrderResult<()> {
        let result = {
            let _guard = self.lock(order_id).await;
            self.delete_locked(order_id, waiter).await
        };
        self.release_lock(order_id);
        result?;

        info!(order_id = %order_id, "Order deleted");
        Ok(())
    }

    async fn delete_locked(&self, order_id: &str, waiter: Option<&str>) -> OrderResult<()> {
        let current = self.load(order_id).await?;
        check_owner(&current, waiter.filter(|w| !w.is_empty()))?;

        if !order_repo::delete(&self.pool, order_id).await? {
            return Err(OrderError::NotFound(order_id.to_string()));
        }
        Ok(())
    }

    async fn load(&self, order_id: &str) -> OrderResult<OrderRow> {
        order_repo::find_by_id(&self.pool, order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}

/// A table belongs to the waiter who opened it: reject a different,
/// non-empty waiter when the order already has one
fn check_owner(current: &OrderRow, requested: Option<&str>) -> OrderResult<()> {
    let owner = current.waiter_name.as_deref().filter(|w| !w.is_empty());
    match (owner, requested) {
        (Some(owner), Some(requested)) if owner != requested => Err(OrderError::ForbiddenOwner {
            owner: owner.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Table numbers: a number or numeric string, finite, whole and non-zero
pub fn parse_table_number(value: Option<&Value>) -> OrderResult<i64> {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(OrderError::InvalidTable)?;

    if !n.is_finite() || n == 0.0 || n.fract() != 0.0 || n.abs() > MAX_TABLE_NUMBER {
        return Err(OrderError::InvalidTable);
    }
    Ok(n as i64)
}

/// Millisecond-timestamp id, bumped when two orders land in the same millisecond
fn next_order_id() -> String {
    let now = shared::util::now_millis();
    let mut last = LAST_ORDER_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_ORDER_ID.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}
