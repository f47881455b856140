//! Inventory Repository

use super::{RepoError, RepoResult};
use shared::models::InventoryItem;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<InventoryItem>> {
    let items = sqlx::query_as::<_, InventoryItem>(
        "SELECT id, name, unit, quantity, min_quantity FROM inventory ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(pool: &SqlitePool, item: &InventoryItem) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO inventory (id, name, unit, quantity, min_quantity) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&item.id)
    .bind(&item.name)
    .bind(&item.unit)
    .bind(item.quantity)
    .bind(item.min_quantity)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &SqlitePool, item: &InventoryItem) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE inventory SET name = ?, unit = ?, quantity = ?, min_quantity = ? WHERE id = ?",
    )
    .bind(&item.name)
    .bind(&item.unit)
    .bind(item.quantity)
    .bind(item.min_quantity)
    .bind(&item.id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Inventory item {} not found",
            item.id
        )));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM inventory WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
