//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, name, seats FROM tables ORDER BY CAST(id AS INTEGER), id",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>("SELECT id, name, seats FROM tables WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(table)
}

pub async fn create(pool: &SqlitePool, table: &DiningTable) -> RepoResult<DiningTable> {
    sqlx::query("INSERT INTO tables (id, name, seats) VALUES (?, ?, ?)")
        .bind(&table.id)
        .bind(&table.name)
        .bind(table.seats)
        .execute(pool)
        .await?;
    find_by_id(pool, &table.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

pub async fn update(pool: &SqlitePool, data: DiningTableUpdate) -> RepoResult<DiningTable> {
    let rows = sqlx::query("UPDATE tables SET name = ?, seats = ? WHERE id = ?")
        .bind(&data.name)
        .bind(data.seats)
        .bind(&data.id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {} not found", data.id)));
    }
    Ok(DiningTable {
        id: data.id,
        name: data.name,
        seats: data.seats,
    })
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM tables WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
