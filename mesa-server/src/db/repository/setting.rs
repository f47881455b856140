//! Settings Repository
//!
//! Values are stored as JSON text.

use super::RepoResult;
use serde_json::{Map, Value};
use shared::models::SettingRow;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<SettingRow>> {
    let rows = sqlx::query_as::<_, SettingRow>("SELECT key, value FROM settings ORDER BY key")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find(pool: &SqlitePool, key: &str) -> RepoResult<Option<SettingRow>> {
    let row = sqlx::query_as::<_, SettingRow>("SELECT key, value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

const UPSERT: &str =
    "INSERT INTO settings (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Insert or replace `key` with the JSON encoding of `value`
pub async fn upsert(pool: &SqlitePool, key: &str, value: &Value) -> RepoResult<()> {
    sqlx::query(UPSERT)
        .bind(key)
        .bind(value.to_string())
        .execute(pool)
        .await?;
    Ok(())
}

/// Upsert several keys in one transaction
pub async fn upsert_many(pool: &SqlitePool, entries: &Map<String, Value>) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    for (key, value) in entries {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value.to_string())
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}
