//! Ledger Transaction Repository

use super::RepoResult;
use shared::models::Transaction;
use sqlx::SqlitePool;

/// Newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Transaction>> {
    let rows = sqlx::query_as::<_, Transaction>(
        "SELECT id, type, description, amount, category, date FROM transactions ORDER BY date DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, tx: &Transaction) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO transactions (id, type, description, amount, category, date) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&tx.id)
    .bind(tx.transaction_type)
    .bind(&tx.description)
    .bind(tx.amount)
    .bind(&tx.category)
    .bind(&tx.date)
    .execute(pool)
    .await?;
    Ok(())
}
