//! Ledger API Handlers

use axum::{Json, extract::State};
use shared::models::{Transaction, TransactionCreate, TransactionType};

use crate::core::ServerState;
use crate::db::repository::transaction;
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/transactions - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Transaction>>> {
    let rows = transaction::find_all(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/transactions
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TransactionCreate>,
) -> AppResult<Json<Transaction>> {
    if !payload.amount.is_finite() {
        return Err(AppError::validation("amount must be a finite number"));
    }
    let transaction_type: TransactionType = payload.transaction_type.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidTransactionType)
            .with_detail("type", payload.transaction_type.clone())
    })?;

    let entry = Transaction {
        id: payload
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(shared::util::new_id),
        transaction_type,
        description: payload.description,
        amount: payload.amount,
        category: payload.category,
        date: payload
            .date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(shared::util::now_rfc3339),
    };
    transaction::create(&state.pool, &entry).await?;

    tracing::info!(
        transaction_id = %entry.id,
        kind = ?entry.transaction_type,
        amount = entry.amount,
        "Ledger entry recorded"
    );
    Ok(Json(entry))
}
