//! Printer API Handlers

use axum::{Json, extract::State};
use mesa_printer::{PrintError, Printer, PrinterInfo, sanitize};
use serde_json::Value;
use shared::models::{PrintRequest, SELECTED_PRINTER_KEY, TEST_PRINT_CONTENT};
use shared::response::SuccessResponse;
use sqlx::SqlitePool;

use crate::core::ServerState;
use crate::db::repository::setting;
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/printers - printers installed on the host
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PrinterInfo>>> {
    let printers = state.printer.list_printers().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list printers");
        AppError::with_message(ErrorCode::PrinterNotAvailable, format!("Failed to list printers: {e}"))
    })?;
    Ok(Json(printers))
}

/// POST /api/print
///
/// Without `printerName` the `selectedPrinter` setting is used.
pub async fn print(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PrintRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let printer = match payload.printer_name.filter(|p| !p.is_empty()) {
        Some(name) => Some(name),
        None => selected_printer(&state.pool).await?,
    }
    .ok_or_else(|| AppError::new(ErrorCode::NoPrinterSelected))?;

    let content = payload
        .content
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| TEST_PRINT_CONTENT.to_string());

    state
        .printer
        .print_text(&printer, &content)
        .await
        .map_err(print_error)?;

    Ok(Json(SuccessResponse::with_message(format!(
        "Sent to {}",
        sanitize(&printer)
    ))))
}

/// The `selectedPrinter` setting, when it holds a non-empty string
async fn selected_printer(pool: &SqlitePool) -> AppResult<Option<String>> {
    let row = setting::find(pool, SELECTED_PRINTER_KEY).await?;
    Ok(row.and_then(|row| match row.decoded_value() {
        Value::String(name) if !name.is_empty() => Some(name),
        _ => None,
    }))
}

fn print_error(err: PrintError) -> AppError {
    match err {
        PrintError::InvalidConfig(msg) => AppError::with_message(ErrorCode::NoPrinterSelected, msg),
        other => {
            tracing::error!(error = %other, "Print job failed");
            AppError::with_message(ErrorCode::PrintFailed, format!("Print failed: {other}"))
        }
    }
}
