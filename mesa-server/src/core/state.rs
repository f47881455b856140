use std::time::Duration;

use mesa_printer::ShellPrinter;
use shared::AppError;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrdersManager;

/// Server state, cloned into every handler
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | pool | SqlitePool | Shared SQLite pool |
/// | orders | OrdersManager | Order lifecycle with per-order locks |
/// | printer | ShellPrinter | OS printer access |
///
/// Every field is cheap to clone (pool and lock map are reference counted).
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub orders: OrdersManager,
    pub printer: ShellPrinter,
}

impl ServerState {
    /// Open the database and build all services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::internal(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let db = DbService::new(&config.database_path).await?;
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// Build the state around an existing pool
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let printer = ShellPrinter::detect()
            .with_timeout(Duration::from_millis(config.print_timeout_ms));
        Self {
            orders: OrdersManager::new(pool.clone()),
            config,
            pool,
            printer,
        }
    }
}
