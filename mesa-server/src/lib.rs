//! Mesa Server - restaurant back-office service
//!
//! # Overview
//!
//! - **Orders** (`orders`): item normalization against menu prices, totals,
//!   status transitions and the waiter ownership guard
//! - **Database** (`db`): SQLite pool, embedded migrations, first-start seed
//! - **HTTP API** (`api`): menu, tables, staff, inventory, ledger, settings, printers
//!
//! # Module layout
//!
//! ```text
//! mesa-server/src/
//! ├── core/          # config, state, server, start-up errors
//! ├── api/           # HTTP handlers, one directory per resource
//! ├── routes/        # router assembly and middleware stack
//! ├── middleware/    # request logging, manager gate
//! ├── db/            # pool, migrations, repositories
//! ├── orders/        # order pipeline
//! └── utils/         # logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use orders::OrdersManager;
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the working directory and start logging
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  _________ _
  / /|_/ / _ \/ ___/ __ `/
 / /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/
    "#
    );
}
