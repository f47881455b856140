//! Data models
//!
//! Shared between mesa-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `String` (SQLite TEXT PRIMARY KEY).

pub mod dining_table;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod print;
pub mod setting;
pub mod staff;
pub mod transaction;

// Re-exports
pub use dining_table::*;
pub use inventory::*;
pub use menu_item::*;
pub use order::*;
pub use print::*;
pub use setting::*;
pub use staff::*;
pub use transaction::*;
