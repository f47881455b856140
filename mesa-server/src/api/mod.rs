//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and database check
//! - [`orders`] - order lifecycle (create, partial update, delete, list)
//! - [`menu`] - menu items (authoritative prices)
//! - [`tables`] - dining tables
//! - [`staff`] - staff members and PIN login
//! - [`inventory`] - stock items
//! - [`transactions`] - financial ledger (managers only)
//! - [`settings`] - key/value settings (`/api/config`, `/api/settings/{key}`)
//! - [`printers`] - OS printers and print jobs

pub mod health;
pub mod orders;

// Catalog and floor
pub mod menu;
pub mod tables;

// People
pub mod staff;

// Back office
pub mod inventory;
pub mod settings;
pub mod transactions;

// Devices
pub mod printers;

pub use shared::{AppError, AppResult};
