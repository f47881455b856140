//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub seats: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_seats")]
    pub seats: i64,
}

/// Update dining table payload (`PUT /api/tables`, id in body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub id: String,
    pub name: String,
    #[serde(default = "default_seats")]
    pub seats: i64,
}

fn default_seats() -> i64 {
    4
}
