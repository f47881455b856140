//! Inventory Model

use serde::{Deserialize, Serialize};

/// Stock item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub min_quantity: f64,
}

impl InventoryItem {
    /// At or below the restock threshold
    pub fn is_low(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

/// Inventory write payload, shared by insert (`POST`) and full update (`PUT`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemInput {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default, deserialize_with = "crate::serde_helpers::f64_or_zero")]
    pub min_quantity: f64,
}
