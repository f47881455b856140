//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Source of truth for item price; orders copy `name`/`price` at normalization time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    /// Client-supplied id; generated when absent
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Replace menu item payload (`PUT /api/menu/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}
