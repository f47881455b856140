//! Menu price resolution
//!
//! Maps item ids to their authoritative name and price. Ids that are not on
//! the menu are simply absent from the result.

use super::OrderResult;
use crate::db::repository::RepoError;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::{BTreeSet, HashMap};

/// Name and unit price as listed on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuPrice {
    pub name: String,
    pub price: f64,
}

/// Source of authoritative item prices
#[allow(async_fn_in_trait)]
pub trait PriceResolver {
    /// Resolve the given ids; unknown ids are left out of the map
    async fn resolve(&self, ids: &[String]) -> OrderResult<HashMap<String, MenuPrice>>;
}

/// Static price list (tests, fixtures)
impl PriceResolver for HashMap<String, MenuPrice> {
    async fn resolve(&self, ids: &[String]) -> OrderResult<HashMap<String, MenuPrice>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.get(id).map(|p| (id.clone(), p.clone())))
            .collect())
    }
}

/// Resolver backed by the `menu_items` table
#[derive(Clone)]
pub struct SqlitePriceResolver {
    pool: SqlitePool,
}

impl SqlitePriceResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PriceResolver for SqlitePriceResolver {
    async fn resolve(&self, ids: &[String]) -> OrderResult<HashMap<String, MenuPrice>> {
        let unique: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
        if unique.is_empty() {
            return Ok(HashMap::new());
        }

        let mut qb =
            QueryBuilder::<Sqlite>::new("SELECT id, name, price FROM menu_items WHERE id IN (");
        {
            let mut list = qb.separated(", ");
            for id in &unique {
                list.push_bind(*id);
            }
        }
        qb.push(")");

        let rows: Vec<(String, Option<String>, Option<f64>)> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(RepoError::from)?;

        Ok(rows
            .into_iter()
            .map(|(id, name, price)| {
                (
                    id,
                    MenuPrice {
                        name: name.unwrap_or_default(),
                        price: price.unwrap_or(0.0),
                    },
                )
            })
            .collect())
    }
}
