//! Order pipeline
//!
//! ```text
//! raw items ──► normalizer ──► resolver (menu prices) ──► money (totals)
//!                   │
//!                   ▼
//!            lifecycle manager ──► repository::order
//!                                        │
//!                    query (decode) ◄────┘
//! ```
//!
//! Every write that touches items goes through [`normalizer::normalize_items`],
//! so the stored total is always derived from menu prices.

pub mod error;
pub mod manager;
pub mod money;
pub mod normalizer;
pub mod query;
pub mod resolver;

pub use error::{OrderError, OrderResult};
pub use manager::OrdersManager;
pub use normalizer::{NormalizedItems, normalize_items};
pub use resolver::{MenuPrice, PriceResolver, SqlitePriceResolver};
