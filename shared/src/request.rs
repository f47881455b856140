//! Request types shared by several routes

use serde::Deserialize;

/// Body of collection-level DELETE requests (`DELETE /api/tables` with `{ "id": ... }`)
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteByIdRequest {
    pub id: String,
}

/// Body of a waiter-guarded DELETE (`DELETE /api/orders/{id}`)
///
/// Every field is optional; an empty or missing body asserts no waiter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaiterAssertion {
    #[serde(default)]
    pub waiter_name: Option<String>,
}
