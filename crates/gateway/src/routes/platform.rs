//! Platform surface served at the root domain
//!
//! Requests reaching these handlers passed through the host router
//! unrewritten: flavorr.in and www.flavorr.in are the platform's own
//! marketing/auth/dashboard surface, never a tenant page.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Root-domain landing response
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "Flavorr",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Portfolio hosting on your own subdomain",
        "primary_domain": state.config.primary_domain,
        "public_url": state.config.public_url,
    }))
}

/// Pricing page placeholder on the platform surface
pub async fn pricing() -> Json<Value> {
    Json(json!({
        "page": "pricing",
        "plans": ["free", "pro"],
    }))
}
