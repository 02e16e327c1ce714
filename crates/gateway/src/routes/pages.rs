//! Tenant page endpoints
//!
//! These handlers consume the internal `/{tenant}{path}` target
//! produced by the rewrite middleware (or a direct path hit on the
//! root domain). They answer with the page envelope the render stage
//! consumes; resolving the tenant against the profile store and
//! producing the actual template markup happens in the renderer, an
//! external collaborator. What is owned here is the boundary rule:
//! a syntactically impossible tenant is a plain 404, never a 5xx.

use axum::{
    extract::{Path, RawQuery},
    Extension, Json,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::routing::{TenantContext, RESERVED_SUBDOMAINS};

/// Envelope handed to the page renderer
#[derive(Debug, Serialize)]
pub struct TenantPage {
    pub tenant: String,
    /// Path within the tenant's site, leading slash included
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Whether the request arrived via a subdomain rewrite (as opposed
    /// to a direct path hit on the root domain)
    pub via_subdomain: bool,
}

/// Tenant landing page: `/{tenant}`
pub async fn tenant_root(
    Path(tenant): Path<String>,
    RawQuery(query): RawQuery,
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Json<TenantPage>> {
    page(tenant, "/".to_string(), query, context)
}

/// Nested tenant page: `/{tenant}/{rest...}`
pub async fn tenant_page(
    Path((tenant, rest)): Path<(String, String)>,
    RawQuery(query): RawQuery,
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Json<TenantPage>> {
    page(tenant, format!("/{}", rest), query, context)
}

fn page(
    tenant: String,
    path: String,
    query: Option<String>,
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Json<TenantPage>> {
    // The router never emits these, but the same paths are reachable
    // directly on the root domain
    if tenant.len() < 2 || RESERVED_SUBDOMAINS.contains(&tenant.as_str()) {
        return Err(ApiError::NotFound);
    }

    Ok(Json(TenantPage {
        tenant,
        path,
        query,
        via_subdomain: context.is_some(),
    }))
}
