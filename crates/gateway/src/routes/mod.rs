//! Gateway routes

pub mod health;
pub mod pages;
pub mod platform;

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::Request,
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower::util::BoxCloneService;
use tower::Layer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::routing::rewrite_middleware;
use crate::security::headers::security_headers_middleware;
use crate::state::AppState;

/// Create the routed application: platform surface, health probes, and
/// the tenant page routes the rewrite middleware targets
pub fn create_router(state: AppState) -> Router {
    // Platform surface (root domain)
    let platform_routes = Router::new()
        .route("/", get(platform::root))
        .route("/pricing", get(platform::pricing));

    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    // Tenant pages, reached through the internal rewrite or directly
    // by path on the root domain
    let page_routes = Router::new()
        .route("/:tenant", get(pages::tenant_root))
        .route("/:tenant/*rest", get(pages::tenant_page));

    Router::new()
        .merge(platform_routes)
        .merge(health_routes)
        .merge(page_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Assemble the full gateway: host-routing rewrite wrapped around the
/// routed application.
///
/// The rewrite layer must sit outside the `Router` - middleware added
/// with `Router::layer` runs after route matching, which is too late
/// to change the routing target.
pub fn create_gateway(state: AppState) -> BoxCloneService<Request<Body>, Response, Infallible> {
    let routes = create_router(state.clone());
    let gateway = middleware::from_fn_with_state(state, rewrite_middleware).layer(routes);
    BoxCloneService::new(gateway)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
