//! Flavorr Gateway Library
//!
//! This crate contains the edge gateway for the Flavorr platform: the
//! wildcard-subdomain host router that rewrites tenant requests
//! (alice.flavorr.in) onto internal `/alice/...` routes, plus the
//! platform surface served at the root domain.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::{create_gateway, create_router};
pub use routing::{HostRouter, RouteDecision, TenantContext};
pub use state::AppState;
