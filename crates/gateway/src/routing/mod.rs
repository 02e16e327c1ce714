//! Wildcard-subdomain routing for tenant portfolio pages
//!
//! This module turns tenant hostnames into internal routing targets,
//! enabling a single set of page routes to serve unlimited tenant
//! subdomains without per-tenant configuration:
//! - flavorr.in, www.flavorr.in -> platform surface, untouched
//! - alice.flavorr.in/projects -> internal path /alice/projects

mod host_router;
mod rewrite;

pub use host_router::{HostRouter, RouteDecision, RESERVED_SUBDOMAINS};
pub use rewrite::{rewrite_middleware, TenantContext};
