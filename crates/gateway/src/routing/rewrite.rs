//! Request rewrite middleware
//!
//! Applies the [`HostRouter`](super::HostRouter) decision to a live
//! request: mutates the request URI to the internal `/{tenant}{path}`
//! target, injects a [`TenantContext`] extension for downstream
//! handlers, and annotates the rewritten response so intermediate
//! proxies never cache it (the same path resolves to different content
//! under different hostnames).
//!
//! The middleware must wrap the `Router` from the outside: middleware
//! added with `Router::layer` runs after route matching, too late to
//! change the routing target.

use axum::{
    extract::{Request, State},
    http::{
        header::{self, HeaderMap, HeaderValue},
        Uri,
    },
    middleware::Next,
    response::Response,
};

use super::RouteDecision;
use crate::state::AppState;

/// Cache policy attached to every rewritten response
const REWRITE_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Tenant extracted by the rewrite middleware, injected into the request
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant: String,
    /// The internal path the request was rewritten to
    pub rewritten_path: String,
}

/// Middleware deciding pass-through vs internal rewrite per request.
///
/// Never fails: any ambiguity in the host header, and any failure while
/// reassembling the URI, degrades to pass-through.
pub async fn rewrite_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let host = effective_host(request.headers());
    let path = request.uri().path().to_string();

    let decision = state.host_router.resolve(host.as_deref(), &path);
    let RouteDecision::Rewrite { tenant, path: internal_path } = decision else {
        tracing::trace!(
            host = host.as_deref().unwrap_or("-"),
            path = %path,
            decision = "pass_through",
            "host routing"
        );
        return next.run(request).await;
    };

    // Reassemble the URI with the internal path; the query string is
    // carried over untouched. If the rewritten path does not parse,
    // fail open rather than erroring the request.
    let Some(rewritten_uri) = rewrite_uri(request.uri(), &internal_path) else {
        tracing::warn!(
            host = host.as_deref().unwrap_or("-"),
            path = %path,
            rewrite = %internal_path,
            "rewritten path did not parse, passing request through"
        );
        return next.run(request).await;
    };

    tracing::debug!(
        host = host.as_deref().unwrap_or("-"),
        path = %path,
        tenant = %tenant,
        rewrite = %internal_path,
        decision = "rewrite",
        "host routing"
    );

    *request.uri_mut() = rewritten_uri;
    request.extensions_mut().insert(TenantContext {
        tenant: tenant.clone(),
        rewritten_path: internal_path.clone(),
    });

    let mut response = next.run(request).await;
    annotate_rewrite(response.headers_mut(), &state, &tenant, &internal_path);
    response
}

/// Attach the mandatory cache policy and, when enabled, the
/// observability headers recording what the router did
fn annotate_rewrite(headers: &mut HeaderMap, state: &AppState, tenant: &str, internal_path: &str) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(REWRITE_CACHE_CONTROL),
    );

    // Debug headers are observability-only; consumers must not rely on them
    if state.config.debug_headers {
        if let Ok(value) = HeaderValue::from_str(tenant) {
            headers.insert("x-flavorr-tenant", value);
        }
        if let Ok(value) = HeaderValue::from_str(internal_path) {
            headers.insert("x-flavorr-rewrite", value);
        }
    }
}

/// Effective hostname for routing decisions.
///
/// Behind a reverse proxy the original hostname arrives in
/// `X-Forwarded-Host` (first value when the proxy chain appends);
/// otherwise the `Host` header is authoritative.
fn effective_host(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(header::HOST))
        .and_then(|h| h.to_str().ok())
        .map(|s| s.split(',').next().unwrap_or(s).trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Rebuild the request URI around the internal path, preserving the
/// original query string
fn rewrite_uri(uri: &Uri, internal_path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", internal_path, query),
        None => internal_path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_uri_preserves_query() {
        let uri: Uri = "/projects?x=1&y=2".parse().unwrap();
        let rewritten = rewrite_uri(&uri, "/alice/projects").unwrap();
        assert_eq!(rewritten.path(), "/alice/projects");
        assert_eq!(rewritten.query(), Some("x=1&y=2"));
    }

    #[test]
    fn test_rewrite_uri_without_query() {
        let uri: Uri = "/".parse().unwrap();
        let rewritten = rewrite_uri(&uri, "/alice").unwrap();
        assert_eq!(rewritten.path(), "/alice");
        assert_eq!(rewritten.query(), None);
    }

    #[test]
    fn test_effective_host_prefers_forwarded() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("gateway.internal"));
        headers.insert(
            "x-forwarded-host",
            HeaderValue::from_static("alice.flavorr.in, proxy.local"),
        );
        assert_eq!(effective_host(&headers).as_deref(), Some("alice.flavorr.in"));
    }

    #[test]
    fn test_effective_host_falls_back_to_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("alice.flavorr.in"));
        assert_eq!(effective_host(&headers).as_deref(), Some("alice.flavorr.in"));
    }

    #[test]
    fn test_effective_host_missing() {
        let headers = HeaderMap::new();
        assert_eq!(effective_host(&headers), None);
    }
}
