//! Security headers middleware
//!
//! Baseline response headers for everything the gateway serves. Tenant
//! pages are user-published content on a shared domain, so MIME
//! sniffing and cross-site framing are locked down for every response,
//! platform or tenant alike.

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    middleware::Next,
};

/// Middleware that adds security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Prevent MIME type sniffing
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    // Tenant pages may be framed by their own tenant, nothing else
    headers.insert(
        "X-Frame-Options",
        HeaderValue::from_static("SAMEORIGIN"),
    );

    // Control referrer information leakage between tenants
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
