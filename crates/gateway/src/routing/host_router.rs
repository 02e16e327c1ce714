//! Host-to-tenant routing decision
//!
//! Decides, for every inbound request, whether the request targets the
//! platform's own surface (marketing, dashboard, API) or a tenant
//! portfolio on a wildcard subdomain:
//! - Root domain: flavorr.in, www.flavorr.in -> platform pages
//! - Tenant subdomain: alice.flavorr.in -> internal path /alice/...
//!
//! The decision is a total pure function of (hostname, path). There is
//! no tenant-existence lookup here; the page-rendering stage queries
//! the profile store and owns the not-found semantics. Every ambiguous
//! or malformed input degrades to pass-through (fail open): a broken
//! host header must never take down the shared platform surface.

/// Reserved subdomain labels that never resolve to a tenant
pub const RESERVED_SUBDOMAINS: &[&str] = &[
    "www",
    "api",
    "app",
    "admin",
    "mail",
    "dashboard",
    "console",
    "docs",
    "help",
    "support",
    "status",
    "blog",
    "cdn",
    "static",
    "assets",
    "media",
    "staging",
    "dev",
    "demo",
];

/// Leading path segments that must reach platform infrastructure
/// regardless of tenant (bundled assets, API handlers, health probes)
const BYPASS_SEGMENTS: &[&str] = &["api", "_next", "static", "assets", "health"];

/// Minimum length of a tenant subdomain label
const MIN_TENANT_LEN: usize = 2;

/// Terminal outcome of the routing decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Leave the request untouched
    PassThrough,
    /// Rewrite the internal routing target to `path`; the externally
    /// visible URL is unchanged (this is not a redirect)
    Rewrite {
        /// Subdomain label extracted from the hostname
        tenant: String,
        /// Internal path: `/{tenant}` or `/{tenant}{original_path}`
        path: String,
    },
}

impl RouteDecision {
    /// Short name for structured log events
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteDecision::PassThrough => "pass_through",
            RouteDecision::Rewrite { .. } => "rewrite",
        }
    }
}

/// Stateless host router bound to the platform's primary domain
#[derive(Debug, Clone)]
pub struct HostRouter {
    primary_domain: String,
    www_domain: String,
    subdomain_suffix: String,
}

impl HostRouter {
    /// Create a router for the given primary domain (e.g. "flavorr.in")
    pub fn new(primary_domain: &str) -> Self {
        let primary_domain = primary_domain.trim().to_lowercase();
        Self {
            www_domain: format!("www.{}", primary_domain),
            subdomain_suffix: format!(".{}", primary_domain),
            primary_domain,
        }
    }

    /// The primary domain this router was configured with
    pub fn primary_domain(&self) -> &str {
        &self.primary_domain
    }

    /// Decide whether to pass the request through or rewrite it.
    ///
    /// `path` is the request path without the query string, with its
    /// leading slash. The query string is never part of the decision
    /// and is preserved untouched by the caller on rewrite.
    pub fn resolve(&self, host: Option<&str>, path: &str) -> RouteDecision {
        // Infrastructure paths bypass tenant routing even on a valid
        // tenant hostname
        if is_bypass_path(path) {
            return RouteDecision::PassThrough;
        }

        // No host header means no tenant signal; fail open
        let Some(raw_host) = host else {
            return RouteDecision::PassThrough;
        };

        let host = normalize_host(raw_host);
        if host.is_empty() {
            return RouteDecision::PassThrough;
        }

        // The platform's own surface: bare and www. forms of the
        // primary domain
        if host == self.primary_domain || host == self.www_domain {
            return RouteDecision::PassThrough;
        }

        // Hosts outside *.{primary_domain} carry no tenant signal
        // (stray DNS, direct IP access, misdirected custom domains)
        let Some(label_part) = host.strip_suffix(&self.subdomain_suffix) else {
            return RouteDecision::PassThrough;
        };

        // First label is the candidate tenant identifier; the rest of
        // the validation is purely syntactic
        let tenant = label_part.split('.').next().unwrap_or_default();
        if tenant.len() < MIN_TENANT_LEN || RESERVED_SUBDOMAINS.contains(&tenant) {
            return RouteDecision::PassThrough;
        }

        let rewritten = if path == "/" {
            format!("/{}", tenant)
        } else {
            format!("/{}{}", tenant, path)
        };

        RouteDecision::Rewrite {
            tenant: tenant.to_string(),
            path: rewritten,
        }
    }
}

/// Normalize a host header value: drop any :port suffix (local dev runs
/// with explicit ports) and lowercase (DNS hostnames are case-insensitive)
fn normalize_host(host: &str) -> String {
    let host = host.split(':').next().unwrap_or(host);
    host.trim().to_lowercase()
}

/// Check whether a path must reach platform infrastructure unrewritten:
/// reserved leading segments, or a file extension in the final segment
/// (favicon.ico, robots.txt, bundled assets)
fn is_bypass_path(path: &str) -> bool {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    if BYPASS_SEGMENTS.contains(&first) {
        return true;
    }

    let last = path.rsplit('/').next().unwrap_or_default();
    last.contains('.')
}
