//! Application configuration

use std::env;

/// Gateway configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub public_url: String,

    /// The platform's own root domain, e.g. "flavorr.in" for
    /// *.flavorr.in tenant routing. Root-vs-subdomain decisions are
    /// made against this value.
    pub primary_domain: String,

    /// Emit x-flavorr-tenant / x-flavorr-rewrite headers on rewritten
    /// responses (observability only)
    pub debug_headers: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            primary_domain: {
                let domain = env::var("PRIMARY_DOMAIN")
                    .map_err(|_| ConfigError::Missing("PRIMARY_DOMAIN"))?;
                let domain = domain.trim().to_lowercase();

                // A scheme, path, or port here means someone pasted a URL;
                // routing comparisons need a bare hostname
                if domain.is_empty() {
                    return Err(ConfigError::InvalidPrimaryDomain(
                        "PRIMARY_DOMAIN must not be empty",
                    ));
                }
                if domain.contains('/') || domain.contains(':') {
                    return Err(ConfigError::InvalidPrimaryDomain(
                        "PRIMARY_DOMAIN must be a bare hostname, without scheme, port, or path",
                    ));
                }

                domain
            },
            debug_headers: env::var("ROUTER_DEBUG_HEADERS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid primary domain: {0}")]
    InvalidPrimaryDomain(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure config tests run serially (they modify shared env vars)
    static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn cleanup_config() {
        env::remove_var("PRIMARY_DOMAIN");
        env::remove_var("BIND_ADDRESS");
        env::remove_var("ROUTER_DEBUG_HEADERS");
    }

    /// Combined primary-domain validation tests - runs serially to
    /// avoid env var race conditions
    #[test]
    fn test_primary_domain_validation() {
        let _lock = CONFIG_TEST_MUTEX.lock().unwrap();

        // === Test 1: Missing domain ===
        cleanup_config();
        let result = Config::from_env();
        assert!(
            matches!(result, Err(ConfigError::Missing("PRIMARY_DOMAIN"))),
            "Missing PRIMARY_DOMAIN should fail, got: {:?}",
            result
        );

        // === Test 2: URL instead of hostname rejected ===
        env::set_var("PRIMARY_DOMAIN", "https://flavorr.in");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPrimaryDomain(_))
        ));

        // === Test 3: Port suffix rejected ===
        env::set_var("PRIMARY_DOMAIN", "flavorr.in:3000");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPrimaryDomain(_))
        ));

        // === Test 4: Whitespace-only rejected ===
        env::set_var("PRIMARY_DOMAIN", "   ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPrimaryDomain(_))
        ));

        // === Test 5: Valid domain accepted and lowercased ===
        env::set_var("PRIMARY_DOMAIN", "Flavorr.IN");
        let config = Config::from_env().unwrap();
        assert_eq!(config.primary_domain, "flavorr.in");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert!(!config.debug_headers);

        // === Test 6: Overrides are picked up ===
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::set_var("ROUTER_DEBUG_HEADERS", "true");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(config.debug_headers);

        cleanup_config();
    }
}
