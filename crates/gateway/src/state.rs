//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::routing::HostRouter;

/// State shared across all request handlers and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub host_router: Arc<HostRouter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let host_router = Arc::new(HostRouter::new(&config.primary_domain));
        Self {
            config: Arc::new(config),
            host_router,
        }
    }
}
