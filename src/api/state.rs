//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::chart::PlotlyRenderer;
use crate::data::Catalog;
use crate::interaction::{SessionConfig, SessionStore};
use crate::pages::{PageContext, RouteTable, DEFAULT_BASE_PATH};
use crate::shell::{AssetResolver, DocumentRenderer, ShellError};

/// URL prefix of the callback endpoints
pub const CALLBACK_PREFIX: &str = "/_dash";

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Every table the pages draw from
    pub catalog: Arc<Catalog>,
    pub renderer: Arc<PlotlyRenderer>,
    pub routes: Arc<RouteTable>,
    pub assets: Arc<AssetResolver>,
    pub documents: Arc<DocumentRenderer>,
    /// Per page-load UI state
    pub sessions: SessionStore,
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ApiConfig) -> Result<Self, ShellError> {
        let sessions = SessionStore::new(SessionConfig {
            max_sessions: config.max_sessions,
        });

        Ok(Self {
            catalog: Arc::new(catalog),
            renderer: Arc::new(PlotlyRenderer::default()),
            routes: Arc::new(RouteTable::new(config.base_path.clone())),
            assets: Arc::new(AssetResolver::default()),
            documents: Arc::new(DocumentRenderer::new()?),
            sessions,
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    pub fn page_context(&self) -> PageContext<'_> {
        PageContext::new(&self.catalog, &self.renderer)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Show error details on pages
    pub debug: bool,
    /// Prefix of every page path
    pub base_path: String,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// Sessions kept in memory
    pub max_sessions: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            debug: false,
            base_path: DEFAULT_BASE_PATH.to_string(),
            assets_dir: PathBuf::from("./assets"),
            max_sessions: 1024,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
