//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use intranet_auth::TokenInspector;
use intranet_core::config::AppConfig;
use intranet_core::result::AppResult;
use intranet_docs::DocsCatalog;
use intranet_proxy::GatewayClient;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Heavier fields
/// are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Session token inspector.
    pub inspector: TokenInspector,
    /// Backend gateway HTTP client.
    pub gateway: Arc<GatewayClient>,
    /// Documentation catalog builder.
    pub docs: Arc<DocsCatalog>,
}

impl AppState {
    /// Wires all shared dependencies from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let gateway = GatewayClient::new(&config.gateway, &config.auth.cookie_name)?;
        let docs = DocsCatalog::new(&config.docs);

        Ok(Self {
            config: Arc::new(config),
            inspector: TokenInspector::new(),
            gateway: Arc::new(gateway),
            docs: Arc::new(docs),
        })
    }
}
