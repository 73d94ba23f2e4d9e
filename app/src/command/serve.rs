use crate::command::CommandStrategy;
use phonedex_web::AppState;
use std::path::PathBuf;
use tracing::info;

/// Input for the web server command.
pub struct ServeInput {
    /// Optional bind host (overrides config)
    pub host: Option<String>,
    /// Optional bind port (overrides config)
    pub port: Option<u16>,
    /// Optional catalog file (overrides config)
    pub catalog: Option<PathBuf>,
    /// Optional config file (instead of ~/phonedex/config.json)
    pub config: Option<PathBuf>,
}

/// Strategy for running the web application.
pub struct ServeStrategy;

impl CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = super::load_config(input.config.as_deref())?;
        if let Some(host) = input.host {
            config.server.host = host;
        }
        if let Some(port) = input.port {
            config.server.port = port;
        }

        // Loaded once, before the first request is accepted.
        let catalog = super::load_catalog(&config, input.catalog);
        info!(
            "Catalog ready: {} phones, result limit {}",
            catalog.len(),
            config.catalog.result_limit
        );

        let state = AppState::new(catalog, config.catalog.result_limit);
        let addr = config.server.bind_address();
        phonedex_web::serve(state, &addr)
            .await
            .map_err(|e| anyhow::anyhow!("Server on {addr} failed: {e}"))
    }
}
