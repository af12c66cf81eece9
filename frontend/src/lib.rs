use log::info;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod logging;
pub mod storage;

pub use api::{ApiClient, RequestOptions};
pub use config::{AppConfig, Environment};
pub use shared::{handle_api_error, ApiError};
pub use storage::{KeyValueStorage, LocalStorageBackend, MemoryStorage, AUTH_TOKEN_KEY};

/// Builds the browser-backed client for this build's environment and
/// installs logging. Call once at startup.
pub fn bootstrap() -> (AppConfig, ApiClient) {
    let config = AppConfig::load();
    logging::init(&config.logging);

    let client = ApiClient::new(&config)
        .with_response_cache(config.performance.cache.api_response_time);
    info!(
        "Portfolio client ready ({} environment, API at {})",
        config.env.current,
        client.base_url()
    );

    (config, client)
}

/// Entry point for hosts that only need the logger from JS.
#[wasm_bindgen(js_name = initPortfolioLogging)]
pub fn init_portfolio_logging() {
    let config = AppConfig::load();
    logging::init(&config.logging);
    info!("Logger initialized for {} environment", config.env.current);
}
