use crate::config::LoggingConfig;
use log::Level;

/// Effective console level: the configured one, or errors only when
/// logging is disabled.
pub fn level_for(config: &LoggingConfig) -> Level {
    if !config.enabled {
        return Level::Error;
    }
    config.level.parse().unwrap_or(Level::Info)
}

/// Installs the browser console logger and panic hook.
///
/// Does nothing off wasm so test binaries can install their own logger.
pub fn init(config: &LoggingConfig) {
    let level = level_for(config);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::new(level));
        console_error_panic_hook::set_once();
        log::info!("Logger initialized at {}", level);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}

/// Records a UI action when the config asks for user-action logging.
pub fn user_action(config: &LoggingConfig, action: &str) {
    if config.user_actions {
        log::info!("User action: {}", action);
    }
}
