// Configuration module entry point
// Manages application configuration and the immutable runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, Presentation, ServerConfig};

/// Fallback port when the configured value is absent or zero
const DEFAULT_PORT: u16 = 3000;

impl Config {
    /// Load configuration from the default "config.toml"
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config.toml")
    }

    /// Load configuration from the specified file path.
    /// The file is optional; environment variables (`REVEALSERVE_` prefix)
    /// override file values, coded defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("REVEALSERVE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("presentation.path", "slides.md")?
            .set_default("presentation.theme", "black")?
            .set_default("presentation.original_theme", true)?
            .set_default("presentation.transition", "slide")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        // Port 0 means "unset"
        if cfg.server.port == 0 {
            cfg.server.port = DEFAULT_PORT;
        }
        Ok(cfg)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
