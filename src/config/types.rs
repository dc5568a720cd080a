// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub presentation: Presentation,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Presentation parameters substituted into the slide template.
///
/// Values pass through unvalidated; an unknown theme or transition name is a
/// client-side rendering concern, not ours.
#[derive(Debug, Deserialize, Clone)]
pub struct Presentation {
    /// Filesystem-relative location of the slide source
    pub path: String,
    /// Theme name (bundled) or stylesheet path (custom)
    pub theme: String,
    /// Whether `theme` names one of the bundled reveal.js themes
    pub original_theme: bool,
    /// Slide transition effect name
    pub transition: String,
}

impl Presentation {
    /// Stylesheet href for the configured theme.
    ///
    /// Bundled themes live under the embedded asset prefix; a custom theme is
    /// a path served from the working directory.
    pub fn theme_href(&self) -> String {
        if self.original_theme {
            format!("/revealjs/dist/theme/{}.css", self.theme)
        } else {
            format!("/{}", self.theme.trim_start_matches('/'))
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}
