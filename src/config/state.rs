// Application state module
// The immutable composition root shared across all connections

use std::path::PathBuf;

use super::types::Config;
use crate::handler::{AssetHandler, RootHandler};

/// Application state.
///
/// Built once at startup and shared via `Arc`; nothing here mutates at run
/// time, so concurrent request handling needs no synchronization.
pub struct AppState {
    pub config: Config,
    /// Serves the embedded reveal.js bundle
    pub assets: AssetHandler,
    /// Serves working-directory files and the templated slide page
    pub root: RootHandler,
}

impl AppState {
    /// Create the state with the working directory as serve root
    pub fn new(config: Config) -> std::io::Result<Self> {
        let serve_root = std::env::current_dir()?;
        Ok(Self::with_serve_root(config, serve_root))
    }

    /// Create the state with an explicit serve root
    pub fn with_serve_root(config: Config, serve_root: PathBuf) -> Self {
        let root = RootHandler::new(config.presentation.clone(), serve_root);
        Self {
            config,
            assets: AssetHandler::new(),
            root,
        }
    }
}
