//! Server module
//!
//! Binds the configured address and runs the accept loop until a shutdown
//! signal arrives.

mod connection;
mod listener;
mod signal;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::sync::Notify;

use crate::config::{AppState, Config};
use crate::logger;

/// Bind and serve, blocking until shutdown.
///
/// Bind failure is fatal and propagates to the caller. Accept failures are
/// logged and the loop continues; a transient accept error must not take the
/// whole server down.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.get_socket_addr()?;
    let listener = listener::create_listener(addr)?;
    let bound_addr = listener.local_addr()?;

    let state = Arc::new(AppState::new(config)?);
    let active_connections = Arc::new(AtomicUsize::new(0));

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(&bound_addr, &state.config);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
