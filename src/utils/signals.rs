//! Signal handling for screen teardown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::info;

/// Register handlers for teardown signals (SIGTERM, SIGINT).
///
/// Must run inside a tokio runtime. Registration failure is reported here so
/// the caller can refuse to start rather than tear down later.
pub fn register_shutdown_signals() -> Result<Signals, String> {
    Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])
    .map_err(|e| format!("Failed to create signal handler: {}", e))
}

/// Wait for the first teardown signal on registered handlers
pub async fn shutdown_signal(mut signals: Signals) {
    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
