//! Shutdown coordination for the edge server.
//!
//! # Design Decisions
//! - The signal is a latched flag, not a message: a server subscribed
//!   after `trigger` still stops
//! - Dropping every `Shutdown` handle counts as a trigger, so a server
//!   never outlives its coordinator

use std::sync::Arc;

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// `main` triggers it from the signal task; the server waits on a
/// [`ShutdownSignal`] obtained from [`Shutdown::subscribe`].
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Repeated calls are no-ops.
    pub fn trigger(&self) {
        let was_triggered = self.tx.send_replace(true);
        if !was_triggered {
            tracing::debug!(
                subscribers = self.tx.receiver_count(),
                "Shutdown triggered"
            );
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to `EdgeServer::run`.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered (or the coordinator is gone).
    pub async fn triggered(mut self) {
        // Err means every sender was dropped
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}
