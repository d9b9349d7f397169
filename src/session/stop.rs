//! Cooperative stop signal shared between a session and its owner

use std::sync::Arc;

use tokio::sync::watch;

/// Cloneable handle that stops a detection session.
///
/// Stopping is idempotent and may happen before the session starts, while it
/// waits for a frame, or mid-cycle.
#[derive(Clone, Debug)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StopHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request a stop. Returns true only for the call that flipped the flag.
    pub fn stop(&self) -> bool {
        self.tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        })
    }

    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once a stop has been requested
    pub async fn stopped(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as this handle, so this cannot fail
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}
