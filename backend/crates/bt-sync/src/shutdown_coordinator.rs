use crate::ShutdownGuard;

use tokio::sync::broadcast;

/// Broadcasts a one-shot stop signal to the scheduler timer task.
///
/// Clones share the same channel, so the process can hand one to its
/// signal handler while the scheduler keeps another.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self { shutdown_tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Trigger shutdown. Safe to call more than once.
    pub fn shutdown(&self) {
        log::info!("Sync scheduler shutdown requested");
        let _ = self.shutdown_tx.send(());
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self)
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
