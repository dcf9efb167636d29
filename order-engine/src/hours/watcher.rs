//! Periodic status re-evaluation
//!
//! A cancellable task owned by the controller's lifecycle: started on
//! merchant load, stopped on teardown. The first evaluation runs
//! immediately; the rest follow the configured interval.

use super::monitor::HoursMonitor;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to the spawned re-evaluation task
pub struct StatusWatcher {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl StatusWatcher {
    /// Spawn the watcher on the current runtime
    pub fn spawn(monitor: Arc<HoursMonitor>, interval: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("status watcher stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        monitor.evaluate_now();
                    }
                }
            }
        });
        Self { cancel, handle }
    }

    /// Stop the task; safe to call more than once
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for StatusWatcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
