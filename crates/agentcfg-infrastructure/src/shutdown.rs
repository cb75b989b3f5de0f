//! Background task lifecycle
//!
//! The fetcher runs as a tracked background task holding a child token of
//! the coordinator. Shutting down cancels every child token and waits for
//! the tracked tasks, bounded by a timeout.
//!
//! ```rust,ignore
//! let coordinator = ShutdownCoordinator::new();
//! let handle = fetcher.start(&coordinator);
//!
//! wait_for_ctrl_c().await;
//! let clean = coordinator.shutdown(Duration::from_secs(10)).await;
//! ```

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// Cancels and awaits the background tasks of one process
#[derive(Clone, Default)]
pub struct ShutdownCoordinator {
    cancel_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled when shutdown begins
    pub fn child_token(&self) -> CancellationToken {
        self.cancel_token.child_token()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Number of tracked tasks still running
    pub fn active_tasks(&self) -> usize {
        self.task_tracker.len()
    }

    /// Spawn a tracked task that receives its own child token
    ///
    /// The task is expected to return soon after the token is cancelled.
    pub fn spawn_cancellable<F, Fut>(&self, name: &'static str, task_fn: F) -> JoinHandle<Fut::Output>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        let future = task_fn(self.child_token());
        debug!(task = name, "Spawning tracked task");
        tokio::spawn(self.task_tracker.track_future(future))
    }

    /// Cancel every task and wait for them to finish
    ///
    /// Returns `false` if tasks were still running when `timeout` elapsed.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        info!(
            active_tasks = self.task_tracker.len(),
            timeout_secs = timeout.as_secs(),
            "Shutting down background tasks"
        );
        self.cancel_token.cancel();
        self.task_tracker.close();

        if tokio::time::timeout(timeout, self.task_tracker.wait()).await.is_ok() {
            info!("All background tasks stopped");
            true
        } else {
            warn!(
                active_tasks = self.task_tracker.len(),
                "Background tasks still running after shutdown timeout"
            );
            false
        }
    }
}

/// Resolves on the first Ctrl-C
pub async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C, shutting down");
    }
}
