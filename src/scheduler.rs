//! One-shot refresh scheduling.
//!
//! A refresh re-runs a whole poll from scratch: in the browser it is a
//! page reload, in the terminal it is the next iteration of the watch
//! loop. Scheduling replaces any pending refresh.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub trait RefreshScheduler: Send + Sync {
    /// Schedule a single refresh after `after`, replacing any pending one.
    fn schedule_refresh(&self, after: Duration);
    /// Drop the pending refresh, if any.
    fn cancel(&self);
}

/// Records the requested refresh so the page can emit it as a
/// `<meta http-equiv="refresh">`. Nothing runs on a timer, which also
/// makes it the scheduler used to observe refresh decisions in tests.
#[derive(Debug, Default)]
pub struct PageRefresh {
    pending: Mutex<Option<Duration>>,
}

impl PageRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<Duration> {
        *self.pending.lock().unwrap()
    }

    pub fn pending_secs(&self) -> Option<u64> {
        self.pending().map(|d| d.as_secs().max(1))
    }
}

impl RefreshScheduler for PageRefresh {
    fn schedule_refresh(&self, after: Duration) {
        *self.pending.lock().unwrap() = Some(after);
    }

    fn cancel(&self) {
        *self.pending.lock().unwrap() = None;
    }
}

/// Fires a tokio timer and wakes whoever awaits [`TimerRefresh::fired`].
///
/// A refresh that fires with nobody waiting stays fired until the next
/// `fired()` consumes it, or until `schedule_refresh`/`cancel` clears it.
#[derive(Debug)]
pub struct TimerRefresh {
    fired: Arc<watch::Sender<bool>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Default for TimerRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerRefresh {
    pub fn new() -> Self {
        let (fired, _) = watch::channel(false);
        Self {
            fired: Arc::new(fired),
            task: Mutex::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task
            .lock()
            .unwrap()
            .as_ref()
            .map(|t| !t.is_finished())
            .unwrap_or(false)
    }

    /// Resolves once the scheduled refresh fires, consuming it.
    pub async fn fired(&self) {
        let mut rx = self.fired.subscribe();
        // The sender outlives this call, so wait_for only returns once the flag is set.
        let _ = rx.wait_for(|fired| *fired).await.map(|_| ());
        self.fired.send_replace(false);
    }
}

impl RefreshScheduler for TimerRefresh {
    fn schedule_refresh(&self, after: Duration) {
        let fired = self.fired.clone();
        let mut task = self.task.lock().unwrap();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        self.fired.send_replace(false);
        *task = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            fired.send_replace(true);
        }));
        tracing::debug!(after_ms = after.as_millis() as u64, "Refresh scheduled");
    }

    fn cancel(&self) {
        if let Some(previous) = self.task.lock().unwrap().take() {
            previous.abort();
            tracing::debug!("Pending refresh cancelled");
        }
        self.fired.send_replace(false);
    }
}

impl Drop for TimerRefresh {
    fn drop(&mut self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}
