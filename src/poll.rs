//! Polling loop: drives a controller's `tick` on a fixed interval.
//!
//! - `start` renders once (`init`) before the timer is armed
//! - A zero interval is rejected before anything runs
//! - First tick fires one interval after arming
//! - Every tick runs as its own task, so a slow tick never delays the next
//! - `PollHandle::stop` (or dropping the handle) cancels the timer and every
//!   in-flight tick

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, MissedTickBehavior};

use crate::controller::PageController;
use crate::error::BoardError;

const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to a running polling loop.
pub struct PollHandle {
    page: &'static str,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl PollHandle {
    /// Number of ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the timer and abort in-flight ticks, waiting for the loop to exit.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }

        if let Some(handle) = self.task.take() {
            let abort = handle.abort_handle();
            if tokio::time::timeout(STOP_TIMEOUT, handle).await.is_err() {
                tracing::warn!(page = self.page, "Polling loop did not stop in time, aborting");
                abort.abort();
            }
        }
        tracing::debug!(page = self.page, ticks = self.ticks(), "Polling stopped");
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

/// Render the page once, then keep it fresh every `interval`.
pub async fn start(
    controller: Arc<dyn PageController>,
    interval: Duration,
) -> Result<PollHandle, BoardError> {
    check_interval(interval)?;
    controller.init().await;
    spawn(controller, interval)
}

/// Arm the timer without the initial render.
pub fn spawn(
    controller: Arc<dyn PageController>,
    interval: Duration,
) -> Result<PollHandle, BoardError> {
    check_interval(interval)?;
    let page = controller.name();
    let (stop_tx, stop_rx) = oneshot::channel();
    let ticks = Arc::new(AtomicU64::new(0));

    tracing::info!(page, interval_ms = interval.as_millis() as u64, "Polling started");
    let task = tokio::spawn(run_loop(controller, interval, stop_rx, Arc::clone(&ticks)));

    Ok(PollHandle {
        page,
        stop_tx: Some(stop_tx),
        task: Some(task),
        ticks,
    })
}

fn check_interval(interval: Duration) -> Result<(), BoardError> {
    if interval.is_zero() {
        return Err(BoardError::Config("polling interval must be positive".into()));
    }
    Ok(())
}

async fn run_loop(
    controller: Arc<dyn PageController>,
    period: Duration,
    mut stop_rx: oneshot::Receiver<()>,
    ticks: Arc<AtomicU64>,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            // Explicit stop, or the handle was dropped.
            _ = &mut stop_rx => break,

            _ = interval.tick() => {
                let tick = ticks.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::trace!(page = controller.name(), tick, "Polling tick");
                let controller = Arc::clone(&controller);
                in_flight.spawn(async move { controller.tick().await });
            }

            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined {
                    if e.is_panic() {
                        tracing::error!(page = controller.name(), "Polling tick panicked: {}", e);
                    }
                }
            }
        }
    }

    in_flight.abort_all();
}
