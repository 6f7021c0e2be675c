//! Fixed-interval driver for a [`SyncJob`].
//!
//! The first run fires one full interval after [`SyncScheduler::start`],
//! never immediately. Each run executes in its own task. A tick that finds
//! the previous run still in flight is skipped, and missed ticks are never
//! queued. A panicking run is logged and the schedule carries on.

use crate::{ShutdownCoordinator, ShutdownGuard, SyncJob, SyncMetrics};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub struct SyncScheduler {
    interval: Duration,
    coordinator: ShutdownCoordinator,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl SyncScheduler {
    /// Arm the timer. Must be called from within a tokio runtime.
    pub fn start(job: Arc<dyn SyncJob>, interval: Duration) -> Self {
        let coordinator = ShutdownCoordinator::new();
        // Subscribe before spawning so an early stop() is never missed
        let guard = coordinator.subscribe_guard();

        info!(
            "Scheduling '{}' every {}",
            job.name(),
            humantime::format_duration(interval)
        );

        let timer = tokio::spawn(run_timer(job, interval, guard, SyncMetrics::new()));

        Self {
            interval,
            coordinator,
            timer: Mutex::new(Some(timer)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Coordinator whose `shutdown()` stops this scheduler
    pub fn shutdown_handle(&self) -> ShutdownCoordinator {
        self.coordinator.clone()
    }

    /// Signal shutdown and wait for the timer task to exit.
    ///
    /// A run still in flight is aborted. Calling `stop` again is a no-op.
    pub async fn stop(&self) {
        self.coordinator.shutdown();

        let timer = self.timer.lock().await.take();
        if let Some(timer) = timer
            && let Err(e) = timer.await
        {
            error!("Sync scheduler task ended abnormally: {}", e);
        }
    }
}

async fn run_timer(
    job: Arc<dyn SyncJob>,
    period: Duration,
    mut guard: ShutdownGuard,
    metrics: SyncMetrics,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut current: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            _ = guard.wait() => break,

            result = join_current(&mut current) => {
                current = None;
                report_run(job.name(), result, &metrics);
            }

            _ = ticker.tick() => {
                if let Some(running) = current.take() {
                    if !running.is_finished() {
                        current = Some(running);
                        warn!(
                            "Skipping '{}' tick: previous run still in progress",
                            job.name()
                        );
                        metrics.tick_skipped();
                        continue;
                    }
                    report_run(job.name(), running.await, &metrics);
                }

                debug!("Starting '{}' run", job.name());
                let job = job.clone();
                current = Some(tokio::spawn(async move { job.run().await }));
            }
        }
    }

    if let Some(running) = current.take() {
        running.abort();
        if let Err(e) = running.await
            && !e.is_cancelled()
        {
            report_run(job.name(), Err(e), &metrics);
        }
        info!("Aborted in-flight '{}' run", job.name());
    }

    info!("Sync scheduler for '{}' stopped", job.name());
}

/// Completes when the in-flight run finishes; pending forever when idle
async fn join_current(current: &mut Option<JoinHandle<()>>) -> Result<(), JoinError> {
    match current {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn report_run(name: &str, result: Result<(), JoinError>, metrics: &SyncMetrics) {
    match result {
        Ok(()) => debug!("'{}' run finished", name),
        Err(e) if e.is_panic() => {
            metrics.job_panicked();
            error!("'{}' run panicked; schedule continues", name);
        }
        Err(e) => warn!("'{}' run did not complete: {}", name, e),
    }
}
