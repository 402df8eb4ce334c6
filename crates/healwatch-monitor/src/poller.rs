//! Polling fetcher
//!
//! One background task owns the interval timer and at most one in-flight
//! fetch. Ticks or refresh requests that arrive while a fetch is pending are
//! skipped, not queued. State is published through a `watch` channel.

use crate::config::PollConfig;
use crate::error::FetchResult;
use crate::source::OutcomeSource;
use crate::state::DashboardState;
use chrono::{DateTime, Utc};
use healwatch_types::TestOutcome;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

const MIN_INTERVAL: Duration = Duration::from_secs(1);

type FetchFuture = Pin<Box<dyn Future<Output = FetchResult<Vec<TestOutcome>>> + Send>>;

struct InFlight {
    cycle: u64,
    fetch: FetchFuture,
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Tick,
    Refresh,
}

enum Event {
    Shutdown,
    Completed(u64, FetchResult<Vec<TestOutcome>>),
    Triggered(Trigger),
}

/// Starts polling tasks
pub struct Poller;

impl Poller {
    /// Spawn a polling task on the current tokio runtime.
    ///
    /// The first cycle starts immediately, then one per interval.
    pub fn start(source: Arc<dyn OutcomeSource>, config: PollConfig) -> PollHandle {
        let period = config.interval().max(MIN_INTERVAL);
        let (state_tx, state_rx) = watch::channel(DashboardState::new());
        let (refresh_tx, refresh_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        info!(
            source = %source.describe(),
            interval_secs = period.as_secs(),
            "Starting poller"
        );

        let task = tokio::spawn(poll_loop(source, period, state_tx, refresh_rx, shutdown_rx));

        PollHandle {
            state_rx,
            refresh_tx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Owner of a running poller.
///
/// Dropping the handle aborts the task; [`PollHandle::stop`] shuts it down
/// and waits for it.
pub struct PollHandle {
    state_rx: watch::Receiver<DashboardState>,
    refresh_tx: mpsc::Sender<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_rx.clone()
    }

    pub fn current(&self) -> DashboardState {
        self.state_rx.borrow().clone()
    }

    /// Request an immediate cycle.
    ///
    /// Returns false if a request is already pending. A request that lands
    /// while a fetch is in flight is counted as skipped.
    pub fn refresh(&self) -> bool {
        self.refresh_tx.try_send(()).is_ok()
    }

    /// Stop polling and wait for the task to finish
    pub async fn stop(mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "Poller task ended abnormally");
                }
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn poll_loop(
    source: Arc<dyn OutcomeSource>,
    period: Duration,
    state_tx: watch::Sender<DashboardState>,
    mut refresh_rx: mpsc::Receiver<()>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut in_flight: Option<InFlight> = None;

    loop {
        let event = tokio::select! {
            biased;

            _ = &mut shutdown_rx => Event::Shutdown,
            (cycle, result) = wait_in_flight(&mut in_flight) => Event::Completed(cycle, result),
            Some(()) = refresh_rx.recv() => Event::Triggered(Trigger::Refresh),
            _ = ticker.tick() => Event::Triggered(Trigger::Tick),
        };

        match event {
            Event::Shutdown => break,
            Event::Completed(cycle, result) => {
                in_flight = None;
                debug!(cycle, "Fetch completed");
                state_tx.send_modify(|state| apply_result(state, result, Utc::now()));
            }
            Event::Triggered(trigger) => {
                if let Some(pending) = &in_flight {
                    debug!(
                        pending_cycle = pending.cycle,
                        trigger = ?trigger,
                        "Fetch still in flight, skipping"
                    );
                    state_tx.send_modify(DashboardState::record_skip);
                    continue;
                }

                let mut cycle = 0;
                state_tx.send_modify(|state| cycle = state.begin_cycle());
                debug!(cycle, trigger = ?trigger, "Starting fetch cycle");

                let source = source.clone();
                in_flight = Some(InFlight {
                    cycle,
                    fetch: Box::pin(async move { source.fetch().await }),
                });
            }
        }
    }

    if let Some(abandoned) = in_flight {
        debug!(cycle = abandoned.cycle, "Abandoning in-flight fetch");
    }
    info!("Poller stopped");
}

async fn wait_in_flight(in_flight: &mut Option<InFlight>) -> (u64, FetchResult<Vec<TestOutcome>>) {
    match in_flight {
        Some(pending) => (pending.cycle, pending.fetch.as_mut().await),
        None => std::future::pending().await,
    }
}

/// Perform one fetch cycle without a timer
#[instrument(skip_all, fields(source = %source.describe()))]
pub async fn run_cycle(source: &dyn OutcomeSource, state: &mut DashboardState) -> FetchResult<()> {
    state.begin_cycle();
    let result = source.fetch().await;
    let status = match &result {
        Ok(_) => Ok(()),
        Err(e) => Err(e.clone()),
    };

    apply_result(state, result, Utc::now());
    status
}

fn apply_result(
    state: &mut DashboardState,
    result: FetchResult<Vec<TestOutcome>>,
    now: DateTime<Utc>,
) {
    match result {
        Ok(raw) => {
            let snapshot = state.apply_success(&raw, now);
            for rejected in &snapshot.rejected {
                warn!(
                    cycle = snapshot.cycle,
                    name = %rejected.name,
                    status = %rejected.status,
                    "Dropping record with unknown status"
                );
            }
            info!(
                cycle = snapshot.cycle,
                total = snapshot.summary.total,
                passed = snapshot.summary.passed,
                healed = snapshot.summary.healed,
                failed = snapshot.summary.failed,
                success_rate = snapshot.summary.success_rate,
                "Test results updated"
            );
        }
        Err(error) => {
            let has_snapshot = state.snapshot.is_some();
            let failure = state.apply_failure(error, now);
            warn!(
                cycle = failure.cycle,
                kind = failure.error.kind(),
                error = %failure.error,
                keeping_last_results = has_snapshot,
                "Fetch cycle failed"
            );
        }
    }
}
