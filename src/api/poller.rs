//! Periodic fetch → reconcile → publish loop.
//!
//! Every tick issues a request with a new sequence number. Requests run
//! concurrently, so a slow response can arrive after a newer one; the
//! [`SequenceGate`] only lets through responses newer than the last applied
//! one. After cancellation, or once the [`PollHandle`] is dropped, no
//! response is applied and no new request is issued.

use super::source::RecordSource;
use crate::core::{ReconcileOptions, reconcile};
use crate::errors::AppResult;
use crate::models::{AttendanceEvent, RawAttendanceRecord};
use crate::utils::date;
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

/// State published after each applied poll.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub seq: u64,
    pub fetched_at: NaiveDateTime,
    pub events: Vec<AttendanceEvent>,
}

/// Request counter plus the sequence number of the last applied response.
#[derive(Debug, Default)]
pub struct SequenceGate {
    issued: u64,
    applied: u64,
}

impl SequenceGate {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True (and recorded) if `seq` is newer than anything applied so far.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub default_confidence: f64,
}

pub type SnapshotReceiver = watch::Receiver<Option<Arc<Snapshot>>>;

/// Owner of a running poll loop. Dropping it cancels the loop.
pub struct PollHandle {
    updates: SnapshotReceiver,
    cancel: CancellationToken,
    task: JoinHandle<()>,
    _guard: DropGuard,
}

impl PollHandle {
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.updates.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and wait for the loop to exit; in-flight fetches are aborted.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "poller task ended abnormally");
        }
    }
}

/// Start polling `source` on the current tokio runtime.
pub fn spawn<S>(source: Arc<S>, config: PollerConfig) -> PollHandle
where
    S: RecordSource + 'static,
{
    let (tx, rx) = watch::channel(None);
    let cancel = CancellationToken::new();
    let task = tokio::spawn(run(source, config, tx, cancel.clone()));

    PollHandle {
        updates: rx,
        _guard: cancel.clone().drop_guard(),
        cancel,
        task,
    }
}

type FetchResult = (u64, AppResult<Vec<RawAttendanceRecord>>);

async fn run<S>(
    source: Arc<S>,
    config: PollerConfig,
    tx: watch::Sender<Option<Arc<Snapshot>>>,
    cancel: CancellationToken,
) where
    S: RecordSource + 'static,
{
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut gate = SequenceGate::default();
    let mut in_flight: JoinSet<FetchResult> = JoinSet::new();
    let profile_base = source.profile_base();

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,

            Some(joined) = in_flight.join_next() => {
                let (seq, result) = match joined {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(error = %e, "fetch task failed");
                        continue;
                    }
                };

                let records = match result {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(seq, error = %e, "attendance fetch failed, keeping previous snapshot");
                        continue;
                    }
                };

                if !gate.accept(seq) {
                    debug!(seq, applied = gate.last_applied(), "discarding stale response");
                    continue;
                }

                let as_of = date::now();
                let opts = ReconcileOptions::new(as_of)
                    .with_default_confidence(config.default_confidence)
                    .with_profile_base(profile_base.clone());
                let events = reconcile(&records, &opts);
                debug!(seq, events = events.len(), "applied snapshot");

                tx.send_replace(Some(Arc::new(Snapshot {
                    seq,
                    fetched_at: as_of,
                    events,
                })));
            }

            _ = ticker.tick() => {
                let seq = gate.issue();
                let source = Arc::clone(&source);
                in_flight.spawn(async move { (seq, source.fetch().await) });
            }
        }
    }

    in_flight.abort_all();
    debug!(applied = gate.last_applied(), "poller stopped");
}
