//! Background writer for final scores.
//!
//! Handlers never wait on the store to finish a round: the final score is
//! queued here after the session guard is released, and a single tokio task
//! writes scores in arrival order with bounded retries. A score that cannot
//! be written, or that arrives while the queue is full, is logged at error
//! level and dropped.

use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::config::game::RetryPolicy;
use crate::domain::PlayerName;
use crate::repos::PlayerStore;
use crate::trace_ctx;

enum Command {
    Record {
        name: PlayerName,
        score: i64,
        trace_id: String,
    },
    Flush(oneshot::Sender<()>),
}

/// Pending writes held before `enqueue` starts dropping scores.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Handle to the recorder task. Cheap to clone; the task stops once every
/// handle is dropped and the queue is drained.
#[derive(Clone)]
pub struct ScoreRecorder {
    tx: mpsc::Sender<Command>,
}

impl ScoreRecorder {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(store: Arc<dyn PlayerStore>, retry: RetryPolicy) -> Self {
        Self::spawn_with_capacity(store, retry, DEFAULT_QUEUE_CAPACITY)
    }

    /// Like [`ScoreRecorder::spawn`] with an explicit queue bound (minimum 1).
    pub fn spawn_with_capacity(
        store: Arc<dyn PlayerStore>,
        retry: RetryPolicy,
        capacity: usize,
    ) -> Self {
        let (tx, mut rx) = mpsc::channel::<Command>(capacity.max(1));

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Command::Record {
                        name,
                        score,
                        trace_id,
                    } => persist(store.as_ref(), &name, score, retry, &trace_id).await,
                    Command::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            debug!("Score recorder stopped");
        });

        Self { tx }
    }

    /// Queue a final score. Never blocks; returns false if the score was
    /// dropped because the queue is full or the task is gone.
    pub fn enqueue(&self, name: PlayerName, score: i64) -> bool {
        let trace_id = trace_ctx::trace_id();
        let command = Command::Record {
            name,
            score,
            trace_id,
        };
        let (command, reason) = match self.tx.try_send(command) {
            Ok(()) => return true,
            Err(TrySendError::Full(command)) => (command, "Score queue is full"),
            Err(TrySendError::Closed(command)) => (command, "Score recorder is not running"),
        };
        if let Command::Record {
            name,
            score,
            trace_id,
        } = command
        {
            error!(
                trace_id = %trace_id,
                player = %name,
                score,
                capacity = self.tx.max_capacity(),
                "{reason}; final score lost"
            );
        }
        false
    }

    /// Wait until everything queued before this call has been handled.
    /// Waits for queue space rather than dropping the marker.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).await.is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn persist(
    store: &dyn PlayerStore,
    name: &PlayerName,
    score: i64,
    retry: RetryPolicy,
    trace_id: &str,
) {
    let attempts = retry.attempts.max(1);
    for attempt in 1..=attempts {
        match store.record_score(name, score).await {
            Ok(true) => {
                info!(trace_id, player = %name, score, "New best score recorded");
                return;
            }
            Ok(false) => {
                debug!(trace_id, player = %name, score, "Score did not beat stored best");
                return;
            }
            Err(e) if e.is_transient() && attempt < attempts => {
                warn!(
                    trace_id,
                    player = %name,
                    score,
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Score write failed; retrying"
                );
                tokio::time::sleep(retry.interval).await;
            }
            Err(e) => {
                error!(
                    trace_id,
                    player = %name,
                    score,
                    attempt,
                    error = %e,
                    "Failed to record final score"
                );
                return;
            }
        }
    }
}
