//! Background score persistence.
//!
//! Bridges the sync game loop with file I/O: finished runs are queued to a
//! task on a small tokio runtime, written through [`ScoreStore`] on the
//! blocking pool, and the refreshed [`Leaderboard`] comes back over a channel
//! the loop drains once per frame.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{Leaderboard, ScoreRecord};
use crate::store::ScoreStore;

/// Running persistence worker.
pub struct PersistWorker {
    rt: Runtime,
    job_tx: mpsc::UnboundedSender<ScoreRecord>,
    update_rx: mpsc::UnboundedReceiver<Leaderboard>,
    task: JoinHandle<()>,
}

impl PersistWorker {
    /// Start the worker. `initial` is the leaderboard the game starts with;
    /// the worker keeps its own copy and is the only writer of the files.
    pub fn start(store: ScoreStore, initial: Leaderboard) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(1)
            .thread_name("flappy-persist")
            .enable_time()
            .build()
            .context("create persistence runtime")?;

        let (job_tx, job_rx) = mpsc::unbounded_channel::<ScoreRecord>();
        let (update_tx, update_rx) = mpsc::unbounded_channel::<Leaderboard>();

        let task = rt.spawn(run_jobs(Arc::new(store), initial, job_rx, update_tx));

        Ok(Self {
            rt,
            job_tx,
            update_rx,
            task,
        })
    }

    /// Queue a finished run; never blocks.
    pub fn submit(&self, record: ScoreRecord) {
        if self.job_tx.send(record).is_err() {
            warn!("persistence worker stopped, score not saved");
        }
    }

    /// Latest leaderboard published since the last call, if any.
    pub fn try_recv(&mut self) -> Option<Leaderboard> {
        let mut latest = None;
        while let Ok(board) = self.update_rx.try_recv() {
            latest = Some(board);
        }
        latest
    }

    /// Block until the next leaderboard update or the timeout.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Leaderboard> {
        let rx = &mut self.update_rx;
        self.rt
            .block_on(async move { tokio::time::timeout(timeout, rx.recv()).await.ok().flatten() })
    }

    /// Finish queued jobs (bounded by `timeout`) and stop the runtime.
    pub fn shutdown(self, timeout: Duration) {
        let Self {
            rt, job_tx, task, ..
        } = self;
        drop(job_tx);

        match rt.block_on(async move { tokio::time::timeout(timeout, task).await }) {
            Ok(Ok(())) => debug!("persistence worker drained"),
            Ok(Err(err)) => warn!(error = %err, "persistence worker failed"),
            Err(_) => warn!("persistence worker did not finish in time"),
        }
        rt.shutdown_timeout(timeout);
    }
}

async fn run_jobs(
    store: Arc<ScoreStore>,
    mut board: Leaderboard,
    mut job_rx: mpsc::UnboundedReceiver<ScoreRecord>,
    update_tx: mpsc::UnboundedSender<Leaderboard>,
) {
    while let Some(record) = job_rx.recv().await {
        let store = Arc::clone(&store);
        let score = record.score;
        let joined = tokio::task::spawn_blocking(move || {
            let rank = store.commit(&mut board, record);
            (board, rank)
        })
        .await;

        match joined {
            Ok((next, rank)) => {
                info!(score, rank, "score saved");
                board = next;
                if update_tx.send(board.clone()).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, "score commit panicked, stopping persistence");
                break;
            }
        }
    }
}
