//! Single-writer queue in front of the history store
//!
//! All reads and writes go through one background task, so each
//! read/modify/rewrite cycle finishes before the next begins. Requests are
//! handled in FIFO order: a `list` submitted after an `append` sees it.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::entry::HistoryEntry;
use super::store::HistoryStore;
use crate::error::{Error, Result};

#[derive(Debug)]
enum HistoryCommand {
    List {
        response_tx: oneshot::Sender<Result<Vec<HistoryEntry>>>,
    },
    Append {
        entry: HistoryEntry,
        /// `None` for fire-and-forget appends
        response_tx: Option<oneshot::Sender<Result<()>>>,
    },
    Remove {
        timestamp: String,
        response_tx: oneshot::Sender<Result<usize>>,
    },
    /// Stop after everything queued ahead of it has been handled
    Shutdown { response_tx: oneshot::Sender<()> },
}

/// Handle to the history worker; cheap to clone
#[derive(Clone)]
pub struct HistoryQueue {
    tx: mpsc::UnboundedSender<HistoryCommand>,
    _worker_handle: Arc<JoinHandle<()>>,
}

impl HistoryQueue {
    /// Spawn the worker that owns `store`
    ///
    /// Must be called from within a tokio runtime. The worker exits once every
    /// handle has been dropped or [`HistoryQueue::shutdown`] is called.
    pub fn new(store: HistoryStore) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<HistoryCommand>();

        let worker_handle = tokio::spawn(async move {
            info!("History worker started for {}", store.path().display());
            let mut appended = 0usize;
            let mut shutdown_tx = None;

            while let Some(command) = rx.recv().await {
                match command {
                    HistoryCommand::List { response_tx } => {
                        let _ = response_tx.send(store.list().await);
                    }
                    HistoryCommand::Append { entry, response_tx } => {
                        let timestamp = entry.timestamp.clone();
                        let result = store.append(entry).await;
                        match &result {
                            Ok(()) => {
                                appended += 1;
                                debug!("Recorded history entry {}", timestamp);
                            }
                            Err(e) => error!("Error writing to history file: {}", e),
                        }
                        // Callers that did not wait have nothing to receive it.
                        if let Some(response_tx) = response_tx {
                            let _ = response_tx.send(result);
                        }
                    }
                    HistoryCommand::Remove {
                        timestamp,
                        response_tx,
                    } => {
                        let result = store.remove(&timestamp).await;
                        if let Ok(removed) = &result {
                            debug!("Removed {} history entries for {}", removed, timestamp);
                        }
                        let _ = response_tx.send(result);
                    }
                    HistoryCommand::Shutdown { response_tx } => {
                        shutdown_tx = Some(response_tx);
                        break;
                    }
                }
            }

            info!(
                "History worker shutting down (recorded {} entries)",
                appended
            );
            if let Some(response_tx) = shutdown_tx {
                let _ = response_tx.send(());
            }
        });

        Self {
            tx,
            _worker_handle: Arc::new(worker_handle),
        }
    }

    /// Queue `entry` for appending without waiting for the write
    ///
    /// The outcome is only logged.
    pub fn submit_append(&self, entry: HistoryEntry) {
        let command = HistoryCommand::Append {
            entry,
            response_tx: None,
        };
        if self.tx.send(command).is_err() {
            error!("History worker is gone; entry dropped");
        }
    }

    /// Append `entry` and wait until it has been written
    pub async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(HistoryCommand::Append {
            entry,
            response_tx: Some(response_tx),
        })
        .map_err(Error::StorageWrite)?;
        response_rx.await.map_err(|_| worker_gone(Error::StorageWrite))?
    }

    /// Read the full log
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(HistoryCommand::List { response_tx })
            .map_err(Error::StorageRead)?;
        response_rx.await.map_err(|_| worker_gone(Error::StorageRead))?
    }

    /// Remove every entry stamped `timestamp`, returning how many were removed
    pub async fn remove(&self, timestamp: &str) -> Result<usize> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(HistoryCommand::Remove {
            timestamp: timestamp.to_string(),
            response_tx,
        })
        .map_err(Error::StorageWrite)?;
        response_rx.await.map_err(|_| worker_gone(Error::StorageWrite))?
    }

    /// Drain every command queued so far, then stop the worker
    ///
    /// Pending fire-and-forget appends are written before this returns.
    /// Commands sent afterwards through any clone fail with a storage error.
    pub async fn shutdown(&self) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(HistoryCommand::Shutdown { response_tx })
            .map_err(Error::StorageWrite)?;
        response_rx
            .await
            .map_err(|_| worker_gone(Error::StorageWrite))
    }

    fn send(&self, command: HistoryCommand) -> std::result::Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "history worker is not running".to_string())
    }
}

fn worker_gone(kind: fn(String) -> Error) -> Error {
    kind("history worker stopped before replying".to_string())
}
