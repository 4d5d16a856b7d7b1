//! Persisted generation history
//!
//! Every successful generation is recorded as a [`HistoryEntry`] in a single,
//! human-readable JSON file holding an array of entries in insertion order.
//! The file is rewritten as a whole on every mutation.
//!
//! # Architecture
//!
//! - [`HistoryStore`] - read/modify/rewrite cycles against the JSON file
//! - [`HistoryQueue`] - single background task that owns the store and applies
//!   requests one at a time, so concurrent appends and deletes cannot overwrite
//!   each other
//! - [`HistoryEntry`] - one recorded request/response pair
//!
//! Entries are keyed by their `timestamp`. Removing a timestamp removes every
//! entry carrying it; stamps have millisecond resolution, so two entries
//! written within the same millisecond would be removed together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use prompt_forge::history::{HistoryEntry, HistoryQueue, HistoryStore};
//! use prompt_forge::templates::TemplateKey;
//!
//! # async fn example() -> prompt_forge::error::Result<()> {
//! let queue = HistoryQueue::new(HistoryStore::new("prompt-history.json"));
//!
//! let entry = HistoryEntry::new("a red fox", None, TemplateKey::Realistic, "A fox...");
//! let timestamp = entry.timestamp.clone();
//! queue.append(entry).await?;
//!
//! assert_eq!(queue.list().await?.len(), 1);
//! queue.remove(&timestamp).await?;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod queue;
pub mod store;
#[cfg(test)]
mod tests;

pub use entry::HistoryEntry;
pub use queue::HistoryQueue;
pub use store::HistoryStore;

/// Default history file name, relative to the working directory
pub const DEFAULT_HISTORY_FILE: &str = "prompt-history.json";
