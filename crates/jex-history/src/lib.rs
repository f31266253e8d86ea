//! Recent-files history for the JSON editor.
//!
//! Saving a document records a capped, versioned snapshot list: the same
//! file name saved twice becomes "name (v2)", entries are newest first,
//! and only the [`MAX_ENTRIES`] most recent survive. [`HistoryStore`] is
//! the contract; [`MemoryHistory`] backs a single session and
//! [`FileHistory`] persists across restarts with atomic file rewrites.

mod file_store;
mod memory_store;
mod traits;
mod types;

pub use file_store::FileHistory;
pub use memory_store::MemoryHistory;
pub use traits::HistoryStore;
pub use types::{HistoryEntry, HistoryError, MAX_ENTRIES};
