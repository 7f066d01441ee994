//! Search history
//!
//! Places the user picked, most recent first, persisted as JSON.

mod matcher;
mod state;
pub mod storage;

pub use state::{HistoryState, MAX_VISIBLE_HISTORY};
pub use storage::HistoryEntry;
