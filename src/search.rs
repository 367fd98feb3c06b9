//! Game-tree search
//!
//! The engine explores every legal continuation without pruning or caching,
//! mutating and restoring a single board as it recurses.

pub mod minimax;

pub use minimax::{SearchEngine, SearchResult};
