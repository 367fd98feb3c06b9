//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The core (board and search engine) knows nothing about where moves come
//! from or where results go. Agents supply moves; observers receive events.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::{GameObserver, SilentObserver};
