//! # Retrobus Core
//!
//! The message-group bus shared by every emulator front-end.
//! Provides client registration, lazily created named groups, ordered
//! delivery with preemption, and the reentrancy guard that keeps a group
//! from being dispatched to while it is already dispatching.

pub mod error;
pub mod messenger;
pub mod types;

pub use error::{Error, Result};

pub use messenger::{ClientId, GroupId, Messenger};

// Re-export type aliases for convenience
pub use types::{
    notify, shared, shared_map, shared_vec, MessageType, Notify, Shared, SharedHashMap, SharedVec,
};
