//! # Retrobus UI
//!
//! The UI state protocol built on the retrobus messenger.
//!
//! Each [`UiTag`] names one piece of synchronised state and owns one message
//! group. Subsystems preempt the tags they are authoritative for and resolve
//! requests with [`adjust_value_range`]; front-ends join the tags they
//! display and publish changes with [`UiBus::update_state`].

pub mod adjust;
pub mod bus;
pub mod state;
pub mod tag;

pub use adjust::{adjust_value_range, AdjustFlags};
pub use bus::UiBus;
pub use state::{DiskInfo, StateData, StateMessage, AUTO, NEXT, PREV};
pub use tag::UiTag;

// Re-export the messenger handles front-ends need alongside the bus
pub use retrobus_core::{ClientId, GroupId};
