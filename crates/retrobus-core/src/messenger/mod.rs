//! # Messenger Module
//!
//! In-process publish/subscribe over named message groups.
//!
//! ## Overview
//!
//! - Components register once and receive a small integer [`ClientId`]
//! - Groups are created on first use of a name and live as long as the messenger
//! - Members are notified in list order; preempting members go to the front
//! - A send to a group that is already dispatching is dropped, never queued
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retrobus_core::messenger::Messenger;
//! use retrobus_core::types::notify;
//!
//! let bus: Messenger<i32> = Messenger::new();
//! let mixer = bus.register();
//! let window = bus.register();
//!
//! // The mixer owns the volume: it clamps before anyone else sees it
//! let volume = bus.preempt(mixer, "volume", notify(|_ty, v: &mut i32| *v = (*v).clamp(0, 100)));
//! bus.join(Some(window), "volume", Some(notify(|_ty, v: &mut i32| println!("volume {v}"))));
//!
//! let mut requested = 250;
//! bus.send(volume, Some(window), 0, &mut requested);
//! assert_eq!(requested, 100);
//! ```

mod bus;
mod client;
mod group;

pub use bus::*;
pub use client::ClientId;
pub use group::GroupId;
