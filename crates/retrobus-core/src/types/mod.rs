//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and the notify callback shape.

pub mod aliases;

pub use aliases::*;
