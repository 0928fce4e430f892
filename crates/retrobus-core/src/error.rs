//! Error handling for retrobus
//!
//! The messenger itself never fails: operations on unknown clients or groups
//! are silent no-ops. The errors here come from parsing user input in the
//! layers around it: front-end commands and configuration keys. File I/O is
//! reported by the settings crate.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for retrobus
///
/// A unified error type shared by the UI, settings and front-end crates.
#[derive(Error, Debug)]
pub enum Error {
    /// A state tag name did not match any known tag
    #[error("Unknown state tag: {name}")]
    UnknownTag {
        /// The name that failed to resolve.
        name: String,
    },

    /// A value could not be interpreted for a tag
    #[error("Invalid value '{value}' for {tag}")]
    InvalidValue {
        /// The tag the value was meant for.
        tag: String,
        /// The rejected input.
        value: String,
    },

    /// A front-end command could not be parsed
    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand {
        /// The raw command line.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
