//! State messages
//!
//! The payload carried by every tag group: an integer value plus optional
//! typed data. The value may hold one of the sentinel commands below instead
//! of a concrete number; the owner of the tag resolves it (see
//! [`adjust_value_range`](crate::adjust_value_range)).

use std::path::PathBuf;

/// Request the next value.
pub const NEXT: i32 = -1;
/// Request the previous value.
pub const PREV: i32 = -2;
/// Request the default value.
pub const AUTO: i32 = -3;

/// Drive information carried with disk messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskInfo {
    /// Drive number
    pub drive: u32,
    /// Image file backing the drive, if any
    pub filename: Option<PathBuf>,
    /// Whether writes to the disk are allowed
    pub write_enable: bool,
    /// Whether writes are flushed back to the image file
    pub write_back: bool,
}

/// Typed data accompanying a state value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateData {
    /// Free text (layout names, pipe commands...)
    Text(String),
    /// A file system path (tape, cartridge, printer file...)
    Path(PathBuf),
    /// A secondary integer (drive number, port...)
    Int(i32),
    /// Drive state
    Disk(DiskInfo),
}

/// Message sent to a tag's group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMessage {
    /// Concrete value or one of [`NEXT`], [`PREV`], [`AUTO`]
    pub value: i32,
    /// Optional tag-specific data
    pub data: Option<StateData>,
}

impl StateMessage {
    /// Create a message
    pub fn new(value: i32, data: Option<StateData>) -> Self {
        Self { value, data }
    }

    /// Check whether the value is a sentinel rather than a concrete number
    ///
    /// Only meaningful for tags whose domain is non-negative.
    pub fn is_command(&self) -> bool {
        matches!(self.value, NEXT | PREV | AUTO)
    }

    /// Text data, if the message carries any
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            Some(StateData::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Path data, if the message carries any
    pub fn path(&self) -> Option<&PathBuf> {
        match &self.data {
            Some(StateData::Path(path)) => Some(path),
            _ => None,
        }
    }

    /// Drive data, if the message carries any
    pub fn disk(&self) -> Option<&DiskInfo> {
        match &self.data {
            Some(StateData::Disk(info)) => Some(info),
            _ => None,
        }
    }
}
