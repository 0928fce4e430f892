//! Type aliases for commonly used complex types.
//!
//! Everything on the bus runs on one thread, so the shared types here are
//! `Rc<RefCell<T>>` based. Receivers capture these in their notify closures
//! to keep whatever state they need between messages.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retrobus_core::types::*;
//!
//! let last_seen: Shared<i32> = shared(0);
//! let seen = last_seen.clone();
//! bus.join(Some(client), "video", Some(notify(move |_ty, value: &mut i32| {
//!     *seen.borrow_mut() = *value;
//! })));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// This is the fundamental building block for receiver state.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A shared hash map for single-threaded key-value storage.
pub type SharedHashMap<K, V> = Rc<RefCell<HashMap<K, V>>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// Integer message type carried alongside every payload.
pub type MessageType = i32;

/// A member's notify callback.
///
/// Receives the message type and the sender's payload. The payload is
/// borrowed mutably so that an early receiver may rewrite what later
/// receivers observe.
pub type Notify<P> = Rc<dyn Fn(MessageType, &mut P)>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new empty `SharedVec<T>`.
#[inline]
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Create a new empty `SharedHashMap<K, V>`.
#[inline]
pub fn shared_map<K, V>() -> SharedHashMap<K, V> {
    Rc::new(RefCell::new(HashMap::new()))
}

/// Box a closure into a [`Notify`] callback.
#[inline]
pub fn notify<P, F>(f: F) -> Notify<P>
where
    F: Fn(MessageType, &mut P) + 'static,
{
    Rc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_creation() {
        let value: Shared<i32> = shared(42);
        assert_eq!(*value.borrow(), 42);

        *value.borrow_mut() = 100;
        assert_eq!(*value.borrow(), 100);
    }

    #[test]
    fn test_shared_vec() {
        let vec: SharedVec<String> = shared_vec();
        vec.borrow_mut().push("item1".to_string());
        vec.borrow_mut().push("item2".to_string());

        assert_eq!(vec.borrow().len(), 2);
    }

    #[test]
    fn test_shared_map() {
        let map: SharedHashMap<String, i32> = shared_map();
        map.borrow_mut().insert("key1".to_string(), 1);

        assert_eq!(map.borrow().get("key1"), Some(&1));
    }

    #[test]
    fn test_notify_rewrites_payload() {
        let doubler: Notify<i32> = notify(|_ty, value: &mut i32| *value *= 2);

        let mut payload = 21;
        doubler(0, &mut payload);
        assert_eq!(payload, 42);
    }
}
