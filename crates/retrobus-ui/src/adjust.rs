//! Range adjustment
//!
//! Resolves the sentinel commands a state message may carry against a
//! bounded integer domain. Called by whichever client owns a tag, before
//! the message reaches passive listeners.

use std::ops::BitOr;

use crate::state::{StateMessage, AUTO, NEXT, PREV};

/// Options for [`adjust_value_range`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AdjustFlags(u32);

impl AdjustFlags {
    /// No special handling: out-of-range results are clamped.
    pub const NONE: Self = Self(0);
    /// Stepping past either end wraps to the other end.
    pub const CYCLE: Self = Self(1 << 0);
    /// Leave [`AUTO`] in the message while returning the default.
    pub const KEEP_AUTO: Self = Self(1 << 1);

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Both sets of flags combined.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for AdjustFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Resolve a message value into `[min, max]`.
///
/// With a non-negative `min`, [`NEXT`] and [`PREV`] step from `current`,
/// wrapping when [`AdjustFlags::CYCLE`] is set, and [`AUTO`] selects
/// `default`. A negative `min` overlaps the sentinel encoding, so the raw
/// value is taken literally.
///
/// The result is clamped, written back into the message (except for a kept
/// [`AUTO`]) and returned.
pub fn adjust_value_range(
    msg: &mut StateMessage,
    current: i32,
    default: i32,
    min: i32,
    max: i32,
    flags: AdjustFlags,
) -> i32 {
    let mut value = msg.value;
    let mut keep_auto = false;

    if min >= 0 {
        match value {
            NEXT => {
                value = current.saturating_add(1);
                if flags.contains(AdjustFlags::CYCLE) && value > max {
                    value = min;
                }
            }
            PREV => {
                value = current.saturating_sub(1);
                if flags.contains(AdjustFlags::CYCLE) && value < min {
                    value = max;
                }
            }
            AUTO => {
                value = default;
                keep_auto = flags.contains(AdjustFlags::KEEP_AUTO);
            }
            _ => {}
        }
    }

    let value = value.max(min).min(max);
    if !keep_auto {
        msg.value = value;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(value: i32) -> StateMessage {
        StateMessage::new(value, None)
    }

    #[test]
    fn test_next_steps_up() {
        let mut m = msg(NEXT);
        assert_eq!(adjust_value_range(&mut m, 3, 0, 0, 5, AdjustFlags::CYCLE), 4);
        assert_eq!(m.value, 4);
    }

    #[test]
    fn test_next_wraps_with_cycle() {
        let mut m = msg(NEXT);
        assert_eq!(adjust_value_range(&mut m, 5, 0, 0, 5, AdjustFlags::CYCLE), 0);
        assert_eq!(m.value, 0);
    }

    #[test]
    fn test_next_clamps_without_cycle() {
        let mut m = msg(NEXT);
        assert_eq!(adjust_value_range(&mut m, 5, 0, 0, 5, AdjustFlags::NONE), 5);
        assert_eq!(m.value, 5);
    }

    #[test]
    fn test_prev_wraps_with_cycle() {
        let mut m = msg(PREV);
        assert_eq!(adjust_value_range(&mut m, 0, 0, 0, 5, AdjustFlags::CYCLE), 5);
        assert_eq!(m.value, 5);
    }

    #[test]
    fn test_prev_clamps_without_cycle() {
        let mut m = msg(PREV);
        assert_eq!(adjust_value_range(&mut m, 0, 0, 0, 5, AdjustFlags::NONE), 0);
    }

    #[test]
    fn test_auto_keeps_sentinel() {
        let mut m = msg(AUTO);
        assert_eq!(
            adjust_value_range(&mut m, 2, 9, 0, 20, AdjustFlags::KEEP_AUTO),
            9
        );
        assert_eq!(m.value, AUTO);
    }

    #[test]
    fn test_auto_without_keep_writes_default() {
        let mut m = msg(AUTO);
        assert_eq!(adjust_value_range(&mut m, 2, 9, 0, 20, AdjustFlags::NONE), 9);
        assert_eq!(m.value, 9);
    }

    #[test]
    fn test_auto_default_is_clamped() {
        let mut m = msg(AUTO);
        assert_eq!(
            adjust_value_range(&mut m, 2, 40, 0, 20, AdjustFlags::KEEP_AUTO),
            20
        );
        assert_eq!(m.value, AUTO);
    }

    #[test]
    fn test_concrete_value_clamped() {
        let mut m = msg(99);
        assert_eq!(adjust_value_range(&mut m, 0, 0, 1, 8, AdjustFlags::CYCLE), 8);
        assert_eq!(m.value, 8);
    }

    #[test]
    fn test_negative_min_takes_sentinels_literally() {
        let mut m = msg(NEXT);
        assert_eq!(
            adjust_value_range(&mut m, 10, 0, -179, 180, AdjustFlags::CYCLE),
            NEXT
        );
        assert_eq!(m.value, NEXT);

        let mut m = msg(AUTO);
        assert_eq!(
            adjust_value_range(&mut m, 10, 0, -2, 5, AdjustFlags::KEEP_AUTO),
            -2
        );
        assert_eq!(m.value, -2);
    }

    #[test]
    fn test_flags_combine() {
        let flags = AdjustFlags::CYCLE | AdjustFlags::KEEP_AUTO;
        assert!(flags.contains(AdjustFlags::CYCLE));
        assert!(flags.contains(AdjustFlags::KEEP_AUTO));
        assert!(!AdjustFlags::CYCLE.contains(AdjustFlags::KEEP_AUTO));
        assert!(AdjustFlags::NONE.contains(AdjustFlags::NONE));
    }
}
