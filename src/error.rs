use thiserror::Error;

/// The index handed to `insert`, `set` or `remove_at` falls outside the
/// collection's valid range.
///
/// This is the only error the crate raises, and it marks a caller bug: every
/// condition under which an operation legitimately has nothing to return
/// (empty list, absent value, out-of-range read) is an `Option::None`
/// instead. Bounds are checked before any mutation, so a failed call leaves
/// the collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of bounds")]
pub struct OutOfBoundsError;
