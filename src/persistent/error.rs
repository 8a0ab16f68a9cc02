//! Error types for cursor-based operations.

use std::fmt;

/// Represents a cursor that cannot be used to erase from a set.
///
/// # Examples
///
/// ```rust
/// use persistent_set::persistent::{CursorError, PersistentSet};
///
/// let mut set: PersistentSet<i32> = PersistentSet::new();
/// assert_eq!(set.erase(set.end()), Err(CursorError::End));
/// assert_eq!(
///     format!("{}", CursorError::End),
///     "cursor is positioned at the end and denotes no element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor is the end cursor.
    End,
    /// The element the cursor denotes is not part of the set being modified.
    ///
    /// This happens with cursors taken from an unrelated set, or from a
    /// version of this set in which the element has since been erased.
    NotInSet,
}

impl fmt::Display for CursorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(
                formatter,
                "cursor is positioned at the end and denotes no element"
            ),
            Self::NotInSet => write!(
                formatter,
                "cursor denotes an element that is not in this set"
            ),
        }
    }
}

impl std::error::Error for CursorError {}
