//! Bidirectional cursor over one version of a [`PersistentSet`].
//!
//! [`PersistentSet`]: super::PersistentSet

use super::ReferenceCounter;
use super::node::{Link, Node};
use super::tree;
use std::fmt;
use std::ops::Deref;

/// A position inside one version of a [`PersistentSet`].
///
/// A cursor is either positioned at an element or at the end position,
/// which sits past the maximum and before the minimum. Stepping does not use
/// parent links: each step searches the version the cursor was taken from,
/// starting at its root, so a step costs O(depth).
///
/// The cursor keeps that version alive. Mutating the set it came from
/// afterwards creates a new version and leaves the cursor walking the old
/// one, so a cursor is never invalidated.
///
/// Two cursors are equal when they point at the same node (by identity, not
/// by value), or when both are at the end of the same version.
///
/// # Examples
///
/// ```rust
/// use persistent_set::persistent::PersistentSet;
///
/// let set: PersistentSet<i32> = [3, 1, 2].into_iter().collect();
///
/// let mut cursor = set.begin();
/// assert_eq!(*cursor, 1);
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(&2));
/// cursor.move_next();
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, set.end());
///
/// // Stepping back from the end yields the maximum
/// cursor.move_prev();
/// assert_eq!(*cursor, 3);
/// ```
///
/// [`PersistentSet`]: super::PersistentSet
pub struct Cursor<T> {
    /// Root of the version this cursor walks.
    snapshot: Link<T>,
    /// Current node, `None` at the end position.
    current: Link<T>,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(snapshot: Link<T>, current: Link<T>) -> Self {
        Self { snapshot, current }
    }

    /// Positions a cursor at `node`, which must belong to `snapshot`.
    pub(crate) const fn at(snapshot: Link<T>, node: ReferenceCounter<Node<T>>) -> Self {
        Self::new(snapshot, Some(node))
    }

    pub(crate) const fn end(snapshot: Link<T>) -> Self {
        Self::new(snapshot, None)
    }

    /// Returns `true` if the cursor is at the end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the element under the cursor, or `None` at the end position.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref().map(|node| &node.value)
    }

    fn same_snapshot(&self, other: &Self) -> bool {
        match (&self.snapshot, &other.snapshot) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Ord> Cursor<T> {
    /// Moves to the next element in ascending order.
    ///
    /// From the maximum the cursor moves to the end position; from the end
    /// position it wraps to the minimum. On an empty version the cursor stays
    /// at the end.
    pub fn move_next(&mut self) {
        let next = match &self.current {
            Some(node) => tree::successor(self.snapshot.as_ref(), &node.value),
            None => self.snapshot.as_ref().map(tree::leftmost),
        };
        self.current = next.cloned();
    }

    /// Moves to the previous element in ascending order.
    ///
    /// From the end position the cursor moves to the maximum; from the
    /// minimum it wraps to the end position.
    pub fn move_prev(&mut self) {
        let previous = match &self.current {
            Some(node) => tree::predecessor(self.snapshot.as_ref(), &node.value),
            None => self.snapshot.as_ref().map(tree::rightmost),
        };
        self.current = previous.cloned();
    }

    /// Returns a cursor at the next element, leaving this one in place.
    #[must_use]
    pub fn next_cursor(&self) -> Self {
        let mut next = self.clone();
        next.move_next();
        next
    }

    /// Returns a cursor at the previous element, leaving this one in place.
    #[must_use]
    pub fn prev_cursor(&self) -> Self {
        let mut previous = self.clone();
        previous.move_prev();
        previous
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self::new(self.snapshot.clone(), self.current.clone())
    }
}

/// Dereferences to the element under the cursor.
///
/// # Panics
///
/// Panics if the cursor is at the end position. Use [`Cursor::get`] for a
/// non-panicking alternative.
impl<T> Deref for Cursor<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("cannot dereference the end cursor"),
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.current, &other.current) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => self.same_snapshot(other),
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => formatter.debug_tuple("Cursor").field(value).finish(),
            None => formatter.write_str("Cursor(end)"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
