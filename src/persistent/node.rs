//! Tree cells shared between set versions.

use super::ReferenceCounter;
use smallvec::SmallVec;

/// Inline capacity of the stack used while tearing down a subtree.
const TEARDOWN_INLINE_CAPACITY: usize = 16;

/// An optional shared reference to a subtree.
pub(crate) type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// A binary search tree node.
///
/// Fields are written once, at construction. Any number of set versions may
/// hold references to the same node.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with no children.
    pub(crate) const fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    pub(crate) const fn new(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// Copies this node with a replaced left subtree; the right subtree is shared.
    pub(crate) fn with_left(&self, left: Link<T>) -> Self
    where
        T: Clone,
    {
        Self::new(self.value.clone(), left, self.right.clone())
    }

    /// Copies this node with a replaced right subtree; the left subtree is shared.
    pub(crate) fn with_right(&self, right: Link<T>) -> Self
    where
        T: Clone,
    {
        Self::new(self.value.clone(), self.left.clone(), right)
    }
}

/// Releases the subtree iteratively.
///
/// A child whose last reference is held by this node is unwrapped and its own
/// children are queued, so a list-shaped tree of any depth is freed without
/// recursing. Children still referenced by another version are only
/// decremented.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending: SmallVec<[ReferenceCounter<Self>; TEARDOWN_INLINE_CAPACITY]> =
            SmallVec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(child) = pending.pop() {
            if let Some(mut orphan) = ReferenceCounter::into_inner(child) {
                pending.extend(orphan.left.take());
                pending.extend(orphan.right.take());
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
