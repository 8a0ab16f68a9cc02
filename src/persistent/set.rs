//! Persistent (immutable) ordered set based on an unbalanced binary search tree.
//!
//! This module provides [`PersistentSet`], an ordered set in which every
//! handle is an independent version. Inserting into or erasing from a handle
//! rebinds that handle to a new tree and leaves every other handle, including
//! clones taken earlier, observably unchanged.
//!
//! # Overview
//!
//! - O(depth) `find`, `insert`, `erase`
//! - O(depth) cursor steps, each re-searching from the root
//! - O(1) `clone`, `len` and `is_empty`
//!
//! The tree is not rebalanced. Inserting values in ascending order yields a
//! tree whose depth equals its size.
//!
//! # Examples
//!
//! ```rust
//! use persistent_set::persistent::PersistentSet;
//!
//! let mut set = PersistentSet::new();
//! set.insert(5);
//! set.insert(3);
//! set.insert(7);
//!
//! let before = set.clone();
//! set.remove(&5);
//!
//! let values: Vec<&i32> = set.iter().collect();
//! assert_eq!(values, vec![&3, &7]);
//!
//! let values: Vec<&i32> = before.iter().collect();
//! assert_eq!(values, vec![&3, &5, &7]);
//! ```
//!
//! # Internal Structure
//!
//! Each handle owns an anchor whose single child slot holds the root of its
//! tree. Nodes are reference counted and never modified after construction,
//! so any number of anchors may point into the same nodes.

use super::cursor::Cursor;
use super::error::CursorError;
use super::node::{Link, Node};
use super::tree::{self, Insertion};
use super::ReferenceCounter;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

// =============================================================================
// Anchor Definition
// =============================================================================

/// The valueless cell a handle owns.
///
/// Its child slot is the real root, absent when the set is empty. The end
/// position of every cursor taken from the handle corresponds to the anchor.
struct Anchor<T> {
    root: Link<T>,
}

impl<T> Anchor<T> {
    const fn empty() -> Self {
        Self { root: None }
    }

    /// A fresh anchor aliasing the same tree.
    fn alias(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

// =============================================================================
// PersistentSet Definition
// =============================================================================

/// A persistent ordered set with structural sharing.
///
/// Cloning a set is O(1) and produces an independent version: the clone and
/// the original share every node, and later changes to either one copy only
/// the nodes on the path they touch.
///
/// Elements must implement `Ord`; mutating operations also require `Clone`
/// because path copying duplicates the values along the modified path.
///
/// # Time Complexity
///
/// | Operation            | Complexity  |
/// |----------------------|-------------|
/// | `new`                | O(1)        |
/// | `clone`              | O(1)        |
/// | `find` / `contains`  | O(depth)    |
/// | `insert`             | O(depth)    |
/// | `erase` / `remove`   | O(depth)    |
/// | `begin` / `first`    | O(depth)    |
/// | `end`                | O(1)        |
/// | `len` / `is_empty`   | O(1)        |
///
/// # Examples
///
/// ```rust
/// use persistent_set::persistent::PersistentSet;
///
/// let mut set = PersistentSet::new();
/// let (cursor, inserted) = set.insert(42);
/// assert!(inserted);
/// assert_eq!(*cursor, 42);
///
/// // Inserting again is a no-op
/// let (_, inserted) = set.insert(42);
/// assert!(!inserted);
/// assert_eq!(set.len(), 1);
/// ```
pub struct PersistentSet<T> {
    anchor: Anchor<T>,
    /// Number of elements
    length: usize,
}

impl<T> PersistentSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<i32> = PersistentSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.begin(), set.end());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchor: Anchor::empty(),
            length: 0,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a cursor at the minimum element, or the end cursor if the set
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(*set.begin(), 1);
    /// ```
    #[must_use]
    pub fn begin(&self) -> Cursor<T> {
        match self.anchor.root.as_ref() {
            Some(root) => Cursor::at(self.anchor.root.clone(), tree::leftmost(root).clone()),
            None => self.end(),
        }
    }

    /// Returns the end cursor.
    ///
    /// The end cursor denotes no element. Stepping it backwards yields the
    /// maximum.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Cursor<T> {
        Cursor::end(self.anchor.root.clone())
    }

    /// Returns the minimum element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(PersistentSet::<i32>::new().first(), None);
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.anchor
            .root
            .as_ref()
            .map(|root| &tree::leftmost(root).value)
    }

    /// Returns the maximum element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.anchor
            .root
            .as_ref()
            .map(|root| &tree::rightmost(root).value)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<i32> = [3, 1, 2].into_iter().collect();
    /// let ascending: Vec<i32> = set.iter().copied().collect();
    /// let descending: Vec<i32> = set.iter().rev().copied().collect();
    /// assert_eq!(ascending, vec![1, 2, 3]);
    /// assert_eq!(descending, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentSetIterator<'_, T> {
        PersistentSetIterator::new(self.anchor.root.as_ref(), self.length)
    }
}

impl<T: Ord> PersistentSet<T> {
    /// Returns a cursor at the element equal to `value`, or the end cursor if
    /// there is none.
    ///
    /// The value may be any borrowed form of the element type, but the
    /// ordering on the borrowed form must match the ordering on the element
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let set: PersistentSet<String> =
    ///     ["apple".to_string(), "pear".to_string()].into_iter().collect();
    ///
    /// assert_eq!(set.find("pear").get().map(String::as_str), Some("pear"));
    /// assert_eq!(set.find("plum"), set.end());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Cursor<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match tree::find(self.anchor.root.as_ref(), value) {
            Some(node) => Cursor::at(self.anchor.root.clone(), node.clone()),
            None => self.end(),
        }
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::find(self.anchor.root.as_ref(), value).is_some()
    }
}

impl<T: Clone + Ord> PersistentSet<T> {
    /// Inserts `value` into this version of the set.
    ///
    /// Returns a cursor at the element and `true` if it was inserted. If an
    /// equal element is already present the set is left untouched and the
    /// cursor points at the existing element, paired with `false`.
    ///
    /// Only the nodes on the path from the root to the new leaf are copied.
    /// Other handles that share nodes with this one are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let mut set = PersistentSet::new();
    /// set.insert(1);
    /// let snapshot = set.clone();
    ///
    /// let (cursor, inserted) = set.insert(2);
    /// assert!(inserted);
    /// assert_eq!(*cursor, 2);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(snapshot.len(), 1); // Original unchanged
    /// ```
    pub fn insert(&mut self, value: T) -> (Cursor<T>, bool) {
        let (root, leaf) = match tree::insert(self.anchor.root.as_ref(), value) {
            Insertion::Existing(node) => {
                return (Cursor::at(self.anchor.root.clone(), node.clone()), false);
            }
            Insertion::Inserted { root, leaf } => (root, leaf),
        };
        self.anchor.root = root;
        self.length += 1;
        (Cursor::at(self.anchor.root.clone(), leaf), true)
    }

    /// Erases the element the cursor denotes from this version of the set.
    ///
    /// Only the cursor's element is used: the removal searches this set from
    /// its root by value. A node with two children is replaced by a copy
    /// holding its in-order successor.
    ///
    /// The cursor may come from an earlier version of this set, as long as
    /// its element is still present here.
    ///
    /// # Errors
    ///
    /// - [`CursorError::End`] if `cursor` is an end cursor.
    /// - [`CursorError::NotInSet`] if the cursor's element is not in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let mut set: PersistentSet<i32> = [1, 2, 3].into_iter().collect();
    /// set.erase(set.begin()).unwrap();
    ///
    /// assert_eq!(*set.begin(), 2);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn erase(&mut self, cursor: Cursor<T>) -> Result<(), CursorError> {
        let value = cursor.get().ok_or(CursorError::End)?;
        if !self.contains(value) {
            return Err(CursorError::NotInSet);
        }
        self.anchor.root = tree::erase(self.anchor.root.as_ref(), value);
        self.length -= 1;
        Ok(())
    }

    /// Removes the element equal to `value`, returning `true` if it was
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_set::persistent::PersistentSet;
    ///
    /// let mut set: PersistentSet<i32> = [1, 2].into_iter().collect();
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains(value) {
            return false;
        }
        self.anchor.root = tree::erase(self.anchor.root.as_ref(), value);
        self.length -= 1;
        true
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentSet`] in ascending order.
///
/// The iterator keeps two explicit stacks, one for each end, so it walks
/// trees of any depth without recursion.
pub struct PersistentSetIterator<'a, T> {
    front: Vec<&'a Node<T>>,
    back: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PersistentSetIterator<'a, T> {
    fn new(root: Option<&'a ReferenceCounter<Node<T>>>, length: usize) -> Self {
        let mut iterator = Self {
            front: Vec::new(),
            back: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator.push_right_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
        while let Some(current) = node {
            self.front.push(current);
            node = current.left.as_ref();
        }
    }

    fn push_right_spine(&mut self, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
        while let Some(current) = node {
            self.back.push(current);
            node = current.right.as_ref();
        }
    }
}

impl<'a, T> Iterator for PersistentSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_spine(node.right.as_ref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for PersistentSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_right_spine(node.left.as_ref());
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for PersistentSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for PersistentSetIterator<'_, T> {}

/// An owning iterator over the elements of a [`PersistentSet`].
///
/// Nodes may be shared with other versions, so elements are cloned out.
pub struct PersistentSetIntoIterator<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> Iterator for PersistentSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for PersistentSetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for PersistentSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Creates a new version sharing every node with `self`.
impl<T> Clone for PersistentSet<T> {
    fn clone(&self) -> Self {
        Self {
            anchor: self.anchor.alias(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PersistentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Clone + Ord> Extend<T> for PersistentSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Clone> IntoIterator for PersistentSet<T> {
    type Item = T;
    type IntoIter = PersistentSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<T> = self.iter().cloned().collect();
        PersistentSetIntoIterator {
            elements: elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        if let (Some(left), Some(right)) = (&self.anchor.root, &other.anchor.root)
            && ReferenceCounter::ptr_eq(left, right)
        {
            return true;
        }
        // Both sides iterate in ascending order
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentSet<T> {}

/// Hashes the length followed by each element in ascending order, so equal
/// sets hash equally regardless of insertion order.
impl<T: Hash> Hash for PersistentSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentSet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Cursor<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentSet<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Cursor<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = PersistentSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = PersistentSet::new();
        while let Some(element) = access.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentSet<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn root(set: &PersistentSet<i32>) -> &ReferenceCounter<Node<i32>> {
        set.anchor.root.as_ref().unwrap()
    }

    fn same(left: &Link<i32>, right: &Link<i32>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Checks the ordering invariant with an explicit stack of open bounds.
    fn is_search_tree(set: &PersistentSet<i32>) -> bool {
        let mut pending = vec![(set.anchor.root.as_ref(), None::<i32>, None::<i32>)];
        while let Some((node, lower, upper)) = pending.pop() {
            let Some(node) = node else { continue };
            if lower.is_some_and(|lower| node.value <= lower)
                || upper.is_some_and(|upper| node.value >= upper)
            {
                return false;
            }
            pending.push((node.left.as_ref(), lower, Some(node.value)));
            pending.push((node.right.as_ref(), Some(node.value), upper));
        }
        true
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: PersistentSet<i32> = PersistentSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_sorted() {
        let set: PersistentSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{set}"), "{1, 2, 3}");
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    // =========================================================================
    // Structure Tests
    // =========================================================================

    #[rstest]
    fn test_clone_shares_root() {
        let set: PersistentSet<i32> = [2, 1, 3].into_iter().collect();
        let copy = set.clone();
        assert!(same(&set.anchor.root, &copy.anchor.root));
    }

    #[rstest]
    fn test_insert_on_copy_shares_untouched_subtrees() {
        let original: PersistentSet<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        let mut copy = original.clone();
        copy.insert(65);

        let before = root(&original);
        let after = root(&copy);
        assert!(!ReferenceCounter::ptr_eq(before, after));
        // Left subtree of the root is off the path
        assert!(same(&before.left, &after.left));

        let before_right = before.right.as_ref().unwrap();
        let after_right = after.right.as_ref().unwrap();
        assert!(!ReferenceCounter::ptr_eq(before_right, after_right));
        // 80 is off the path, 60 is on it
        assert!(same(&before_right.right, &after_right.right));
        assert!(!same(&before_right.left, &after_right.left));
        assert!(same(
            &before_right.left.as_ref().unwrap().left,
            &after_right.left.as_ref().unwrap().left
        ));
    }

    #[rstest]
    fn test_duplicate_insert_keeps_node_identities() {
        let mut set: PersistentSet<i32> = [2, 1, 3].into_iter().collect();
        let before = set.anchor.root.clone();
        let (cursor, inserted) = set.insert(3);

        assert!(!inserted);
        assert_eq!(*cursor, 3);
        assert!(same(&before, &set.anchor.root));
    }

    #[rstest]
    fn test_erase_two_children_moves_successor_to_root() {
        let mut set: PersistentSet<i32> = [5, 3, 7].into_iter().collect();
        set.erase(set.find(&5)).unwrap();

        assert_eq!(root(&set).value, 7);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[rstest]
    fn test_erase_keeps_search_tree_invariant() {
        let mut set: PersistentSet<i32> = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7].into_iter().collect();
        for value in [4, 8, 1, 12, 7] {
            assert!(set.remove(&value));
            assert!(is_search_tree(&set));
        }
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 3, 5, 6, 10, 14]);
    }

    #[rstest]
    fn test_iterator_meets_in_the_middle() {
        let set: PersistentSet<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let mut iterator = set.iter();
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next_back(), Some(&7));
        assert_eq!(iterator.len(), 5);
        let middle: Vec<&i32> = iterator.by_ref().collect();
        assert_eq!(middle, vec![&2, &3, &4, &5, &6]);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next_back(), None);
    }

    #[rstest]
    fn test_equal_sets_with_different_shapes() {
        let ascending: PersistentSet<i32> = [1, 2, 3].into_iter().collect();
        let balanced: PersistentSet<i32> = [2, 1, 3].into_iter().collect();
        assert!(!same(&ascending.anchor.root, &balanced.anchor.root));
        assert_eq!(ascending, balanced);
    }

    #[rstest]
    fn test_deep_tree_drops_without_recursion() {
        let mut set = PersistentSet::new();
        for value in 0..5_000 {
            set.insert(value);
        }
        assert_eq!(set.len(), 5_000);
        assert_eq!(set.last(), Some(&4_999));
        drop(set);
    }
}
