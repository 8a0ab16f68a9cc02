//! Path-copying search tree algorithms.
//!
//! Every function here takes a subtree that may be shared with other set
//! versions and never modifies it. Mutating operations return a new subtree
//! that references every untouched child of the input.
//!
//! Descent is iterative: the nodes visited on the way down are recorded on an
//! explicit path stack and the replacement spine is rebuilt bottom-up from it,
//! so the depth of an unbalanced tree never translates into call-stack depth.

use super::ReferenceCounter;
use super::node::{Link, Node};
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Inline capacity of the descent path; deeper paths spill to the heap.
const PATH_INLINE_CAPACITY: usize = 32;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

type Path<'a, T> = SmallVec<[(&'a ReferenceCounter<Node<T>>, Side); PATH_INLINE_CAPACITY]>;

/// Outcome of [`insert`].
pub(crate) enum Insertion<'a, T> {
    /// The value was already present; the tree is unchanged.
    Existing(&'a ReferenceCounter<Node<T>>),
    /// A new version was built.
    Inserted {
        root: Link<T>,
        leaf: ReferenceCounter<Node<T>>,
    },
}

/// Returns the node holding `value`, if any.
pub(crate) fn find<'a, T, Q>(
    root: Option<&'a ReferenceCounter<Node<T>>>,
    value: &Q,
) -> Option<&'a ReferenceCounter<Node<T>>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut current = root;
    while let Some(node) = current {
        current = match value.cmp(node.value.borrow()) {
            Ordering::Less => node.left.as_ref(),
            Ordering::Greater => node.right.as_ref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Inserts `value`, copying one node per level on the path to the new leaf.
pub(crate) fn insert<T>(root: Option<&ReferenceCounter<Node<T>>>, value: T) -> Insertion<'_, T>
where
    T: Clone + Ord,
{
    let mut path: Path<'_, T> = SmallVec::new();
    let mut current = root;
    while let Some(node) = current {
        match value.cmp(&node.value) {
            Ordering::Less => {
                path.push((node, Side::Left));
                current = node.left.as_ref();
            }
            Ordering::Greater => {
                path.push((node, Side::Right));
                current = node.right.as_ref();
            }
            Ordering::Equal => return Insertion::Existing(node),
        }
    }

    let leaf = ReferenceCounter::new(Node::leaf(value));
    let root = rebuild(path, Some(leaf.clone()));
    Insertion::Inserted { root, leaf }
}

/// Removes `value` from the subtree.
///
/// A node with two children is replaced by a copy holding its in-order
/// successor's value, and the successor is removed from the right subtree.
/// A node with one child is replaced by that child as-is.
///
/// If `value` is absent the input subtree is returned unchanged.
pub(crate) fn erase<T, Q>(root: Option<&ReferenceCounter<Node<T>>>, value: &Q) -> Link<T>
where
    T: Clone + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut path: Path<'_, T> = SmallVec::new();
    let mut current = root;
    while let Some(node) = current {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => {
                path.push((node, Side::Left));
                current = node.left.as_ref();
            }
            Ordering::Greater => {
                path.push((node, Side::Right));
                current = node.right.as_ref();
            }
            Ordering::Equal => return rebuild(path, detach(node)),
        }
    }
    root.cloned()
}

/// Builds the subtree that takes the place of a removed node.
fn detach<T: Clone>(node: &ReferenceCounter<Node<T>>) -> Link<T> {
    match (&node.left, &node.right) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child.clone()),
        (Some(_), Some(right)) => {
            let successor = leftmost(right).value.clone();
            Some(ReferenceCounter::new(Node::new(
                successor,
                node.left.clone(),
                erase_leftmost(right),
            )))
        }
    }
}

/// Removes the minimum of a non-empty subtree.
///
/// The minimum has no left child, so it is replaced by its right subtree.
fn erase_leftmost<T: Clone>(root: &ReferenceCounter<Node<T>>) -> Link<T> {
    let mut path: Path<'_, T> = SmallVec::new();
    let mut current = root;
    while let Some(left) = current.left.as_ref() {
        path.push((current, Side::Left));
        current = left;
    }
    rebuild(path, current.right.clone())
}

/// Copies the recorded path bottom-up around `replacement`.
fn rebuild<T: Clone>(path: Path<'_, T>, replacement: Link<T>) -> Link<T> {
    path.into_iter()
        .rev()
        .fold(replacement, |child, (node, side)| {
            let copy = match side {
                Side::Left => node.with_left(child),
                Side::Right => node.with_right(child),
            };
            Some(ReferenceCounter::new(copy))
        })
}

/// Returns the minimum node of a non-empty subtree.
pub(crate) fn leftmost<T>(root: &ReferenceCounter<Node<T>>) -> &ReferenceCounter<Node<T>> {
    let mut current = root;
    while let Some(left) = current.left.as_ref() {
        current = left;
    }
    current
}

/// Returns the maximum node of a non-empty subtree.
pub(crate) fn rightmost<T>(root: &ReferenceCounter<Node<T>>) -> &ReferenceCounter<Node<T>> {
    let mut current = root;
    while let Some(right) = current.right.as_ref() {
        current = right;
    }
    current
}

/// Returns the node with the smallest value strictly greater than `value`.
pub(crate) fn successor<'a, T: Ord>(
    root: Option<&'a ReferenceCounter<Node<T>>>,
    value: &T,
) -> Option<&'a ReferenceCounter<Node<T>>> {
    let mut candidate = None;
    let mut current = root;
    while let Some(node) = current {
        if node.value > *value {
            candidate = Some(node);
            current = node.left.as_ref();
        } else {
            current = node.right.as_ref();
        }
    }
    candidate
}

/// Returns the node with the largest value strictly less than `value`.
pub(crate) fn predecessor<'a, T: Ord>(
    root: Option<&'a ReferenceCounter<Node<T>>>,
    value: &T,
) -> Option<&'a ReferenceCounter<Node<T>>> {
    let mut candidate = None;
    let mut current = root;
    while let Some(node) = current {
        if node.value < *value {
            candidate = Some(node);
            current = node.right.as_ref();
        } else {
            current = node.left.as_ref();
        }
    }
    candidate
}

// =============================================================================
// Tests
// =============================================================================
