//! Persistent (immutable) ordered set.
//!
//! This module provides [`PersistentSet`], an ordered set backed by an
//! unbalanced binary search tree whose nodes are shared between versions:
//!
//! - [`PersistentSet`]: the set handle, one logical version of the set
//! - [`Cursor`]: a bidirectional position inside one version
//! - [`PersistentSetIterator`]: borrowing in-order iterator
//!
//! # Structural Sharing
//!
//! Inserting or erasing rebuilds only the nodes on the path from the root
//! to the affected position. Every other subtree is referenced by the new
//! version rather than copied, so earlier versions stay intact and cloning
//! a set is O(1).
//!
//! # Examples
//!
//! ```rust
//! use persistent_set::persistent::PersistentSet;
//!
//! let mut set = PersistentSet::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//!
//! let snapshot = set.clone();
//! set.erase(set.begin()).unwrap();
//!
//! assert_eq!(*set.begin(), 2);
//! assert_eq!(*snapshot.begin(), 1); // Original unchanged
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod cursor;
mod error;
mod node;
mod set;
mod tree;

pub use cursor::Cursor;
pub use error::CursorError;
pub use set::PersistentSet;
pub use set::PersistentSetIntoIterator;
pub use set::PersistentSetIterator;

// =============================================================================
// Tests
// =============================================================================
