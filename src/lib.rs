//! # persistent-set
//!
//! A persistent ordered set for Rust, backed by an unbalanced binary search
//! tree with structural sharing.
//!
//! ## Overview
//!
//! Every handle of a [`PersistentSet`](persistent::PersistentSet) is a version
//! of the set. Inserting or erasing through one handle builds a new tree that
//! copies only the root-to-target path and shares everything else, so all
//! previously taken clones keep their contents.
//!
//! - **Set handle**: `insert`, `erase`, `find`, `begin`/`end`, O(1) clone
//! - **Cursor**: bidirectional position that re-searches from the root on
//!   every step instead of keeping parent links
//! - **Iterators**: borrowing and owning in-order iterators
//!
//! ## Feature Flags
//!
//! - `arc`: Use `Arc` instead of `Rc` so versions can be shared across threads
//! - `serde`: Serialize sets as ascending sequences
//!
//! ## Example
//!
//! ```rust
//! use persistent_set::prelude::*;
//!
//! let mut set = PersistentSet::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//!
//! let version_one = set.clone();
//! set.erase(set.begin()).unwrap();
//!
//! assert_eq!(set.to_string(), "{2, 3}");
//! assert_eq!(version_one.to_string(), "{1, 2, 3}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use persistent_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
