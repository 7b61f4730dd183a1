//! # ordlist
//!
//! A continuously sorted, thread-safe list for Rust.
//!
//! ## Overview
//!
//! The standard library offers sorted maps and sets, but no indexable list
//! that stays sorted under a caller-chosen order and can be shared between
//! threads as is. This crate provides:
//!
//! - **Ordered containers**: [`OrderedList`](ordered::OrderedList), sorted by a
//!   pluggable comparator, with duplicate policies, binary-search lookup and
//!   validated positional writes
//! - **Search primitives**: unique and duplicate-tolerant binary searches
//!   reporting found indices or bitwise-complement insertion points
//! - **Lookup cache**: a memo of query term → sorted results built on the
//!   ordered list
//!
//! ## Feature Flags
//!
//! - `ordered`: Ordered containers (default)
//! - `cache`: Lookup cache (default)
//! - `loom`: Model-checked locking for `loom` tests
//!
//! ## Example
//!
//! ```rust
//! use ordlist::prelude::*;
//!
//! let list = OrderedList::new();
//! list.add_all([5, 1, 4]).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordlist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "ordered")]
    pub use crate::ordered::{
        Comparator, NeighborSide, OrderedList, OrderedListBuilder, OrderedListError,
        OrderedListOptions, Presence, SearchIndex,
    };

    #[cfg(feature = "cache")]
    pub use crate::cache::{LookupCache, LookupError, LookupResults};
}

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "ordered")]
mod sync;
