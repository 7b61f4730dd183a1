//! Continuously sorted, thread-safe containers.
//!
//! This module provides:
//!
//! - [`OrderedList`]: a list kept sorted by a pluggable [`Comparator`], with
//!   duplicate policies, binary-search lookup and validated positional writes
//! - [`Comparator`]: a shareable three-way ordering function
//! - [`SearchIndex`]: the found / insertion-point search result
//! - [`binary_search`] and [`binary_search_deferred`]: the two search
//!   algorithms the list chooses between
//! - [`Presence`]: the marker for values that may be stored
//!
//! # Examples
//!
//! ## Natural order, unique elements
//!
//! ```rust
//! use ordlist::ordered::OrderedList;
//!
//! let words = OrderedList::new();
//! words.add_all(["pear", "apple", "fig", "apple"]).unwrap();
//!
//! assert_eq!(words.to_vec(), vec!["apple", "fig", "pear"]);
//! assert!(words.contains(&"fig"));
//! ```
//!
//! ## Custom order, live re-comparison
//!
//! ```rust
//! use ordlist::ordered::{Comparator, OrderedList};
//!
//! let numbers = OrderedList::with_comparator(Comparator::<i32>::natural());
//! numbers.add_all([3, 1, 2]).unwrap();
//! assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
//!
//! numbers.set_comparator(Comparator::<i32>::natural().reversed());
//! assert_eq!(numbers.to_vec(), vec![3, 2, 1]);
//! ```
//!
//! ## Structured ordering errors
//!
//! ```rust
//! use ordlist::ordered::{NeighborSide, OrderedList, OrderedListError};
//!
//! let list = OrderedList::new();
//! list.add_all([10, 20, 30]).unwrap();
//!
//! match list.set(1, 40) {
//!     Err(OrderedListError::OrderingViolation { index, side }) => {
//!         assert_eq!(index, 1);
//!         assert_eq!(side, NeighborSide::Successor);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod comparator;
mod error;
mod list;
mod presence;
mod search;

pub use comparator::{CompareFn, Comparator};
pub use error::{NeighborSide, OrderedListError, Result};
pub use list::{OrderedList, OrderedListBuilder, OrderedListOptions};
pub use presence::Presence;
pub use search::{SearchIndex, binary_search, binary_search_deferred};
