//! Error types for ordered containers.

use std::fmt;

/// Which neighbour comparison rejected a positional insert or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborSide {
    /// The element before the target slot sorts after the new item.
    Predecessor,
    /// The element after the target slot sorts before the new item.
    Successor,
    /// Both neighbours reject the new item.
    Both,
}

impl NeighborSide {
    /// Combines the outcome of both neighbour checks, returning `None` when
    /// both accepted.
    #[must_use]
    pub const fn from_checks(predecessor_accepts: bool, successor_accepts: bool) -> Option<Self> {
        match (predecessor_accepts, successor_accepts) {
            (true, true) => None,
            (false, true) => Some(Self::Predecessor),
            (true, false) => Some(Self::Successor),
            (false, false) => Some(Self::Both),
        }
    }

    /// Returns `true` if the predecessor check failed.
    #[must_use]
    pub const fn predecessor_failed(self) -> bool {
        matches!(self, Self::Predecessor | Self::Both)
    }

    /// Returns `true` if the successor check failed.
    #[must_use]
    pub const fn successor_failed(self) -> bool {
        matches!(self, Self::Successor | Self::Both)
    }
}

impl fmt::Display for NeighborSide {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self {
            Self::Predecessor => "predecessor",
            Self::Successor => "successor",
            Self::Both => "predecessor and successor",
        };
        formatter.write_str(side)
    }
}

/// Errors raised by [`OrderedList`](super::OrderedList) operations.
///
/// Every variant is raised before the container is mutated, so a failed call
/// leaves the contents exactly as they were.
///
/// # Examples
///
/// ```rust
/// use ordlist::ordered::{NeighborSide, OrderedList, OrderedListError};
///
/// let list = OrderedList::new();
/// list.add_all(["a", "c"]).unwrap();
///
/// let error = list.insert(1, "z").unwrap_err();
/// assert_eq!(
///     error,
///     OrderedListError::OrderingViolation { index: 1, side: NeighborSide::Successor }
/// );
/// assert_eq!(list.to_vec(), vec!["a", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderedListError {
    /// A required item was absent.
    #[error("{argument} must be present")]
    InputNull {
        /// Name of the rejected argument.
        argument: &'static str,
    },

    /// No comparator was supplied and natural ordering was not requested.
    #[error("no comparator supplied: provide one or request natural ordering")]
    MissingComparator,

    /// A positional insert or write would break the sort order.
    #[error("index {index} puts the item out of order ({side} check failed)")]
    OrderingViolation {
        /// The rejected position.
        index: usize,
        /// The neighbour comparison(s) that failed.
        side: NeighborSide,
    },

    /// An appended range does not sort after the current tail.
    #[error("items out of order: appended range must sort after the current tail")]
    RangeViolation,

    /// A position lies outside the valid range.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Result alias for ordered container operations.
pub type Result<T> = std::result::Result<T, OrderedListError>;
