//! Binary search over sorted slices.
//!
//! Two algorithms are provided and callers pick one explicitly:
//!
//! - [`binary_search`] stops at the first probe that compares equal. Over a
//!   slice without duplicates that is *the* match; over a slice with an
//!   equal-run it may be any element of the run.
//! - [`binary_search_deferred`] postpones the equality test until the range
//!   has narrowed to one slot, which always lands on the *first* element of
//!   an equal-run.
//!
//! Both report their result as a [`SearchIndex`]: a non-negative value is the
//! index of a match, a negative value is the bitwise complement of the
//! position where the sought element would be inserted.
//!
//! # Examples
//!
//! ```rust
//! use ordlist::ordered::{SearchIndex, binary_search, binary_search_deferred};
//!
//! let sorted = [1, 3, 3, 3, 7];
//!
//! let hit = binary_search_deferred(&sorted, |probe| probe.cmp(&3));
//! assert_eq!(hit, SearchIndex::found(1));
//!
//! let miss = binary_search(&sorted, |probe| probe.cmp(&5));
//! assert_eq!(miss.raw(), !4);
//! assert_eq!(miss.insertion_point(), Some(4));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Result of a binary search, encoded the way sorted-sequence searches
/// conventionally are: `index` when found, `!insertion_point` when not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchIndex(isize);

// `Vec` never holds more than `isize::MAX` elements, so positions fit.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
impl SearchIndex {
    /// A match at `index`.
    #[inline]
    #[must_use]
    pub const fn found(index: usize) -> Self {
        Self(index as isize)
    }

    /// No match; the element belongs at `insertion_point`.
    #[inline]
    #[must_use]
    pub const fn vacant(insertion_point: usize) -> Self {
        Self(!(insertion_point as isize))
    }

    /// Reinterprets a raw encoded value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw encoded value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Returns `true` if the search found an equal element.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        self.0 >= 0
    }

    /// Index of the match, if any.
    #[inline]
    #[must_use]
    pub const fn found_index(self) -> Option<usize> {
        if self.0 >= 0 {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    /// Where the element would be inserted, if it was not found.
    #[inline]
    #[must_use]
    pub const fn insertion_point(self) -> Option<usize> {
        if self.0 < 0 {
            Some(!self.0 as usize)
        } else {
            None
        }
    }

    /// The slot the search settled on: the match, or the insertion point.
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        if self.0 >= 0 {
            self.0 as usize
        } else {
            !self.0 as usize
        }
    }

    /// Converts to the `Result` shape used by [`slice::binary_search`].
    ///
    /// # Errors
    ///
    /// `Err(insertion_point)` when the search did not find a match.
    #[inline]
    pub const fn into_result(self) -> Result<usize, usize> {
        if self.0 >= 0 {
            Ok(self.0 as usize)
        } else {
            Err(!self.0 as usize)
        }
    }
}

impl From<Result<usize, usize>> for SearchIndex {
    fn from(result: Result<usize, usize>) -> Self {
        match result {
            Ok(index) => Self::found(index),
            Err(insertion_point) => Self::vacant(insertion_point),
        }
    }
}

impl From<SearchIndex> for isize {
    fn from(index: SearchIndex) -> Self {
        index.0
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.into_result() {
            Ok(index) => write!(formatter, "found at {index}"),
            Err(insertion_point) => write!(formatter, "vacant before {insertion_point}"),
        }
    }
}

/// Searches `slice` with a projection that reports how each probed element
/// orders relative to the sought key.
///
/// Returns on the first probe that compares [`Ordering::Equal`].
pub fn binary_search<T, F>(slice: &[T], mut projection: F) -> SearchIndex
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let middle = low + (high - low) / 2;
        match projection(&slice[middle]) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return SearchIndex::found(middle),
        }
    }

    SearchIndex::vacant(low)
}

/// Duplicate-tolerant search with deferred equality detection.
///
/// The range is narrowed until `low` is the first element that does not order
/// before the key, and only then tested for equality. Inside an equal-run the
/// result is therefore always the first element of the run.
///
/// A projection only sees the key space, so when several elements share a
/// key this cannot single out one particular element of the run; callers
/// needing a specific element must scan forward from the returned index.
pub fn binary_search_deferred<T, F>(slice: &[T], mut projection: F) -> SearchIndex
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let middle = low + (high - low) / 2;
        if projection(&slice[middle]) == Ordering::Less {
            low = middle + 1;
        } else {
            high = middle;
        }
    }

    match slice.get(low) {
        Some(candidate) if projection(candidate) == Ordering::Equal => SearchIndex::found(low),
        _ => SearchIndex::vacant(low),
    }
}

/// Index just past the equal-run for the key described by `projection`:
/// the first element ordering after the key, or `slice.len()`.
pub(crate) fn upper_bound<T, F>(slice: &[T], mut projection: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    slice.partition_point(|probe| projection(probe) != Ordering::Greater)
}
