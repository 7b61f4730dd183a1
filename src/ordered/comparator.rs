//! Three-way comparison functions.
//!
//! A [`Comparator`] is a shareable, thread-safe ordering function over `T`.
//! Every [`OrderedList`](super::OrderedList) stores one and consults it for
//! every search and insertion, so the order of a list can be anything the
//! caller can express, not only the natural [`Ord`] order of `T`.
//!
//! # Examples
//!
//! ```rust
//! use ordlist::ordered::Comparator;
//! use std::cmp::Ordering;
//!
//! let by_length = Comparator::by_key(|word: &String| word.len());
//! assert_eq!(
//!     by_length.compare(&"kiwi".to_string(), &"banana".to_string()),
//!     Ordering::Less
//! );
//!
//! let descending = Comparator::<i32>::natural().reversed();
//! assert_eq!(descending.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// The function object stored inside a [`Comparator`].
pub type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A cheaply clonable three-way comparison function.
///
/// Cloning a `Comparator` shares the underlying function; it never clones
/// captured state.
pub struct Comparator<T> {
    function: Arc<CompareFn<T>>,
}

impl<T> Comparator<T> {
    /// Wraps an ordering function.
    ///
    /// The function must describe a total order; the containers rely on it
    /// for their sortedness invariant.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Wraps a function returning a signed number: below zero for less,
    /// zero for equal and above zero for greater.
    ///
    /// "Zero" is `N::default()`. A result that does not compare with it,
    /// such as a float `NaN`, counts as equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let comparator = Comparator::from_three_way(|a: &i64, b: &i64| a - b);
    /// assert_eq!(comparator.compare(&3, &7), Ordering::Less);
    /// assert_eq!(comparator.compare(&7, &7), Ordering::Equal);
    /// ```
    pub fn from_three_way<F, N>(function: F) -> Self
    where
        F: Fn(&T, &T) -> N + Send + Sync + 'static,
        N: PartialOrd + Default,
    {
        Self::new(move |left, right| {
            function(left, right)
                .partial_cmp(&N::default())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Orders elements by a key extracted from each of them.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |left, right| key(left).cmp(&key(right)))
    }

    /// Compares two elements.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }

    /// Returns a comparator describing the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let function = Arc::clone(&self.function);
        Self::new(move |left, right| function(right, left))
    }

    /// Falls back to `next` whenever `self` considers two elements equal.
    #[must_use]
    pub fn then(&self, next: Self) -> Self
    where
        T: 'static,
    {
        let first = Arc::clone(&self.function);
        Self::new(move |left, right| first(left, right).then_with(|| next.compare(left, right)))
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// The natural order of `T`.
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Comparator").finish_non_exhaustive()
    }
}

impl<T, F> From<F> for Comparator<T>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}
