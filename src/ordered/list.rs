//! Thread-safe, continuously sorted list.
//!
//! [`OrderedList`] keeps its elements sorted by a [`Comparator`] at all times.
//! It reads like an indexable sequence (`get`, `remove_at`, positional
//! `insert` and `set`) and like a keyed sorted set (`add`, `index_of`,
//! `remove`, projection searches) over the same storage.
//!
//! # Concurrency
//!
//! Storage and comparator live behind one exclusive lock. Each operation
//! takes the lock once for its whole logical step, so `add` and `remove` never
//! let another thread in between their search and their mutation. Caller
//! callbacks (`for_each`, `sort_with`) never run while the lock is held and
//! may therefore call back into the list.
//!
//! Comparators and search projections (`index_of_by`, `contains_by`,
//! `remove_by`, `item_by`) are the exception: they run under the lock, which
//! is not reentrant. One that calls back into the same list deadlocks.
//!
//! # Duplicate policy
//!
//! | `permit_duplicates` | `replace` | adding an equal element            |
//! |---------------------|-----------|------------------------------------|
//! | `true`              | ignored   | inserted next to the existing run  |
//! | `false`             | `true`    | overwrites the existing element    |
//! | `false`             | `false`   | ignored, existing element kept     |
//!
//! # Time Complexity
//!
//! | Operation       | Complexity              |
//! |-----------------|-------------------------|
//! | `add`           | O(log n) search + O(n)  |
//! | `index_of`      | O(log n)                |
//! | `remove`        | O(log n) search + O(n)  |
//! | `append_sorted` | O(1) check + O(m)       |
//! | `insert`/`set`  | O(1) check (+ O(n) shift) |
//! | `sort`          | O(n log n) comparisons  |
//!
//! # Examples
//!
//! ```rust
//! use ordlist::ordered::OrderedList;
//!
//! let list = OrderedList::new();
//! list.add("b").unwrap();
//! list.add("a").unwrap();
//! list.add("c").unwrap();
//!
//! assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
//! assert_eq!(list.index_of(&"b").raw(), 1);
//! assert!(list.index_of(&"bb").raw() < 0);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace, warn};

use super::comparator::Comparator;
use super::error::{NeighborSide, OrderedListError, Result};
use super::presence::Presence;
use super::search::{SearchIndex, binary_search, binary_search_deferred, upper_bound};
use crate::sync::Mutex;

/// Duplicate handling of an [`OrderedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderedListOptions {
    /// Whether equal-comparing elements may coexist.
    pub permit_duplicates: bool,
    /// When duplicates are not permitted, whether an equal element replaces
    /// the stored one. Always `false` once duplicates are permitted.
    pub replace: bool,
}

impl OrderedListOptions {
    /// Duplicates rejected, the stored element kept.
    #[must_use]
    pub const fn unique() -> Self {
        Self {
            permit_duplicates: false,
            replace: false,
        }
    }

    /// Duplicates rejected, the newest element kept.
    #[must_use]
    pub const fn unique_replacing() -> Self {
        Self {
            permit_duplicates: false,
            replace: true,
        }
    }

    /// Duplicates accumulate in contiguous runs.
    #[must_use]
    pub const fn duplicates() -> Self {
        Self {
            permit_duplicates: true,
            replace: false,
        }
    }

    const fn normalized(self) -> Self {
        Self {
            permit_duplicates: self.permit_duplicates,
            replace: self.replace && !self.permit_duplicates,
        }
    }
}

impl Default for OrderedListOptions {
    fn default() -> Self {
        Self {
            permit_duplicates: true,
            replace: true,
        }
    }
}

/// Everything guarded by the list lock.
#[derive(Clone)]
struct ListState<T> {
    items: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> ListState<T> {
    fn search(&self, item: &T) -> SearchIndex {
        let comparator = &self.comparator;
        binary_search(&self.items, |probe| comparator.compare(probe, item))
    }

    fn search_by<F>(&self, permit_duplicates: bool, projection: F) -> SearchIndex
    where
        F: FnMut(&T) -> Ordering,
    {
        if permit_duplicates {
            binary_search_deferred(&self.items, projection)
        } else {
            binary_search(&self.items, projection)
        }
    }

    /// The single insertion primitive shared by `add` and bulk adds.
    fn insert_sorted(&mut self, item: T, options: OrderedListOptions) -> SearchIndex {
        let index = self.search(&item);
        match index.into_result() {
            Err(insertion_point) => self.items.insert(insertion_point, item),
            Ok(found) if options.permit_duplicates => self.items.insert(found, item),
            Ok(found) if options.replace => self.items[found] = item,
            Ok(_) => {}
        }
        index
    }

    /// Replays the insertion of every element, in storage order, over
    /// indices only.
    ///
    /// Returns the surviving original indices in their new order and, per
    /// original element, the slot it settled into. A permitted duplicate
    /// settles after its equal-run, so equal elements keep their relative
    /// order. `items` is not touched, so a panicking comparator leaves the
    /// list as it was.
    fn resorted_order(&self, options: OrderedListOptions) -> (Vec<usize>, Vec<usize>) {
        let items = &self.items;
        let comparator = &self.comparator;
        let mut order: Vec<usize> = Vec::with_capacity(items.len());
        let mut settled = Vec::with_capacity(items.len());

        for (original, item) in items.iter().enumerate() {
            let slot = if options.permit_duplicates {
                let slot = upper_bound(&order, |&kept| comparator.compare(&items[kept], item));
                order.insert(slot, original);
                slot
            } else {
                match binary_search(&order, |&kept| comparator.compare(&items[kept], item))
                    .into_result()
                {
                    Err(slot) => {
                        order.insert(slot, original);
                        slot
                    }
                    Ok(slot) => {
                        if options.replace {
                            order[slot] = original;
                        }
                        slot
                    }
                }
            };
            settled.push(slot);
        }
        (order, settled)
    }

    /// Rearranges `items` into `order`, dropping elements it does not name.
    fn apply_order(&mut self, order: &[usize]) {
        let mut slots: Vec<Option<T>> = mem::take(&mut self.items).into_iter().map(Some).collect();
        self.items = order
            .iter()
            .filter_map(|&original| slots[original].take())
            .collect();
    }

    fn resort(&mut self, options: OrderedListOptions) {
        let (order, _) = self.resorted_order(options);
        self.apply_order(&order);
    }

    fn resort_recording(&mut self, options: OrderedListOptions) -> Vec<(T, usize)>
    where
        T: Clone,
    {
        let (order, settled) = self.resorted_order(options);
        let recorded = self.items.iter().cloned().zip(settled).collect();
        self.apply_order(&order);
        recorded
    }

    /// Checks `item` against the elements at `predecessor` and `successor`.
    fn rejecting_side(
        &self,
        predecessor: Option<usize>,
        successor: Option<usize>,
        item: &T,
        permit_duplicates: bool,
    ) -> Option<NeighborSide> {
        let predecessor_accepts = predecessor.is_none_or(|slot| {
            admits(self.comparator.compare(&self.items[slot], item), permit_duplicates)
        });
        let successor_accepts = successor.is_none_or(|slot| {
            admits(self.comparator.compare(item, &self.items[slot]), permit_duplicates)
        });
        NeighborSide::from_checks(predecessor_accepts, successor_accepts)
    }

    fn accepts_after_tail(&self, first: &T, permit_duplicates: bool) -> bool {
        self.items
            .last()
            .is_none_or(|last| admits(self.comparator.compare(last, first), permit_duplicates))
    }

    fn remove_found(&mut self, index: SearchIndex) -> Option<T> {
        index
            .found_index()
            .filter(|&slot| slot < self.items.len())
            .map(|slot| self.items.remove(slot))
    }
}

/// Whether two adjacent elements ordered as `ordering` respect the invariant.
const fn admits(ordering: Ordering, permit_duplicates: bool) -> bool {
    match ordering {
        Ordering::Less => true,
        Ordering::Equal => permit_duplicates,
        Ordering::Greater => false,
    }
}

fn ensure_present<T: Presence + ?Sized>(item: &T, argument: &'static str) -> Result<()> {
    if item.is_present() {
        Ok(())
    } else {
        Err(OrderedListError::InputNull { argument })
    }
}

fn ensure_all_present<T: Presence>(items: &[T], argument: &'static str) -> Result<()> {
    items
        .iter()
        .try_for_each(|item| ensure_present(item, argument))
}

/// A thread-safe list kept sorted by a comparator.
///
/// Adjacent elements always satisfy `compare(e[i], e[i + 1]) <= 0`, strictly
/// `< 0` when duplicates are not permitted. Every element is present in the
/// sense of [`Presence`].
///
/// All methods take `&self`; share the list between threads with an `Arc`.
///
/// # Examples
///
/// ```rust
/// use ordlist::ordered::{Comparator, OrderedList, OrderedListOptions};
///
/// let by_length = OrderedList::with_options(
///     Comparator::by_key(|word: &String| word.len()),
///     OrderedListOptions::duplicates(),
/// );
/// by_length
///     .add_all(["pear", "fig", "plum", "banana"].map(String::from))
///     .unwrap();
///
/// assert_eq!(by_length.first().as_deref(), Some("fig"));
/// assert_eq!(by_length.len(), 4);
/// ```
pub struct OrderedList<T> {
    state: Mutex<ListState<T>>,
    options: OrderedListOptions,
}

#[cfg(not(feature = "loom"))]
static_assertions::assert_impl_all!(OrderedList<String>: Send, Sync);

impl<T: Ord + 'static> OrderedList<T> {
    /// Creates an empty list in natural order that rejects duplicates and
    /// keeps the stored element when an equal one is added.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Comparator::natural(), OrderedListOptions::unique())
    }
}

impl<T: Ord + 'static> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Presence + 'static> OrderedList<T> {
    /// Wraps a strictly ascending vector in a natural-order list that
    /// rejects duplicates, without re-sorting it.
    ///
    /// In debug builds the order is checked with `debug_assert!`. In release
    /// builds unsorted input yields a list whose searches are unreliable
    /// until [`sort`](Self::sort) is called.
    ///
    /// # Errors
    ///
    /// [`OrderedListError::InputNull`] if any element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::OrderedList;
    ///
    /// let list = OrderedList::from_sorted_vec(vec![2, 4, 6, 8]).unwrap();
    /// assert_eq!(list.len(), 4);
    /// assert_eq!(list.index_of(&6).found_index(), Some(2));
    /// ```
    pub fn from_sorted_vec(items: Vec<T>) -> Result<Self> {
        debug_assert!(
            items.windows(2).all(|pair| pair[0] < pair[1]),
            "from_sorted_vec requires strictly ascending input"
        );
        let list = Self::new();
        list.load_sorted(items)?;
        Ok(list)
    }
}

/// Builds a natural-order list that rejects duplicates, routing every
/// element through [`OrderedList::add_all`].
///
/// ```rust
/// use ordlist::ordered::{OrderedList, OrderedListError};
///
/// let list = OrderedList::try_from(vec![3, 1, 3]).unwrap();
/// assert_eq!(list.to_vec(), vec![1, 3]);
///
/// let absent = OrderedList::try_from(vec![Some(2), None]);
/// assert_eq!(absent.unwrap_err(), OrderedListError::InputNull { argument: "items" });
/// ```
impl<T: Ord + Presence + 'static> TryFrom<Vec<T>> for OrderedList<T> {
    type Error = OrderedListError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        let list = Self::new();
        list.add_all(items)?;
        Ok(list)
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list ordered by `comparator` with the default
    /// options: duplicates permitted.
    pub fn with_comparator(comparator: impl Into<Comparator<T>>) -> Self {
        Self::with_options(comparator, OrderedListOptions::default())
    }

    /// Creates an empty list ordered by `comparator` with explicit options.
    pub fn with_options(comparator: impl Into<Comparator<T>>, options: OrderedListOptions) -> Self {
        Self {
            state: Mutex::new(ListState {
                items: Vec::new(),
                comparator: comparator.into(),
            }),
            options: options.normalized(),
        }
    }

    /// Starts building a list; see [`OrderedListBuilder`].
    #[must_use]
    pub fn builder() -> OrderedListBuilder<T> {
        OrderedListBuilder::new()
    }

    /// Whether equal-comparing elements may coexist.
    #[inline]
    #[must_use]
    pub const fn permit_duplicates(&self) -> bool {
        self.options.permit_duplicates
    }

    /// Whether adding an equal element replaces the stored one.
    #[inline]
    #[must_use]
    pub const fn replace(&self) -> bool {
        self.options.replace
    }

    /// The duplicate policy of this list.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> OrderedListOptions {
        self.options
    }

    /// The comparator currently ordering the list.
    #[must_use]
    pub fn comparator(&self) -> Comparator<T> {
        self.state.lock().comparator.clone()
    }

    /// Replaces the comparator and resorts the list with it.
    ///
    /// The resort works like [`sort`](Self::sort): with duplicates
    /// disallowed, elements the new comparator considers equal are merged
    /// according to the `replace` flag.
    pub fn set_comparator(&self, comparator: impl Into<Comparator<T>>) {
        let mut state = self.state.lock();
        state.comparator = comparator.into();
        let before = state.items.len();
        state.resort(self.options);
        debug!(before, after = state.items.len(), "comparator replaced");
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// Searches for `item` with the list comparator.
    ///
    /// Returns the index of an equal element, or the complement of the index
    /// at which `item` would be inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::OrderedList;
    ///
    /// let list = OrderedList::new();
    /// list.add_all([10, 20, 30]).unwrap();
    ///
    /// assert_eq!(list.index_of(&20).found_index(), Some(1));
    ///
    /// let missing = list.index_of(&25);
    /// assert_eq!(missing.raw(), !2);
    /// assert_eq!(missing.insertion_point(), Some(2));
    /// ```
    #[must_use]
    pub fn index_of(&self, item: &T) -> SearchIndex {
        self.state.lock().search(item)
    }

    /// Searches with a projection reporting how each element orders relative
    /// to the sought key.
    ///
    /// With duplicates permitted the deferred search is used and a hit is the
    /// first element of its equal-run. A projection cannot tell elements of a
    /// run apart, so it cannot locate one particular member of the run.
    ///
    /// `projection` runs while the list is locked; calling back into this
    /// list from it deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::{Comparator, OrderedList};
    ///
    /// let people = OrderedList::with_comparator(Comparator::by_key(|p: &(u32, &'static str)| p.0));
    /// people.add_all([(30, "carol"), (25, "alice"), (30, "bob")]).unwrap();
    ///
    /// let index = people.index_of_by(|person| person.0.cmp(&30));
    /// assert_eq!(index.found_index(), Some(1));
    /// ```
    pub fn index_of_by<F>(&self, projection: F) -> SearchIndex
    where
        F: FnMut(&T) -> Ordering,
    {
        self.state
            .lock()
            .search_by(self.options.permit_duplicates, projection)
    }

    /// Searches by a borrowed key in its natural order.
    ///
    /// Only meaningful when the list comparator agrees with `Q`'s `Ord`.
    #[must_use]
    pub fn index_of_key<Q>(&self, key: &Q) -> SearchIndex
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of_by(|item| item.borrow().cmp(key))
    }

    /// Returns `true` if an element equal to `item` is stored.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_found()
    }

    /// Returns `true` if the projection matches an element.
    ///
    /// `projection` runs while the list is locked; calling back into this
    /// list from it deadlocks.
    pub fn contains_by<F>(&self, projection: F) -> bool
    where
        F: FnMut(&T) -> Ordering,
    {
        self.index_of_by(projection).is_found()
    }

    /// Returns `true` if an element with the borrowed key is stored.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of_key(key).is_found()
    }

    /// Removes an element equal to `item`.
    ///
    /// Returns the index it was removed from, or the negative not-found code
    /// without touching the list.
    pub fn remove(&self, item: &T) -> SearchIndex {
        let mut state = self.state.lock();
        let index = state.search(item);
        state.remove_found(index);
        trace!(index = index.raw(), "remove");
        index
    }

    /// Removes the element matched by a projection, returning the search
    /// result and the removed element.
    ///
    /// `projection` runs while the list is locked; calling back into this
    /// list from it deadlocks.
    pub fn remove_by<F>(&self, projection: F) -> (SearchIndex, Option<T>)
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut state = self.state.lock();
        let index = state.search_by(self.options.permit_duplicates, projection);
        let removed = state.remove_found(index);
        (index, removed)
    }

    /// Removes the element with the borrowed key.
    pub fn remove_key<Q>(&self, key: &Q) -> (SearchIndex, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_by(|item| item.borrow().cmp(key))
    }

    /// Removes every listed item, returning how many were found.
    pub fn remove_all<I>(&self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut state = self.state.lock();
        items
            .into_iter()
            .filter(|item| {
                let index = state.search(<I::Item as Borrow<T>>::borrow(item));
                state.remove_found(index).is_some()
            })
            .count()
    }

    /// Removes the element at `index`.
    ///
    /// An out-of-range index is not an error: positions may go stale while
    /// other threads mutate the list, so this simply returns `None`.
    pub fn remove_at(&self, index: usize) -> Option<T> {
        let mut state = self.state.lock();
        if index < state.items.len() {
            Some(state.items.remove(index))
        } else {
            None
        }
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.state.lock().items.clear();
    }

    /// Re-sorts the list with the current comparator.
    ///
    /// Elements are re-inserted one by one in storage order under the same
    /// duplicate policy as [`add`](Self::add). A permitted duplicate goes
    /// after the elements it compares equal to, so the sort is stable and
    /// sorting a sorted list changes nothing.
    ///
    /// The new order is worked out before any element moves: if the
    /// comparator panics the contents stay as they were.
    pub fn sort(&self) {
        let mut state = self.state.lock();
        state.resort(self.options);
        debug!(len = state.items.len(), "list resorted");
    }

    /// Reverses the physical order of the elements without resorting.
    ///
    /// Afterwards the list no longer satisfies its comparator: searches,
    /// `add` and positional checks give unreliable results until
    /// [`sort`](Self::sort) is called.
    pub fn reverse(&self) {
        let mut state = self.state.lock();
        state.items.reverse();
        warn!(
            len = state.items.len(),
            "list reversed; ordering is invalid until the next sort"
        );
    }
}

impl<T: Presence> OrderedList<T> {
    /// Adds `item` at its sorted position.
    ///
    /// The returned [`SearchIndex`] is negative (the complement of the
    /// insertion point) for a new element, and the index of the existing
    /// equal element otherwise.
    ///
    /// # Errors
    ///
    /// [`OrderedListError::InputNull`] if `item` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::{OrderedList, SearchIndex};
    ///
    /// let list = OrderedList::new();
    /// assert_eq!(list.add(5).unwrap(), SearchIndex::vacant(0));
    /// assert_eq!(list.add(9).unwrap(), SearchIndex::vacant(1));
    ///
    /// // Equal element: duplicates are rejected by `new()`.
    /// assert_eq!(list.add(5).unwrap(), SearchIndex::found(0));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn add(&self, item: T) -> Result<SearchIndex> {
        ensure_present(&item, "item")?;
        let index = self.state.lock().insert_sorted(item, self.options);
        trace!(index = index.raw(), "add");
        Ok(index)
    }

    /// Adds every item at its sorted position.
    ///
    /// All items are checked before any is added, so an absent item leaves
    /// the list untouched. The whole batch is added under one lock.
    ///
    /// # Errors
    ///
    /// [`OrderedListError::InputNull`] if any item is absent.
    pub fn add_all<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        ensure_all_present(&items, "items")?;
        if items.is_empty() {
            return Ok(());
        }

        let count = items.len();
        let mut state = self.state.lock();
        for item in items {
            state.insert_sorted(item, self.options);
        }
        debug!(count, len = state.items.len(), "added items");
        Ok(())
    }

    /// Appends items that are already sorted and belong after the current
    /// last element.
    ///
    /// Only the boundary between the current tail and the first new item is
    /// checked; the order within `items` is trusted.
    ///
    /// # Errors
    ///
    /// - [`OrderedListError::InputNull`] if any item is absent.
    /// - [`OrderedListError::RangeViolation`] if the first item sorts before
    ///   the tail, or equal to it while duplicates are disallowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::{OrderedList, OrderedListError};
    ///
    /// let list = OrderedList::new();
    /// list.append_sorted([1, 2, 3]).unwrap();
    /// list.append_sorted([4, 5]).unwrap();
    ///
    /// assert_eq!(list.append_sorted([5, 6]), Err(OrderedListError::RangeViolation));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn append_sorted<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        ensure_all_present(&items, "items")?;
        let Some(first) = items.first() else {
            return Ok(());
        };

        let mut state = self.state.lock();
        if !state.accepts_after_tail(first, self.options.permit_duplicates) {
            warn!(incoming = items.len(), "rejected out-of-order append");
            return Err(OrderedListError::RangeViolation);
        }
        let count = items.len();
        state.items.extend(items);
        debug!(count, len = state.items.len(), "appended sorted items");
        Ok(())
    }

    /// Replaces the contents with an already sorted sequence, unchecked.
    ///
    /// Loading unsorted data breaks every search until the next
    /// [`sort`](Self::sort).
    ///
    /// # Errors
    ///
    /// [`OrderedListError::InputNull`] if any item is absent.
    pub fn load_sorted<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        ensure_all_present(&items, "items")?;
        let mut state = self.state.lock();
        state.items = items;
        debug!(len = state.items.len(), "loaded sorted items");
        Ok(())
    }

    /// Inserts `item` at a caller-chosen position after checking it against
    /// both neighbours instead of searching.
    ///
    /// # Errors
    ///
    /// - [`OrderedListError::InputNull`] if `item` is absent.
    /// - [`OrderedListError::IndexOutOfRange`] if `index > len`.
    /// - [`OrderedListError::OrderingViolation`] if `item` sorts before the
    ///   element at `index - 1` or after the element at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordlist::ordered::OrderedList;
    ///
    /// let list = OrderedList::new();
    /// list.add_all(["a", "c"]).unwrap();
    /// list.insert(1, "b").unwrap();
    /// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
    /// ```
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        ensure_present(&item, "item")?;
        let mut state = self.state.lock();
        let len = state.items.len();
        if index > len {
            return Err(OrderedListError::IndexOutOfRange { index, len });
        }

        let predecessor = index.checked_sub(1);
        let successor = (index < len).then_some(index);
        if let Some(side) =
            state.rejecting_side(predecessor, successor, &item, self.options.permit_duplicates)
        {
            warn!(index, %side, "rejected positional insert");
            return Err(OrderedListError::OrderingViolation { index, side });
        }

        state.items.insert(index, item);
        Ok(())
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// The new value is checked against the elements at `index - 1` and
    /// `index + 1` exactly like [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// - [`OrderedListError::InputNull`] if `item` is absent.
    /// - [`OrderedListError::IndexOutOfRange`] if `index >= len`.
    /// - [`OrderedListError::OrderingViolation`] if a neighbour rejects it.
    pub fn set(&self, index: usize, item: T) -> Result<T> {
        ensure_present(&item, "item")?;
        let mut state = self.state.lock();
        let len = state.items.len();
        if index >= len {
            return Err(OrderedListError::IndexOutOfRange { index, len });
        }

        let predecessor = index.checked_sub(1);
        let successor = (index + 1 < len).then_some(index + 1);
        if let Some(side) =
            state.rejecting_side(predecessor, successor, &item, self.options.permit_duplicates)
        {
            warn!(index, %side, "rejected positional write");
            return Err(OrderedListError::OrderingViolation { index, side });
        }

        Ok(mem::replace(&mut state.items[index], item))
    }
}

impl<T: Clone> OrderedList<T> {
    /// Copy of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.state.lock().items.get(index).cloned()
    }

    /// Copy of the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.state.lock().items.first().cloned()
    }

    /// Copy of the largest element.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.state.lock().items.last().cloned()
    }

    /// Copy of the element matched by a projection; `None` on a miss.
    ///
    /// `projection` runs while the list is locked; calling back into this
    /// list from it deadlocks.
    pub fn item_by<F>(&self, projection: F) -> Option<T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let state = self.state.lock();
        state
            .search_by(self.options.permit_duplicates, projection)
            .found_index()
            .map(|slot| state.items[slot].clone())
    }

    /// Copy of the element with the borrowed key; `None` on a miss.
    #[must_use]
    pub fn item_key<Q>(&self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.item_by(|item| item.borrow().cmp(key))
    }

    /// Independent copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.state.lock().items.clone()
    }

    /// Same as [`snapshot`](Self::snapshot).
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.snapshot()
    }

    /// Iterates over a snapshot taken at call time.
    ///
    /// The list may be modified while iterating; the iterator keeps yielding
    /// the snapshot. Changes made by other threads are not reflected.
    #[must_use]
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.snapshot().into_iter()
    }

    /// Calls `action` for each element of a snapshot, without holding the
    /// lock, so `action` may add to or remove from this list.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for item in &self.snapshot() {
            action(item);
        }
    }

    /// Like [`for_each`](Self::for_each) with the snapshot index.
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.snapshot().iter().enumerate() {
            action(item, index);
        }
    }

    /// Copies the contents into `target` starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`OrderedListError::IndexOutOfRange`] if `target` cannot hold every
    /// element from `offset` on; `target` is left untouched.
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()> {
        let state = self.state.lock();
        let end = offset
            .checked_add(state.items.len())
            .filter(|&end| end <= target.len())
            .ok_or(OrderedListError::IndexOutOfRange {
                index: offset,
                len: target.len(),
            })?;
        target[offset..end].clone_from_slice(&state.items);
        Ok(())
    }

    /// Re-sorts the list, reporting every element with the slot it settled
    /// into when it was re-inserted.
    ///
    /// Callers use this to re-synchronise indices they keep alongside the
    /// list. The callback runs after the lock is released; a reported slot
    /// may since have shifted as later elements were inserted before it.
    pub fn sort_with<F>(&self, mut on_settled: F)
    where
        F: FnMut(&T, usize),
    {
        let settled = {
            let mut state = self.state.lock();
            state.resort_recording(self.options)
        };
        debug!(len = settled.len(), "list resorted");
        for (item, slot) in &settled {
            on_settled(item, *slot);
        }
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        let state = self.state.lock().clone();
        Self {
            state: Mutex::new(state),
            options: self.options,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("OrderedList")
            .field("items", &state.items)
            .field("permit_duplicates", &self.options.permit_duplicates)
            .field("replace", &self.options.replace)
            .finish()
    }
}

impl<T: Clone> IntoIterator for &OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Step-by-step construction of an [`OrderedList`].
///
/// # Examples
///
/// ```rust
/// use ordlist::ordered::{OrderedList, OrderedListError};
///
/// let list = OrderedList::builder()
///     .natural_order()
///     .permit_duplicates(false)
///     .items([3, 1, 2, 3])
///     .build()
///     .unwrap();
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// // Without a comparator there is no order to keep.
/// let missing = OrderedList::<i32>::builder().build();
/// assert_eq!(missing.unwrap_err(), OrderedListError::MissingComparator);
/// ```
pub struct OrderedListBuilder<T> {
    comparator: Option<Comparator<T>>,
    options: OrderedListOptions,
    items: Vec<T>,
    already_sorted: bool,
}

impl<T> OrderedListBuilder<T> {
    /// Creates a builder with default options and no comparator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            comparator: None,
            options: OrderedListOptions::default(),
            items: Vec::new(),
            already_sorted: false,
        }
    }

    /// Orders the list with `comparator`.
    #[must_use]
    pub fn comparator(mut self, comparator: impl Into<Comparator<T>>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    /// Sets whether duplicates are permitted.
    #[must_use]
    pub fn permit_duplicates(mut self, permit_duplicates: bool) -> Self {
        self.options.permit_duplicates = permit_duplicates;
        self
    }

    /// Sets whether an equal element replaces the stored one.
    #[must_use]
    pub fn replace(mut self, replace: bool) -> Self {
        self.options.replace = replace;
        self
    }

    /// Sets both duplicate flags at once.
    #[must_use]
    pub fn options(mut self, options: OrderedListOptions) -> Self {
        self.options = options;
        self
    }

    /// Initial contents.
    #[must_use]
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Declares the initial contents already sorted, so they are stored
    /// verbatim instead of being inserted one by one.
    ///
    /// Nothing verifies the claim; unsorted contents break every search
    /// until the list is sorted.
    #[must_use]
    pub fn already_sorted(mut self, already_sorted: bool) -> Self {
        self.already_sorted = already_sorted;
        self
    }

    /// Builds the list.
    ///
    /// # Errors
    ///
    /// - [`OrderedListError::MissingComparator`] if neither
    ///   [`comparator`](Self::comparator) nor
    ///   [`natural_order`](Self::natural_order) was called.
    /// - [`OrderedListError::InputNull`] if an initial item is absent.
    pub fn build(self) -> Result<OrderedList<T>>
    where
        T: Presence,
    {
        let comparator = self.comparator.ok_or(OrderedListError::MissingComparator)?;
        let list = OrderedList::with_options(comparator, self.options);
        if self.already_sorted {
            list.load_sorted(self.items)?;
        } else {
            list.add_all(self.items)?;
        }
        Ok(list)
    }
}

impl<T: Ord + 'static> OrderedListBuilder<T> {
    /// Orders the list by `T`'s natural order.
    #[must_use]
    pub fn natural_order(self) -> Self {
        self.comparator(Comparator::natural())
    }
}

impl<T> Default for OrderedListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedListBuilder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderedListBuilder")
            .field("has_comparator", &self.comparator.is_some())
            .field("options", &self.options)
            .field("items", &self.items.len())
            .field("already_sorted", &self.already_sorted)
            .finish()
    }
}
