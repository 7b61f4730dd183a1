//! Unit tests for OrderedList.
//!
//! Covers construction, the duplicate policies, searches, positional writes,
//! bulk operations, resorting and iteration.

#![cfg(all(feature = "ordered", not(feature = "loom")))]

use std::cmp::Ordering;

use ordlist::ordered::{
    Comparator, NeighborSide, OrderedList, OrderedListError, OrderedListOptions, SearchIndex,
};
use rstest::{fixture, rstest};

fn is_sorted_by<T>(items: &[T], comparator: &Comparator<T>, strict: bool) -> bool {
    items.windows(2).all(|pair| match comparator.compare(&pair[0], &pair[1]) {
        Ordering::Less => true,
        Ordering::Equal => !strict,
        Ordering::Greater => false,
    })
}

#[fixture]
fn unique_strings() -> OrderedList<String> {
    OrderedList::new()
}

#[fixture]
fn a_c() -> OrderedList<&'static str> {
    let list = OrderedList::new();
    list.add_all(["a", "c"]).unwrap();
    list
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_is_empty_unique_and_keeps_existing() {
    let list: OrderedList<i32> = OrderedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(!list.permit_duplicates());
    assert!(!list.replace());
}

#[rstest]
fn test_with_comparator_permits_duplicates() {
    let list = OrderedList::with_comparator(Comparator::<i32>::natural());
    assert!(list.permit_duplicates());
    // Replace is only meaningful without duplicates.
    assert!(!list.replace());
}

#[rstest]
fn test_with_comparator_accepts_closure() {
    let list = OrderedList::with_comparator(|left: &i32, right: &i32| right.cmp(left));
    list.add_all([1, 3, 2]).unwrap();
    assert_eq!(list.to_vec(), vec![3, 2, 1]);
}

#[rstest]
fn test_builder_without_comparator_fails() {
    let result = OrderedList::<String>::builder()
        .permit_duplicates(false)
        .build();
    assert_eq!(result.unwrap_err(), OrderedListError::MissingComparator);
}

#[rstest]
fn test_builder_sorts_unsorted_items() {
    let list = OrderedList::builder()
        .natural_order()
        .items([5, 3, 9, 1])
        .build()
        .unwrap();
    assert_eq!(list.to_vec(), vec![1, 3, 5, 9]);
}

#[rstest]
fn test_builder_stores_already_sorted_items_verbatim() {
    // Unverified claim: the items are kept in the given order.
    let list = OrderedList::builder()
        .natural_order()
        .items([3, 2, 1])
        .already_sorted(true)
        .build()
        .unwrap();
    assert_eq!(list.to_vec(), vec![3, 2, 1]);
}

#[rstest]
fn test_builder_rejects_absent_item() {
    let result = OrderedList::builder()
        .natural_order()
        .items([Some(1), None])
        .build();
    assert_eq!(
        result.unwrap_err(),
        OrderedListError::InputNull { argument: "items" }
    );
}

#[rstest]
fn test_from_sorted_vec_keeps_contents() {
    let list = OrderedList::from_sorted_vec(vec![1, 5, 9]).unwrap();
    assert_eq!(list.to_vec(), vec![1, 5, 9]);
    assert!(!list.permit_duplicates());
    assert_eq!(list.add(5).unwrap(), SearchIndex::found(1));
}

#[rstest]
fn test_from_sorted_vec_rejects_absent_item() {
    let result = OrderedList::from_sorted_vec(vec![None, Some(2)]);
    assert_eq!(
        result.unwrap_err(),
        OrderedListError::InputNull { argument: "items" }
    );
}

#[rstest]
fn test_try_from_vec_sorts_and_deduplicates() {
    let list = OrderedList::try_from(vec![Some(4), Some(2), Some(4)]).unwrap();
    assert_eq!(list.to_vec(), vec![Some(2), Some(4)]);
}

#[rstest]
fn test_try_from_vec_rejects_absent_item() {
    let result = OrderedList::try_from(vec![Some(2), None, Some(1)]);
    assert_eq!(
        result.unwrap_err(),
        OrderedListError::InputNull { argument: "items" }
    );
}

// =============================================================================
// Adding
// =============================================================================

#[rstest]
fn test_scenario_adds_sort_unique_strings(unique_strings: OrderedList<String>) {
    unique_strings.add("b".to_string()).unwrap();
    unique_strings.add("a".to_string()).unwrap();
    unique_strings.add("c".to_string()).unwrap();

    assert_eq!(unique_strings.to_vec(), vec!["a", "b", "c"]);
    assert_eq!(unique_strings.index_of(&"b".to_string()).raw(), 1);
}

#[rstest]
fn test_scenario_readd_without_replace_keeps_slot(unique_strings: OrderedList<String>) {
    // `new()`: duplicates disallowed, replace disabled.
    unique_strings
        .add_all(["b", "a", "c"].map(String::from))
        .unwrap();
    let index = unique_strings.add("b".to_string()).unwrap();

    assert_eq!(index, SearchIndex::found(1));
    assert_eq!(unique_strings.len(), 3);
}

#[rstest]
fn test_scenario_duplicates_accumulate() {
    let list = OrderedList::with_comparator(Comparator::<&str>::natural());
    for item in ["a", "a", "b"] {
        list.add(item).unwrap();
    }
    assert_eq!(list.to_vec(), vec!["a", "a", "b"]);
    assert_eq!(list.len(), 3);
}

#[rstest]
fn test_add_returns_complement_for_new_item() {
    let list = OrderedList::new();
    list.add_all([10, 30]).unwrap();
    let index = list.add(20).unwrap();
    assert_eq!(index.raw(), !1);
    assert_eq!(list.to_vec(), vec![10, 20, 30]);
}

#[rstest]
fn test_replace_overwrites_equal_element() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(i32, char)| pair.0),
        OrderedListOptions::unique_replacing(),
    );
    list.add_all([(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();

    let index = list.add((2, 'z')).unwrap();

    assert_eq!(index, SearchIndex::found(1));
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_vec(), vec![(1, 'a'), (2, 'z'), (3, 'c')]);
}

#[rstest]
fn test_no_replace_keeps_equal_element() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(i32, char)| pair.0),
        OrderedListOptions::unique(),
    );
    list.add_all([(1, 'a'), (2, 'b')]).unwrap();

    let index = list.add((2, 'z')).unwrap();

    assert_eq!(index, SearchIndex::found(1));
    assert_eq!(list.to_vec(), vec![(1, 'a'), (2, 'b')]);
}

#[rstest]
fn test_duplicates_keep_run_contiguous() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(i32, char)| pair.0),
        OrderedListOptions::duplicates(),
    );
    list.add_all([(2, 'a'), (1, 'x'), (2, 'b'), (3, 'y'), (2, 'c')])
        .unwrap();

    let keys: Vec<i32> = list.iter().map(|pair| pair.0).collect();
    assert_eq!(keys, vec![1, 2, 2, 2, 3]);
}

#[rstest]
fn test_add_rejects_absent_item() {
    let list = OrderedList::new();
    list.add(Some(1)).unwrap();

    assert_eq!(
        list.add(None),
        Err(OrderedListError::InputNull { argument: "item" })
    );
    assert_eq!(list.to_vec(), vec![Some(1)]);
}

#[rstest]
fn test_add_all_rejects_batch_with_absent_item_before_mutating() {
    let list = OrderedList::new();
    let result = list.add_all([Some(3), None, Some(1)]);

    assert_eq!(result, Err(OrderedListError::InputNull { argument: "items" }));
    assert!(list.is_empty());
}

#[rstest]
fn test_add_all_empty_is_noop() {
    let list: OrderedList<i32> = OrderedList::new();
    list.add_all(Vec::new()).unwrap();
    assert!(list.is_empty());
}

// =============================================================================
// append_sorted / load_sorted
// =============================================================================

#[rstest]
fn test_append_sorted_extends_tail() {
    let list = OrderedList::new();
    list.add_all([1, 2]).unwrap();
    list.append_sorted([3, 4, 5]).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
#[case(OrderedListOptions::unique(), vec![3, 4], true)]
#[case(OrderedListOptions::unique(), vec![2, 4], false)]
#[case(OrderedListOptions::unique(), vec![1, 4], false)]
#[case(OrderedListOptions::duplicates(), vec![2, 4], true)]
#[case(OrderedListOptions::duplicates(), vec![1, 4], false)]
fn test_append_sorted_boundary(
    #[case] options: OrderedListOptions,
    #[case] incoming: Vec<i32>,
    #[case] accepted: bool,
) {
    let list = OrderedList::with_options(Comparator::<i32>::natural(), options);
    list.add_all([1, 2]).unwrap();

    let result = list.append_sorted(incoming);

    if accepted {
        assert!(result.is_ok());
        assert_eq!(list.len(), 4);
    } else {
        assert_eq!(result, Err(OrderedListError::RangeViolation));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }
}

#[rstest]
fn test_append_sorted_into_empty_list() {
    let list = OrderedList::new();
    list.append_sorted(["x", "y"]).unwrap();
    assert_eq!(list.to_vec(), vec!["x", "y"]);
}

#[rstest]
fn test_append_sorted_rejects_absent_item() {
    let list = OrderedList::new();
    let result = list.append_sorted([Some(1), None]);
    assert_eq!(result, Err(OrderedListError::InputNull { argument: "items" }));
    assert!(list.is_empty());
}

#[rstest]
fn test_load_sorted_replaces_contents() {
    let list = OrderedList::new();
    list.add_all([7, 8, 9]).unwrap();
    list.load_sorted([1, 2]).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2]);
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
fn test_index_of_missing_gives_insertion_point() {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();

    let index = list.index_of(&25);
    assert!(!index.is_found());
    assert_eq!(index.insertion_point(), Some(2));
    assert!(!list.contains(&25));
    assert!(list.contains(&30));
}

#[rstest]
fn test_projection_search_on_unique_list() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(u8, &'static str)| pair.0),
        OrderedListOptions::unique(),
    );
    list.add_all([(3, "three"), (1, "one"), (2, "two")]).unwrap();

    assert_eq!(list.index_of_by(|pair| pair.0.cmp(&2)), SearchIndex::found(1));
    assert_eq!(list.item_by(|pair| pair.0.cmp(&3)), Some((3, "three")));
    assert_eq!(list.item_by(|pair| pair.0.cmp(&4)), None);
    assert!(list.contains_by(|pair| pair.0.cmp(&1)));
}

#[rstest]
fn test_projection_search_with_duplicates_lands_on_run_start() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(u8, char)| pair.0),
        OrderedListOptions::duplicates(),
    );
    list.add_all([(1, 'a'), (5, 'b'), (5, 'c'), (5, 'd'), (5, 'e'), (9, 'f')])
        .unwrap();

    let index = list.index_of_by(|pair| pair.0.cmp(&5));
    assert_eq!(index, SearchIndex::found(1));

    let missing = list.index_of_by(|pair| pair.0.cmp(&6));
    assert_eq!(missing.insertion_point(), Some(5));
}

#[rstest]
fn test_projection_uses_values_read_before_search() {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();

    // The projection runs under the list lock, so list state it needs is read up front.
    let last = list.last().unwrap();
    assert_eq!(list.index_of_by(|item| item.cmp(&last)), SearchIndex::found(2));
    assert_eq!(list.remove_by(|item| item.cmp(&last)).1, Some(30));
}

#[rstest]
fn test_key_search_uses_borrowed_form(unique_strings: OrderedList<String>) {
    unique_strings
        .add_all(["pear", "apple", "fig"].map(String::from))
        .unwrap();

    assert_eq!(unique_strings.index_of_key("fig"), SearchIndex::found(1));
    assert!(unique_strings.contains_key("apple"));
    assert_eq!(unique_strings.item_key("pear"), Some("pear".to_string()));
    assert_eq!(unique_strings.item_key("plum"), None);
}

// =============================================================================
// Removing
// =============================================================================

#[rstest]
fn test_remove_returns_index_of_removed_item() {
    let list = OrderedList::new();
    list.add_all([1, 2, 3]).unwrap();

    assert_eq!(list.remove(&2), SearchIndex::found(1));
    assert_eq!(list.to_vec(), vec![1, 3]);
}

#[rstest]
fn test_remove_missing_leaves_list_unchanged() {
    let list = OrderedList::new();
    list.add_all([1, 3]).unwrap();

    let index = list.remove(&2);
    assert_eq!(index, SearchIndex::vacant(1));
    assert_eq!(list.to_vec(), vec![1, 3]);
}

#[rstest]
fn test_remove_by_returns_removed_item() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(u8, char)| pair.0),
        OrderedListOptions::unique(),
    );
    list.add_all([(1, 'a'), (2, 'b')]).unwrap();

    let (index, removed) = list.remove_by(|pair| pair.0.cmp(&2));
    assert_eq!(index, SearchIndex::found(1));
    assert_eq!(removed, Some((2, 'b')));

    let (missing, nothing) = list.remove_by(|pair| pair.0.cmp(&2));
    assert!(!missing.is_found());
    assert_eq!(nothing, None);
}

#[rstest]
fn test_remove_key(unique_strings: OrderedList<String>) {
    unique_strings
        .add_all(["x", "y"].map(String::from))
        .unwrap();
    let (index, removed) = unique_strings.remove_key("x");
    assert_eq!(index, SearchIndex::found(0));
    assert_eq!(removed.as_deref(), Some("x"));
    assert_eq!(unique_strings.to_vec(), vec!["y"]);
}

#[rstest]
#[case(0, Some(10))]
#[case(2, Some(30))]
#[case(3, None)]
#[case(usize::MAX, None)]
fn test_remove_at(#[case] index: usize, #[case] expected: Option<i32>) {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();
    let before = list.len();

    assert_eq!(list.remove_at(index), expected);
    assert_eq!(list.len(), before - usize::from(expected.is_some()));
}

#[rstest]
fn test_remove_all_counts_found_items() {
    let list = OrderedList::new();
    list.add_all(1..=6).unwrap();
    let removed = list.remove_all([2, 4, 8]);
    assert_eq!(removed, 2);
    assert_eq!(list.to_vec(), vec![1, 3, 5, 6]);
}

#[rstest]
fn test_clear() {
    let list = OrderedList::new();
    list.add_all([1, 2]).unwrap();
    list.clear();
    assert!(list.is_empty());
}

// =============================================================================
// Positional insert / set
// =============================================================================

#[rstest]
fn test_scenario_positional_insert_between_neighbours(a_c: OrderedList<&'static str>) {
    a_c.insert(1, "b").unwrap();
    assert_eq!(a_c.to_vec(), vec!["a", "b", "c"]);
}

#[rstest]
fn test_scenario_positional_insert_violates_successor(a_c: OrderedList<&'static str>) {
    let error = a_c.insert(1, "z").unwrap_err();
    assert_eq!(
        error,
        OrderedListError::OrderingViolation {
            index: 1,
            side: NeighborSide::Successor,
        }
    );
    assert_eq!(a_c.to_vec(), vec!["a", "c"]);
}

#[rstest]
fn test_positional_insert_with_reversed_comparator() {
    // Under a descending order "x" does sort between "c" and "a".
    let list = OrderedList::with_options(
        Comparator::<&str>::natural().reversed(),
        OrderedListOptions::unique(),
    );
    list.add_all(["a", "c"]).unwrap();
    assert_eq!(list.to_vec(), vec!["c", "a"]);

    list.insert(0, "x").unwrap();
    assert_eq!(list.to_vec(), vec!["x", "c", "a"]);
}

#[rstest]
#[case(0, "0", Ok(()))]
#[case(2, "d", Ok(()))]
#[case(0, "b", Err(NeighborSide::Successor))]
#[case(2, "b", Err(NeighborSide::Predecessor))]
#[case(1, "a", Err(NeighborSide::Predecessor))]
#[case(1, "c", Err(NeighborSide::Successor))]
fn test_positional_insert_edges(
    a_c: OrderedList<&'static str>,
    #[case] index: usize,
    #[case] item: &'static str,
    #[case] expected: Result<(), NeighborSide>,
) {
    let result = a_c.insert(index, item);
    match expected {
        Ok(()) => assert!(result.is_ok()),
        Err(side) => assert_eq!(
            result,
            Err(OrderedListError::OrderingViolation { index, side })
        ),
    }
}

#[rstest]
fn test_positional_insert_accepts_equal_neighbour_with_duplicates() {
    let list = OrderedList::with_comparator(Comparator::<i32>::natural());
    list.add_all([1, 2]).unwrap();
    list.insert(1, 1).unwrap();
    assert_eq!(list.to_vec(), vec![1, 1, 2]);
}

#[rstest]
fn test_positional_insert_past_end_is_out_of_range(a_c: OrderedList<&'static str>) {
    assert_eq!(
        a_c.insert(5, "z"),
        Err(OrderedListError::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[rstest]
fn test_set_replaces_in_order_value() {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();

    let previous = list.set(1, 25).unwrap();
    assert_eq!(previous, 20);
    assert_eq!(list.to_vec(), vec![10, 25, 30]);
}

#[rstest]
#[case(0, 35, NeighborSide::Successor)]
#[case(2, 5, NeighborSide::Predecessor)]
#[case(1, 40, NeighborSide::Successor)]
#[case(1, 5, NeighborSide::Predecessor)]
fn test_set_rejects_out_of_order_value(
    #[case] index: usize,
    #[case] value: i32,
    #[case] side: NeighborSide,
) {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();

    assert_eq!(
        list.set(index, value),
        Err(OrderedListError::OrderingViolation { index, side })
    );
    assert_eq!(list.to_vec(), vec![10, 20, 30]);
}

#[rstest]
fn test_set_last_checks_predecessor_only() {
    let list = OrderedList::new();
    list.add_all([10, 20, 30]).unwrap();
    assert_eq!(list.set(2, 99), Ok(30));
    assert_eq!(list.to_vec(), vec![10, 20, 99]);
}

#[rstest]
fn test_set_out_of_range() {
    let list = OrderedList::new();
    list.add(1).unwrap();
    assert_eq!(
        list.set(1, 2),
        Err(OrderedListError::IndexOutOfRange { index: 1, len: 1 })
    );
}

// =============================================================================
// Sorting / comparator changes
// =============================================================================

#[rstest]
fn test_set_comparator_resorts_immediately() {
    let list = OrderedList::with_comparator(Comparator::<i32>::natural());
    list.add_all([4, 1, 3, 2]).unwrap();

    list.set_comparator(Comparator::<i32>::natural().reversed());

    let comparator = list.comparator();
    assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    assert!(is_sorted_by(&list.to_vec(), &comparator, false));
    assert_eq!(list.index_of(&3), SearchIndex::found(1));
}

#[rstest]
fn test_set_comparator_merges_newly_equal_elements_without_duplicates() {
    let list = OrderedList::new();
    list.add_all(["aa", "b", "cc"]).unwrap();

    list.set_comparator(Comparator::by_key(|word: &&'static str| word.len()));

    // "aa" and "cc" now compare equal; the first one stays.
    assert_eq!(list.to_vec(), vec!["b", "aa"]);
}

#[rstest]
fn test_sort_keeps_equal_run_order_with_duplicates() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(i32, char)| pair.0),
        OrderedListOptions::duplicates(),
    );
    let original = vec![(1, 'a'), (1, 'b'), (1, 'c'), (2, 'd')];
    list.load_sorted(original.clone()).unwrap();

    list.sort();
    assert_eq!(list.to_vec(), original);

    list.sort();
    assert_eq!(list.to_vec(), original);
}

#[rstest]
fn test_set_comparator_is_stable_with_duplicates() {
    let list = OrderedList::with_options(
        Comparator::by_key(|pair: &(i32, char)| pair.1),
        OrderedListOptions::duplicates(),
    );
    list.add_all([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]).unwrap();

    list.set_comparator(Comparator::by_key(|pair: &(i32, char)| pair.0));

    assert_eq!(list.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[rstest]
fn test_reverse_then_sort_restores_order() {
    let list = OrderedList::new();
    list.add_all([1, 2, 3]).unwrap();

    list.reverse();
    assert_eq!(list.to_vec(), vec![3, 2, 1]);

    list.sort();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_sort_with_reports_each_item() {
    let list = OrderedList::builder()
        .natural_order()
        .items([3, 1, 2])
        .already_sorted(true)
        .build()
        .unwrap();

    let mut reported = Vec::new();
    list.sort_with(|item, slot| reported.push((*item, slot)));

    assert_eq!(reported, vec![(3, 0), (1, 0), (2, 1)]);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_sort_with_callback_may_reenter_list() {
    let list = OrderedList::new();
    list.add_all([2, 1]).unwrap();

    let mut seen_lengths = Vec::new();
    list.sort_with(|_, _| seen_lengths.push(list.len()));

    assert_eq!(seen_lengths, vec![2, 2]);
}

// =============================================================================
// Cloning / iteration / copying
// =============================================================================

#[rstest]
fn test_clone_is_independent() {
    let original = OrderedList::new();
    original.add_all([1, 2, 3]).unwrap();

    let copy = original.clone();
    copy.add(4).unwrap();
    copy.remove(&1);

    assert_eq!(original.to_vec(), vec![1, 2, 3]);
    assert_eq!(original.len(), 3);
    assert_eq!(copy.to_vec(), vec![2, 3, 4]);
    assert_eq!(copy.permit_duplicates(), original.permit_duplicates());
}

#[rstest]
fn test_for_each_allows_mutation_during_traversal() {
    let list = OrderedList::new();
    list.add_all([1, 2, 3, 4]).unwrap();

    let mut visited = Vec::new();
    list.for_each(|item| {
        visited.push(*item);
        list.remove(item);
    });

    assert_eq!(visited, vec![1, 2, 3, 4]);
    assert!(list.is_empty());
}

#[rstest]
fn test_for_each_indexed_reports_snapshot_positions() {
    let list = OrderedList::new();
    list.add_all(['c', 'a', 'b']).unwrap();

    let mut pairs = Vec::new();
    list.for_each_indexed(|item, index| pairs.push((index, *item)));

    assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
}

#[rstest]
fn test_iteration_uses_snapshot() {
    let list = OrderedList::new();
    list.add_all([1, 2]).unwrap();

    let mut collected = Vec::new();
    for item in &list {
        list.add(item + 10).unwrap();
        collected.push(item);
    }

    assert_eq!(collected, vec![1, 2]);
    assert_eq!(list.to_vec(), vec![1, 2, 11, 12]);
}

#[rstest]
fn test_accessors() {
    let list = OrderedList::new();
    list.add_all([5, 3, 8]).unwrap();
    assert_eq!(list.first(), Some(3));
    assert_eq!(list.last(), Some(8));
    assert_eq!(list.get(1), Some(5));
    assert_eq!(list.get(3), None);
}

#[rstest]
fn test_copy_to_writes_at_offset() {
    let list = OrderedList::new();
    list.add_all([2, 1]).unwrap();

    let mut target = [0; 4];
    list.copy_to(&mut target, 1).unwrap();
    assert_eq!(target, [0, 1, 2, 0]);
}

#[rstest]
fn test_copy_to_rejects_short_target() {
    let list = OrderedList::new();
    list.add_all([1, 2, 3]).unwrap();

    let mut target = [0; 3];
    assert_eq!(
        list.copy_to(&mut target, 1),
        Err(OrderedListError::IndexOutOfRange { index: 1, len: 3 })
    );
    assert_eq!(target, [0, 0, 0]);
}

#[rstest]
fn test_debug_shows_items_and_policy() {
    let list = OrderedList::new();
    list.add(1).unwrap();
    let rendered = format!("{list:?}");
    assert!(rendered.contains("items: [1]"));
    assert!(rendered.contains("permit_duplicates: false"));
}
