use core::hash::BuildHasher;

use alloc::collections::VecDeque;
use listkit_iterate::from_function;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_utils::init_test_logging;
use crate::{ListAdapter, ListErrorKind, String, ToString, format, vec};

fn letters() -> ArrayAdapter<&'static str> {
    ArrayAdapter::from(["a", "b", "a", "c"])
}

fn numbers() -> ArrayAdapter<i32> {
    ArrayAdapter::from([1, 2, 3, 4, 5])
}

fn assert_rejected<R: fmt::Debug>(result: Result<R>, operation: &str) {
    let error = result.unwrap_err();
    assert_eq!(error.kind(), ListErrorKind::UnsupportedOperation);
    assert_eq!(error.operation(), Some(operation));
    assert_eq!(
        error.to_string(),
        format!("Cannot call {operation}() on ArrayAdapter")
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn wraps_without_copying() {
    let items: Box<[String]> = vec![String::from("x"), String::from("y")].into();
    let first = items.as_ptr();
    let adapter = ArrayAdapter::new(items);
    assert_eq!(adapter.as_slice().as_ptr(), first);
    let inner = adapter.into_inner();
    assert_eq!(inner.as_ptr(), first);
}

#[test]
fn adapt_rejects_absent_items() {
    init_test_logging();

    let error = ArrayAdapter::<i32>::adapt(None::<Vec<i32>>).unwrap_err();
    assert_eq!(
        error,
        ListError::InvalidArgument {
            message: "items cannot be null"
        }
    );
    assert_eq!(error.kind(), ListErrorKind::InvalidArgument);
    assert_eq!(error.to_string(), "items cannot be null");

    let adapter = ArrayAdapter::<i32>::adapt(Some(vec![1, 2])).unwrap();
    assert_eq!(adapter, [1, 2]);
}

#[test]
fn built_from_other_sources() {
    let collected: ArrayAdapter<i32> = (1..=3).collect();
    assert_eq!(collected, [1, 2, 3]);
    assert_eq!(ArrayAdapter::from(FastList::from([1, 2, 3])), collected);
    assert_eq!(ArrayAdapter::from(vec![1, 2, 3]), collected);
    assert_eq!(ArrayAdapter::<i32>::default(), ArrayAdapter::<i32>::empty());
}

// ============================================================================
// Element access
// ============================================================================

#[test]
fn empty_adapter() {
    let empty = ArrayAdapter::<i32>::empty();
    assert_eq!(empty.size(), 0);
    assert!(empty.is_empty());
    assert!(!empty.not_empty());
    assert_eq!(empty.get_first(), None);
    assert_eq!(empty.get_last(), None);
    assert_eq!(
        empty.get(0),
        Err(ListError::IndexOutOfRange { index: 0, size: 0 })
    );
    assert_eq!(empty.to_string(), "[]");
    assert!(empty.distinct().is_empty());
}

#[test]
fn positional_access() {
    let adapter = letters();
    assert_eq!(adapter.get(1), Ok(&"b"));
    assert_eq!(adapter.get_first(), Some(&"a"));
    assert_eq!(adapter.get_last(), Some(&"c"));
    assert_eq!(
        adapter.get(4).unwrap_err().to_string(),
        "Index: 4, Size: 4"
    );
}

#[test]
fn set_replaces_in_place() {
    let mut adapter = numbers();
    assert_eq!(adapter.set(0, 10), Ok(1));
    assert_eq!(
        adapter.set(5, 0),
        Err(ListError::IndexOutOfRange { index: 5, size: 5 })
    );
    assert_eq!(adapter, [10, 2, 3, 4, 5]);
    assert_eq!(adapter.size(), 5);
}

// ============================================================================
// Size-changing operations
// ============================================================================

#[test]
fn every_size_change_is_rejected() {
    init_test_logging();

    let mut adapter = letters();
    assert_rejected(adapter.add("d"), "add");
    assert_rejected(adapter.add_at(0, "d"), "add_at");
    assert_rejected(adapter.remove(&"a"), "remove");
    assert_rejected(adapter.remove_at(0), "remove_at");
    assert_rejected(adapter.clear(), "clear");
    assert_rejected(adapter.add_all(vec!["d"]), "add_all");
    assert_rejected(adapter.add_all_at(1, vec!["d"]), "add_all_at");
    assert_rejected(
        adapter.add_all_iterable(&mut ["d"].into_iter()),
        "add_all_iterable",
    );
    assert_rejected(adapter.remove_all(&["a"]), "remove_all");
    assert_rejected(
        adapter.remove_all_iterable(&mut ["a"].iter()),
        "remove_all_iterable",
    );
    assert_rejected(adapter.retain_all(&["a"]), "retain_all");
    assert_rejected(
        adapter.retain_all_iterable(&mut ["a"].iter()),
        "retain_all_iterable",
    );
    assert_rejected(
        adapter.remove_if(&mut |s: &&str| s.is_empty()),
        "remove_if",
    );
    assert_rejected(
        adapter.remove_if_with(|s: &&str, p: &str| *s == p, "a"),
        "remove_if_with",
    );

    assert_eq!(adapter, letters());
}

#[test]
fn rejection_comes_before_bounds_checks() {
    let mut adapter = numbers();
    assert_rejected(adapter.remove_at(99), "remove_at");
    assert_rejected(adapter.add_at(99, 0), "add_at");
    // Nothing to remove still counts as a size change.
    assert_rejected(adapter.remove(&42), "remove");
}

#[test]
fn to_list_is_growable() {
    let mut list = letters().to_list();
    assert_eq!(list.add("d"), Ok(true));
    assert_eq!(list, ["a", "b", "a", "c", "d"]);
}

// ============================================================================
// Searching and quantifiers
// ============================================================================

#[test]
fn finds_first_and_last_positions() {
    let adapter = letters();
    assert_eq!(adapter.index_of(&"a"), Some(0));
    assert_eq!(adapter.last_index_of(&"a"), Some(2));
    assert_eq!(adapter.index_of(&"z"), None);
    assert_eq!(adapter.detect_index(|s| *s == "c"), Some(3));
    assert_eq!(adapter.detect_last_index(|s| *s != "c"), Some(2));
    assert!(adapter.contains(&"b"));
    assert!(adapter.contains_all(&["a", "c"]));
    assert!(!adapter.contains_all(&["a", "z"]));
}

#[test]
fn detect_variants() {
    let adapter = numbers();
    assert_eq!(adapter.detect(|n| *n > 3), Some(&4));
    assert_eq!(adapter.detect_with(|n, limit| n > limit, &10), None);
    assert_eq!(adapter.detect_if_none(|n| *n > 10, || -1), -1);
    assert_eq!(adapter.detect_with_if_none(|n, m| n == m, &2, || -1), 2);
}

#[test]
fn predicates_and_counts() {
    let adapter = numbers();
    assert_eq!(adapter.count(|n| n % 2 == 1), 3);
    assert_eq!(adapter.count_with(|n, limit| n > limit, &3), 2);
    assert!(adapter.any_satisfy(|n| *n == 5));
    assert!(adapter.all_satisfy(|n| *n > 0));
    assert!(adapter.none_satisfy(|n| *n > 5));
    assert!(adapter.all_satisfy_with(|n, limit| n <= limit, &5));
    assert!(!adapter.any_satisfy_with(|n, limit| n > limit, &5));
    assert!(adapter.none_satisfy_with(|n, m| n == m, &0));

    let empty = ArrayAdapter::<i32>::empty();
    assert!(empty.all_satisfy(|_| false));
    assert!(!empty.any_satisfy(|_| true));
}

#[test]
fn selected_satisfy_and_rejected_do_not() {
    let adapter = numbers();
    let even = |n: &i32| n % 2 == 0;
    let selected = adapter.select(even);
    let rejected = adapter.reject(even);
    assert_eq!(selected, [2, 4]);
    assert_eq!(rejected, [1, 3, 5]);
    assert!(selected.all_satisfy(even));
    assert!(rejected.none_satisfy(even));
    assert_eq!(selected.size() + rejected.size(), adapter.size());

    let (low, high) = adapter.select_and_reject_with(|n, limit| n < limit, &3);
    assert_eq!(low, [1, 2]);
    assert_eq!(high, [3, 4, 5]);
    assert_eq!(adapter.select_with(|n, m| n == m, &4), [4]);
    assert_eq!(adapter.reject_with(|n, m| n != m, &4), [4]);

    let mut target = vec![0];
    target = adapter.select_into(|n| *n > 4, target);
    assert_eq!(target, vec![0, 5]);
}

#[test]
fn into_forms_append_to_existing_targets() {
    let adapter = numbers();

    let odd = adapter.reject_into(|n| n % 2 == 0, FastList::from([0]));
    assert_eq!(odd, [0, 1, 3, 5]);

    let small = adapter.reject_with_into(|n, limit| n > limit, &2, vec![-1]);
    assert_eq!(small, vec![-1, 1, 2]);

    let big = adapter.select_with_into(|n, limit| n > limit, &3, vec![-1]);
    assert_eq!(big, vec![-1, 4, 5]);

    let doubled = adapter.collect_into(|n| n * 2, FastList::from([100]));
    assert_eq!(doubled, [100, 2, 4, 6, 8, 10]);

    let scaled = adapter.collect_with_into(|n, factor| n * factor, &10, vec![0]);
    assert_eq!(scaled, vec![0, 10, 20, 30, 40, 50]);

    let odd_squares = adapter.collect_if_into(|n| n % 2 == 1, |n| n * n, vec![0]);
    assert_eq!(odd_squares, vec![0, 1, 9, 25]);

    let pairs = ArrayAdapter::from([1, 2]).flat_collect_into(|n| [*n, -*n], vec![0]);
    assert_eq!(pairs, vec![0, 1, -1, 2, -2]);
}

#[test]
fn corresponds_pairs_positions() {
    let adapter = ArrayAdapter::from([1, 2, 3]);
    assert!(adapter.corresponds(&[2, 4, 6][..], |a, b| a * 2 == *b));
    assert!(!adapter.corresponds(&[2, 4][..], |_, _| true));

    let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
    assert!(adapter.corresponds(&deque, |a, b| a == b));
}

// ============================================================================
// Derived lists
// ============================================================================

#[test]
fn distinct_keeps_first_occurrences() {
    assert_eq!(letters().distinct(), ["a", "b", "c"]);

    let fruit = ArrayAdapter::from(["apple", "avocado", "banana", "blueberry", "cherry"]);
    let by_initial = from_function(|s: &&str| s.chars().next());
    assert_eq!(fruit.distinct_by(&by_initial), ["apple", "banana", "cherry"]);
}

#[test]
fn take_and_drop_are_clamped() {
    let adapter = letters();
    assert_eq!(adapter.take(2), ["a", "b"]);
    assert_eq!(adapter.drop(2), ["a", "c"]);
    assert_eq!(adapter.take(10), adapter);
    assert!(adapter.drop(10).is_empty());
    assert!(adapter.take(0).is_empty());

    for count in 0..=6 {
        let mut joined = adapter.take(count).into_vec();
        joined.extend(adapter.drop(count));
        assert_eq!(joined, adapter.as_slice());
    }
}

#[test]
fn mapping_and_folding() {
    let adapter = letters();
    assert_eq!(adapter.collect(|s| s.len()), [1, 1, 1, 1]);
    assert_eq!(
        adapter.collect_with(|s, suffix| format!("{s}{suffix}"), "!"),
        ["a!", "b!", "a!", "c!"]
    );
    assert_eq!(
        adapter.collect_if(|s| *s == "a", |s| s.to_uppercase()),
        ["A", "A"]
    );

    let counts = ArrayAdapter::from([1usize, 2]);
    assert_eq!(counts.flat_collect(|n| vec![*n; *n]), [1, 2, 2]);

    assert_eq!(numbers().inject_into(0, |sum, n| sum + n), 15);
    assert_eq!(
        numbers().inject_into_with(0, |sum, n, factor| sum + n * factor, &2),
        30
    );
}

// ============================================================================
// Ranges and iteration
// ============================================================================

#[test]
fn ranged_visits() {
    init_test_logging();

    let adapter = numbers();
    let mut seen = Vec::new();
    adapter.for_each_in(1, 3, |n| seen.push(*n)).unwrap();
    assert_eq!(seen, vec![2, 3]);

    let mut indices = Vec::new();
    adapter
        .for_each_with_index_in(3, 5, |_, index| indices.push(index))
        .unwrap();
    assert_eq!(indices, vec![3, 4]);

    assert_eq!(adapter.for_each_in(2, 2, |_| unreachable!()), Ok(()));
    assert_eq!(
        adapter.for_each_in(3, 2, |_| {}),
        Err(ListError::InvertedRange { from: 3, to: 2 })
    );
    assert_eq!(
        adapter.for_each_with_index_in(0, 6, |_, _| {}),
        Err(ListError::IndexOutOfRange { index: 6, size: 5 })
    );
}

#[test]
fn sub_list_is_a_view() {
    let adapter = numbers();
    let view = adapter.sub_list(1, 4).unwrap();
    assert_eq!(view, [2, 3, 4]);
    assert_eq!(view.as_slice().as_ptr(), adapter.as_slice()[1..].as_ptr());
    assert!(adapter.sub_list(5, 5).unwrap().is_empty());
    assert_eq!(
        adapter.sub_list(2, 1).unwrap_err(),
        ListError::InvertedRange { from: 2, to: 1 }
    );
    assert_eq!(
        adapter.sub_list(0, 6).unwrap_err(),
        ListError::IndexOutOfRange { index: 6, size: 5 }
    );
}

#[test]
fn iterators_start_fresh() {
    let adapter = letters();
    assert_eq!(adapter.iterator().count(), 4);
    assert_eq!(adapter.iterator().next(), Some(&"a"));

    let mut cursor = adapter.list_iterator(2).unwrap();
    assert_eq!(cursor.previous(), Some(&"b"));
    assert_eq!(cursor.next(), Some(&"b"));
    assert_eq!(cursor.next(), Some(&"a"));

    assert!(!adapter.list_iterator(4).unwrap().has_next());
    assert_eq!(
        adapter.list_iterator(5).unwrap_err(),
        ListError::IndexOutOfRange { index: 5, size: 4 }
    );

    let owned: Vec<i32> = numbers().into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4, 5]);
}

#[test]
fn each_visits_in_order() {
    let adapter = letters();
    let mut out = String::new();
    adapter.each(|s| out.push_str(s));
    assert_eq!(out, "abac");

    let mut pairs = Vec::new();
    adapter.for_each_with_index(|s, index| pairs.push((index, *s)));
    assert_eq!(pairs[3], (3, "c"));

    let mut tagged = Vec::new();
    adapter.for_each_with(|s, tag| tagged.push(format!("{tag}{s}")), "#");
    assert_eq!(tagged[0], "#a");
}

// ============================================================================
// Copying out
// ============================================================================

#[test]
fn to_array_copies() {
    let adapter = numbers();
    let copy = adapter.to_array();
    assert_eq!(&*copy, adapter.as_slice());
    assert_ne!(copy.as_ptr(), adapter.as_slice().as_ptr());
}

#[test]
fn to_array_into_reuses_large_enough_buffers() {
    let adapter = ArrayAdapter::from([1, 2]);

    let exact = adapter.to_array_into(vec![None, None]);
    assert_eq!(exact, vec![Some(1), Some(2)]);

    let longer = adapter.to_array_into(vec![Some(9); 4]);
    assert_eq!(longer, vec![Some(1), Some(2), None, Some(9)]);

    let short = adapter.to_array_into(vec![Some(9)]);
    assert_eq!(short, vec![Some(1), Some(2)]);
}

// ============================================================================
// In-place reordering
// ============================================================================

#[test]
fn sorts_and_reverses_in_place() {
    let mut adapter = ArrayAdapter::from([3, 1, 2]);
    adapter.sort_this();
    assert_eq!(adapter, [1, 2, 3]);
    adapter.reverse_this();
    assert_eq!(adapter, [3, 2, 1]);
    adapter.sort_this_by(|a, b| (a % 2).cmp(&(b % 2)).then(a.cmp(b)));
    assert_eq!(adapter, [2, 1, 3]);

    let mut copy = adapter.clone();
    copy.as_mut_slice()[0] = 0;
    assert_eq!(adapter.get(0), Ok(&2));
}

#[test]
fn new_with_appends_one() {
    let longer = ArrayAdapter::from(["a"]).new_with("b");
    assert_eq!(longer, ["a", "b"]);
    assert_eq!(longer.size(), 2);
}

// ============================================================================
// Equality, hashing, rendering
// ============================================================================

#[test]
fn equality_across_list_kinds() {
    let adapter = ArrayAdapter::from([1, 2, 3]);
    assert!(adapter.array_adapter_equals(&ArrayAdapter::from([1, 2, 3])));
    assert!(adapter.equals_list(FastList::from([1, 2, 3]).as_slice()));

    let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
    assert!(adapter.equals_list(&deque));
    let shorter: VecDeque<i32> = [1, 2].into_iter().collect();
    assert!(!adapter.equals_list(&shorter));

    assert_eq!(adapter, FastList::from([1, 2, 3]));
    assert_ne!(adapter, ArrayAdapter::from([1, 2]));
}

#[test]
fn hashes_agree_across_list_kinds() {
    let adapter = ArrayAdapter::from([1, 2, 3]);
    let list = FastList::from([1, 2, 3]);
    let backing = [0, 1, 2, 3];
    let view = ListAdapter::new(&backing[1..]);

    let hasher = hashbrown::DefaultHashBuilder::default();
    assert_eq!(hasher.hash_one(&adapter), hasher.hash_one(&list));
    assert_eq!(hasher.hash_one(&adapter), hasher.hash_one(view));
    assert_eq!(
        adapter.ordered_hash_code(&hasher),
        list.ordered_hash_code(&hasher)
    );
    assert_ne!(
        adapter.ordered_hash_code(&hasher),
        ArrayAdapter::from([3, 2, 1]).ordered_hash_code(&hasher)
    );

    let mut set = hashbrown::HashSet::new();
    set.insert(adapter.clone());
    assert!(set.contains(&ArrayAdapter::from([1, 2, 3])));
}

#[test]
fn renders_elements() {
    let adapter = letters();
    assert_eq!(adapter.to_string(), "[a, b, a, c]");
    assert_eq!(format!("{adapter:?}"), r#"["a", "b", "a", "c"]"#);
    assert_eq!(adapter.make_string("/"), "a/b/a/c");

    let mut out = String::from(">");
    adapter.append_string(&mut out, "{", "; ", "}").unwrap();
    assert_eq!(out, ">{a; b; a; c}");
}
