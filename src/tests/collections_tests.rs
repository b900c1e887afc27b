//! Tests for the sequence collections and the unique set.

use crate::data_structures::collection_error::CollectionError;
use crate::data_structures::dynamic_array::DynamicArray;
use crate::data_structures::ordered_list::OrderedList;
use crate::data_structures::unique_set::UniqueSet;
use crate::tests::test_utils::title_strategy;
use proptest::prelude::*;
use test_case::test_case;

#[test_case(0 ; "empty")]
#[test_case(1 ; "single")]
#[test_case(10 ; "exactly default capacity")]
#[test_case(1_000 ; "many doublings")]
fn test_dynamic_array_growth(count: usize) {
    let mut array = DynamicArray::new();
    for i in 0..count {
        assert!(array.add(i));
    }
    assert_eq!(array.len(), count);
    assert!(array.capacity() >= count);
    assert!(array.iter().copied().eq(0..count));
}

#[test]
fn test_set_out_of_bounds_is_an_error() {
    let mut array: DynamicArray<u32> = (0..3).collect();
    assert_eq!(
        array.set(3, 9),
        Err(CollectionError::IndexOutOfBounds { index: 3, len: 3 })
    );

    let mut list: OrderedList<u32> = OrderedList::new();
    list.add(1);
    assert_eq!(
        list.set(5, 9),
        Err(CollectionError::IndexOutOfBounds { index: 5, len: 1 })
    );
}

#[test]
fn test_unique_set_iteration_is_restartable() {
    let set: UniqueSet<u32> = vec![3, 1, 3, 2, 1].into_iter().collect();
    let first: Vec<u32> = set.iter().copied().collect();
    let second: Vec<u32> = set.iter().copied().collect();
    assert_eq!(first, vec![3, 1, 2]);
    assert_eq!(first, second);
}

proptest! {
    /// Head insertion reverses the input order.
    #[test]
    fn prop_ordered_list_is_newest_first(values in proptest::collection::vec(any::<i32>(), 0..100)) {
        let mut list = OrderedList::new();
        for value in &values {
            list.add(*value);
        }
        prop_assert_eq!(list.len(), values.len());
        prop_assert!(list.iter().copied().eq(values.iter().rev().copied()));
    }

    /// Removing by value drops only the first match.
    #[test]
    fn prop_ordered_list_remove_first_match(values in proptest::collection::vec(0u8..8, 1..60), target in 0u8..8) {
        let mut list: OrderedList<u8> = OrderedList::new();
        for value in values.iter().rev() {
            list.add(*value);
        }
        let mut model = values.clone();
        let expected = model.iter().position(|v| *v == target).map(|i| model.remove(i));

        prop_assert_eq!(list.remove(&target), expected.is_some());
        prop_assert_eq!(list.len(), model.len());
        prop_assert!(list.iter().copied().eq(model.iter().copied()));
    }

    /// A unique set never holds two equal members.
    #[test]
    fn prop_unique_set_has_no_duplicates(titles in proptest::collection::vec(title_strategy(), 0..50)) {
        let mut set = UniqueSet::new();
        for title in &titles {
            let fresh = !set.contains(title);
            prop_assert_eq!(set.add(title.clone()), fresh);
        }

        let members: Vec<&String> = set.iter().collect();
        for (i, member) in members.iter().enumerate() {
            prop_assert!(!members[i + 1..].contains(member));
        }
    }

    /// Array removal by value matches `Vec` semantics.
    #[test]
    fn prop_dynamic_array_remove(values in proptest::collection::vec(0u8..8, 0..60), target in 0u8..8) {
        let mut array: DynamicArray<u8> = values.iter().copied().collect();
        let mut model = values.clone();
        let expected = model.iter().position(|v| *v == target).map(|i| model.remove(i));

        prop_assert_eq!(array.remove(&target), expected.is_some());
        prop_assert_eq!(array.as_slice(), model.as_slice());
        prop_assert_eq!(array.index_of(&target), model.iter().position(|v| *v == target));
    }
}
