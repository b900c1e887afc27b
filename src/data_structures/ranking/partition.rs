// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-place partition-exchange sort, descending by metric.

use super::MetricLookup;

/// Sorts `ids` in place so their metrics are non-increasing.
///
/// The last element of each range is the pivot. Elements whose metric is at
/// least the pivot's move in front of it. The sort is not stable.
///
/// Only the smaller partition is sorted recursively; the larger one is
/// handled by the loop, so the stack stays logarithmic even on sorted input.
pub fn partition_exchange_sort<Id, L>(mut ids: &mut [Id], lookup: &L)
where
    L: MetricLookup<Id> + ?Sized,
{
    while ids.len() > 1 {
        let pivot = partition(ids, lookup);
        let (left, right) = std::mem::take(&mut ids).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            partition_exchange_sort(left, lookup);
            ids = right;
        } else {
            partition_exchange_sort(right, lookup);
            ids = left;
        }
    }
}

/// Partitions `ids` around its last element and returns the pivot's final index.
fn partition<Id, L>(ids: &mut [Id], lookup: &L) -> usize
where
    L: MetricLookup<Id> + ?Sized,
{
    let last = ids.len() - 1;
    let pivot = lookup.metric(&ids[last]);
    let mut boundary = 0;

    for i in 0..last {
        if lookup.metric(&ids[i]) >= pivot {
            ids.swap(boundary, i);
            boundary += 1;
        }
    }
    ids.swap(boundary, last);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_value(id: &u32) -> u32 {
        *id
    }

    #[test]
    fn test_sorts_descending() {
        let mut ids = vec![3u32, 9, 1, 7, 5, 5, 0];
        partition_exchange_sort(&mut ids, &by_value);
        assert_eq!(ids, vec![9, 7, 5, 5, 3, 1, 0]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut ids = vec![4u32, 8, 2, 6, 5];
        let pivot = partition(&mut ids, &by_value);

        assert_eq!(ids[pivot], 5);
        assert!(ids[..pivot].iter().all(|&id| id >= 5));
        assert!(ids[pivot + 1..].iter().all(|&id| id < 5));
    }

    #[test]
    fn test_long_sorted_input() {
        let mut ids: Vec<u32> = (0..5_000).collect();
        partition_exchange_sort(&mut ids, &by_value);
        assert!(ids.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_metric_from_lookup() {
        let scores = [10u32, 30, 20];
        let mut ids = vec![0usize, 1, 2];
        partition_exchange_sort(&mut ids, &|id: &usize| scores[*id]);
        assert_eq!(ids, vec![1, 2, 0]);
    }
}
