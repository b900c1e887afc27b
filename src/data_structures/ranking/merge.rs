// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Stable merge sort over `(id, metric)` pairs, descending by metric.

use std::cmp::Ordering;

/// Sorts pairs so metrics are non-increasing.
///
/// Pairs with equal metrics keep their input order.
pub fn merge_sort<Id, M>(mut pairs: Vec<(Id, M)>) -> Vec<(Id, M)>
where
    M: PartialOrd,
{
    if pairs.len() <= 1 {
        return pairs;
    }
    let right = pairs.split_off(pairs.len() / 2);
    merge(merge_sort(pairs), merge_sort(right))
}

/// Merges two descending runs. The left run wins ties.
fn merge<Id, M>(left: Vec<(Id, M)>, right: Vec<(Id, M)>) -> Vec<(Id, M)>
where
    M: PartialOrd,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some((_, l)), Some((_, r))) => r.partial_cmp(l) != Some(Ordering::Greater),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }
    merged
}
