// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Top-N ranking of ids by a looked-up metric.
//!
//! Ranking never touches the metric source: ids are copied into a working
//! array, reordered by descending metric, and cut to the requested length.
//!
//! Two algorithms are available:
//!
//! - [`RankingAlgorithm::PartitionExchange`] sorts the ids in place, pivoting
//!   on the last element. Ties come out in no particular order.
//! - [`RankingAlgorithm::Merge`] pairs every id with its metric and merge
//!   sorts the pairs. Ties keep their input order.
//!
//! # Example
//!
//! ```
//! use reel_index_lib::data_structures::ranking::{top_n, RankingAlgorithm};
//!
//! let counts = [0u32, 0, 7, 3, 9];
//! let lookup = |id: &usize| counts[*id];
//!
//! let top = top_n(vec![2usize, 3, 4], &lookup, 2, RankingAlgorithm::Merge);
//! assert_eq!(top, vec![4, 2]);
//!
//! assert!(top_n(vec![2usize, 3, 4], &lookup, 0, RankingAlgorithm::Merge).is_empty());
//! ```

mod dense;
mod merge;
mod partition;

use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

use crate::data_structures::chained_table::ChainedTable;
use crate::data_structures::dynamic_array::DynamicArray;

pub use dense::DenseTally;
pub use merge::merge_sort;
pub use partition::partition_exchange_sort;

/// Sorting strategy used by [`top_n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingAlgorithm {
    /// In-place partition-exchange sort; unstable.
    PartitionExchange,

    /// Merge sort over `(id, metric)` pairs; stable.
    Merge,
}

/// Source of the metric an id is ranked by.
pub trait MetricLookup<Id: ?Sized> {
    /// Metric type; larger ranks first.
    type Metric: PartialOrd + Copy;

    /// Returns the metric for `id`.
    fn metric(&self, id: &Id) -> Self::Metric;
}

impl<Id, M, F> MetricLookup<Id> for F
where
    Id: ?Sized,
    F: Fn(&Id) -> M,
    M: PartialOrd + Copy,
{
    type Metric = M;

    fn metric(&self, id: &Id) -> M {
        self(id)
    }
}

/// Counters kept in a table rank by their stored value; missing keys count as zero.
impl<K, M, S> MetricLookup<K> for ChainedTable<K, M, S>
where
    K: Hash + Eq + Debug,
    M: PartialOrd + Copy + Default,
    S: BuildHasher,
{
    type Metric = M;

    fn metric(&self, id: &K) -> M {
        self.get(id).copied().unwrap_or_default()
    }
}

/// Returns the `n` ids with the largest metrics, largest first.
///
/// # Arguments
///
/// * `ids` - The population to rank. It is copied; the source is not touched.
/// * `lookup` - Metric source for each id.
/// * `n` - Number of ids wanted. Zero or negative yields an empty result;
///   more than the population yields the whole population, sorted.
/// * `algorithm` - Sorting strategy.
pub fn top_n<Id, L>(
    ids: impl IntoIterator<Item = Id>,
    lookup: &L,
    n: i64,
    algorithm: RankingAlgorithm,
) -> Vec<Id>
where
    L: MetricLookup<Id> + ?Sized,
{
    if n <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(n).unwrap_or(usize::MAX);

    match algorithm {
        RankingAlgorithm::PartitionExchange => {
            let mut working: DynamicArray<Id> = ids.into_iter().collect();
            partition_exchange_sort(working.as_mut_slice(), lookup);
            working.truncate(limit);
            working.into_vec()
        }
        RankingAlgorithm::Merge => {
            let pairs = ids
                .into_iter()
                .map(|id| {
                    let metric = lookup.metric(&id);
                    (id, metric)
                })
                .collect();
            merge_sort(pairs)
                .into_iter()
                .take(limit)
                .map(|(id, _)| id)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_bounds() {
        let lookup = |id: &u32| *id;
        for algorithm in [RankingAlgorithm::PartitionExchange, RankingAlgorithm::Merge] {
            assert!(top_n(Vec::<u32>::new(), &lookup, 3, algorithm).is_empty());
            assert!(top_n(vec![1u32, 2], &lookup, 0, algorithm).is_empty());
            assert!(top_n(vec![1u32, 2], &lookup, -4, algorithm).is_empty());
            assert_eq!(top_n(vec![1u32, 3, 2], &lookup, 10, algorithm), vec![3, 2, 1]);
        }
    }

    #[test]
    fn test_table_lookup_defaults_to_zero() {
        let mut counts = ChainedTable::<u32, u32>::new();
        counts.add(1, 4);
        counts.add(2, 9);

        let top = top_n(vec![3u32, 1, 2], &counts, 2, RankingAlgorithm::PartitionExchange);
        assert_eq!(top, vec![2, 1]);
        assert_eq!(counts.metric(&3), 0);
    }

    #[test]
    fn test_merge_is_stable() {
        let lookup = |id: &char| if *id == 'x' { 2 } else { 1 };
        let top = top_n(vec!['a', 'x', 'b', 'c'], &lookup, 3, RankingAlgorithm::Merge);
        assert_eq!(top, vec!['x', 'a', 'b']);
    }
}
