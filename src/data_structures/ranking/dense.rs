// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dense per-id counters for integer-keyed aggregation.
//!
//! Counts and score sums live in two parallel arrays indexed directly by id,
//! sized to the largest id observed. Memory is proportional to that id, not
//! to the number of distinct ids, which suits compact id spaces.

use super::MetricLookup;
use crate::data_structures::dynamic_array::DynamicArray;

/// Occurrence counts and score sums indexed by `u32` id.
#[derive(Debug, Clone, Default)]
pub struct DenseTally {
    counts: DynamicArray<u32>,
    sums: DynamicArray<f64>,
}

impl DenseTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tally with slots for every id in `0..=max_id`.
    pub fn with_max_id(max_id: u32) -> Self {
        let len = max_id as usize + 1;
        Self {
            counts: DynamicArray::filled(0, len),
            sums: DynamicArray::filled(0.0, len),
        }
    }

    /// Builds a tally from `(id, score)` observations.
    ///
    /// The arrays are sized once from the largest id before counting.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let observations: DynamicArray<(u32, f64)> = observations.into_iter().collect();
        let mut tally = match observations.iter().map(|(id, _)| *id).max() {
            Some(max_id) => Self::with_max_id(max_id),
            None => Self::new(),
        };
        for (id, score) in observations {
            tally.tally(id, score);
        }
        tally
    }

    /// Records one occurrence of `id` carrying `score`.
    pub fn tally(&mut self, id: u32, score: f64) {
        let slot = id as usize;
        while self.counts.len() <= slot {
            self.counts.add(0);
            self.sums.add(0.0);
        }
        if let Some(count) = self.counts.get_mut(slot) {
            *count += 1;
        }
        if let Some(sum) = self.sums.get_mut(slot) {
            *sum += score;
        }
    }

    /// Number of occurrences of `id`, zero if never seen.
    pub fn count(&self, id: u32) -> u32 {
        self.counts.get(id as usize).copied().unwrap_or(0)
    }

    /// Sum of scores recorded for `id`.
    pub fn sum(&self, id: u32) -> f64 {
        self.sums.get(id as usize).copied().unwrap_or(0.0)
    }

    /// Mean score of `id`, or `None` if it was never seen.
    pub fn average(&self, id: u32) -> Option<f64> {
        match self.count(id) {
            0 => None,
            count => Some(self.sum(id) / f64::from(count)),
        }
    }

    /// Largest id with a slot, if any.
    pub fn max_id(&self) -> Option<u32> {
        self.counts.len().checked_sub(1).map(|max| max as u32)
    }

    /// Ids with at least one occurrence, ascending.
    pub fn observed_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(id, _)| id as u32)
    }
}

impl MetricLookup<u32> for DenseTally {
    type Metric = u32;

    fn metric(&self, id: &u32) -> u32 {
        self.count(*id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_sums() {
        let tally = DenseTally::from_observations(vec![(10, 4.0), (20, 3.0), (10, 2.0)]);

        assert_eq!(tally.count(10), 2);
        assert_eq!(tally.count(20), 1);
        assert_eq!(tally.count(15), 0);
        assert_eq!(tally.count(500), 0);
        assert_eq!(tally.sum(10), 6.0);
        assert_eq!(tally.average(10), Some(3.0));
        assert_eq!(tally.average(15), None);
        assert_eq!(tally.max_id(), Some(20));
    }

    #[test]
    fn test_observed_ids_skip_empty_slots() {
        let tally = DenseTally::from_observations(vec![(3, 1.0), (0, 1.0), (7, 1.0)]);
        assert_eq!(tally.observed_ids().collect::<Vec<_>>(), vec![0, 3, 7]);
    }

    #[test]
    fn test_grows_past_initial_size() {
        let mut tally = DenseTally::with_max_id(2);
        tally.tally(9, 5.0);
        assert_eq!(tally.max_id(), Some(9));
        assert_eq!(tally.metric(&9), 1);
    }

    #[test]
    fn test_empty() {
        let tally = DenseTally::new();
        assert_eq!(tally.max_id(), None);
        assert_eq!(tally.observed_ids().count(), 0);
    }
}
