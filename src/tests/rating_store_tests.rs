//! Property tests for the rating store.
//!
//! Random sequences of `add`, `set` and `remove` are replayed against a
//! `HashMap` keyed by `(user, movie)`.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::records::{MovieId, Rating, RatingKey};
use crate::stores::RatingStore;
use crate::tests::test_utils::rating_strategy;

/// One mutation of the store.
#[derive(Debug, Clone)]
enum RatingOp {
    Add(Rating),
    Set(Rating),
    Remove(RatingKey),
}

fn rating_op_strategy() -> impl Strategy<Value = RatingOp> {
    prop_oneof![
        3 => rating_strategy().prop_map(RatingOp::Add),
        3 => rating_strategy().prop_map(RatingOp::Set),
        2 => rating_strategy().prop_map(|rating| RatingOp::Remove(rating.key())),
    ]
}

/// Applies `ops` to both the store and the model, checking each return value.
fn replay(ops: &[RatingOp]) -> Result<(RatingStore, HashMap<RatingKey, Rating>), TestCaseError> {
    let mut store = RatingStore::new();
    let mut model: HashMap<RatingKey, Rating> = HashMap::new();

    for op in ops {
        match op {
            RatingOp::Add(rating) => {
                let fresh = !model.contains_key(&rating.key());
                if fresh {
                    model.insert(rating.key(), *rating);
                }
                prop_assert_eq!(store.add(*rating), fresh);
            }
            RatingOp::Set(rating) => {
                model.insert(rating.key(), *rating);
                prop_assert!(store.set(*rating));
            }
            RatingOp::Remove(key) => {
                let present = model.remove(key).is_some();
                prop_assert_eq!(store.remove(key.user, key.movie), present);
            }
        }
        prop_assert_eq!(store.size(), model.len());
    }
    Ok((store, model))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Size always equals the number of distinct `(user, movie)` keys.
    #[test]
    fn prop_size_tracks_distinct_keys(ops in proptest::collection::vec(rating_op_strategy(), 0..200)) {
        let (store, model) = replay(&ops)?;
        prop_assert_eq!(store.size(), model.len());
    }

    /// Every stored rating is the last one written for its key.
    #[test]
    fn prop_set_keeps_last_write(ops in proptest::collection::vec(rating_op_strategy(), 0..200)) {
        let (store, model) = replay(&ops)?;

        for (key, expected) in &model {
            prop_assert_eq!(store.get(key.user, key.movie), Some(expected));
        }
        for op in &ops {
            if let RatingOp::Set(rating) | RatingOp::Add(rating) = op {
                if !model.contains_key(&rating.key()) {
                    prop_assert!(store.get(rating.user, rating.movie).is_none());
                }
            }
        }
    }

    /// Per-film listings hold exactly the model's ratings for that film.
    #[test]
    fn prop_movie_ratings_match_model(ops in proptest::collection::vec(rating_op_strategy(), 0..200), movie in 0u32..50) {
        let (store, model) = replay(&ops)?;

        let mut listed: Vec<(u32, f64)> = store
            .movie_ratings(movie)
            .into_iter()
            .map(|rating| (rating.user, rating.score))
            .collect();
        let mut expected: Vec<(u32, f64)> = model
            .values()
            .filter(|rating| rating.movie == movie)
            .map(|rating| (rating.user, rating.score))
            .collect();
        listed.sort_by_key(|(user, _)| *user);
        expected.sort_by_key(|(user, _)| *user);
        prop_assert_eq!(listed, expected);
    }

    /// The count leaderboard agrees with counts taken from the model.
    #[test]
    fn prop_most_rated_movies_match_model(ops in proptest::collection::vec(rating_op_strategy(), 0..200), n in 1i64..10) {
        let (store, model) = replay(&ops)?;

        let mut counts: HashMap<MovieId, u32> = HashMap::new();
        for rating in model.values() {
            *counts.entry(rating.movie).or_insert(0) += 1;
        }
        let mut expected: Vec<(MovieId, u32)> = counts.into_iter().collect();
        expected.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let expected: Vec<MovieId> = expected
            .into_iter()
            .take(n as usize)
            .map(|(movie, _)| movie)
            .collect();

        prop_assert_eq!(store.most_rated_movies(n), expected);
    }
}
