// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! User rating store.
//!
//! A rating is identified by its `(user, film)` pair. Count leaderboards
//! tally ratings into dense arrays indexed by id and rank the observed ids
//! with a stable merge sort, so ties keep ascending id order.

use std::sync::Arc;

use super::{new_table, MovieCatalog, NOT_FOUND, NOT_FOUND_F64};
use crate::data_structures::chained_table::{ChainedTable, ChainedTableConfig, InsertObserver};
use crate::data_structures::ranking::{top_n, DenseTally, RankingAlgorithm};
use crate::data_structures::unique_set::UniqueSet;
use crate::records::{MovieId, Rating, RatingKey, UserId};

/// Ratings keyed by `(user, film)`.
#[derive(Debug)]
pub struct RatingStore {
    ratings: ChainedTable<RatingKey, Rating>,
}

impl RatingStore {
    /// Creates an empty store with default table sizing.
    pub fn new() -> Self {
        Self::with_config(&ChainedTableConfig::default(), None)
    }

    /// Creates an empty store.
    pub fn with_config(
        config: &ChainedTableConfig,
        observer: Option<&Arc<dyn InsertObserver>>,
    ) -> Self {
        Self {
            ratings: new_table(config, observer),
        }
    }

    /// Stores a rating. Rejects a second rating of the same film by the same user.
    pub fn add(&mut self, rating: Rating) -> bool {
        let added = self.ratings.insert_or_reject(rating.key(), rating);
        if !added {
            tracing::debug!(
                user = rating.user,
                film = rating.movie,
                "Rejected duplicate rating"
            );
        }
        added
    }

    /// Stores a rating, replacing any earlier rating of the film by the user.
    ///
    /// Always succeeds.
    pub fn set(&mut self, rating: Rating) -> bool {
        if let Some(previous) = self.ratings.insert_or_overwrite(rating.key(), rating) {
            tracing::debug!(
                user = rating.user,
                film = rating.movie,
                previous = previous.score,
                score = rating.score,
                "Replaced rating"
            );
        }
        true
    }

    /// Removes the rating of `movie` by `user`.
    pub fn remove(&mut self, user: UserId, movie: MovieId) -> bool {
        self.ratings.remove(&RatingKey::new(user, movie))
    }

    /// Number of stored ratings.
    pub fn size(&self) -> usize {
        self.ratings.len()
    }

    /// The rating of `movie` by `user`, if any.
    pub fn get(&self, user: UserId, movie: MovieId) -> Option<&Rating> {
        self.ratings.get(&RatingKey::new(user, movie))
    }

    /// Ratings of a film, at most one per user. Empty if none.
    pub fn movie_ratings(&self, movie: MovieId) -> Vec<Rating> {
        let mut users = UniqueSet::new();
        self.ratings
            .snapshot()
            .into_iter()
            .filter(|rating| rating.movie == movie && users.add(rating.user))
            .collect()
    }

    /// Ratings given by a user. Empty if none.
    pub fn user_ratings(&self, user: UserId) -> Vec<Rating> {
        self.ratings
            .snapshot()
            .into_iter()
            .filter(|rating| rating.user == user)
            .collect()
    }

    /// Mean score of a film.
    ///
    /// `0.0` if the catalog knows the film but nobody rated it, `-1.0` if the
    /// film is neither rated nor in the catalog.
    pub fn movie_average_rating<C>(&self, movie: MovieId, catalog: &C) -> f64
    where
        C: MovieCatalog + ?Sized,
    {
        let (count, sum) = self.movie_totals(movie);
        match count {
            0 if catalog.contains_movie(movie) => 0.0,
            0 => NOT_FOUND_F64,
            count => sum / count as f64,
        }
    }

    /// Mean score given by a user, `-1.0` if the user rated nothing.
    pub fn user_average_rating(&self, user: UserId) -> f64 {
        let (count, sum) = self
            .ratings
            .iter()
            .filter(|(key, _)| key.user == user)
            .fold((0usize, 0.0), |(count, sum), (_, rating)| {
                (count + 1, sum + rating.score)
            });
        match count {
            0 => NOT_FOUND_F64,
            count => sum / count as f64,
        }
    }

    /// Number of ratings of a film.
    ///
    /// `0` if the catalog knows the film but nobody rated it, `-1` if the film
    /// is neither rated nor in the catalog.
    pub fn num_ratings<C>(&self, movie: MovieId, catalog: &C) -> i64
    where
        C: MovieCatalog + ?Sized,
    {
        match self.movie_totals(movie).0 {
            0 if catalog.contains_movie(movie) => 0,
            0 => NOT_FOUND,
            count => count as i64,
        }
    }

    /// The `n` most rated films, ties in ascending id order.
    pub fn most_rated_movies(&self, n: i64) -> Vec<MovieId> {
        let tally = self.tally_by(|rating| rating.movie);
        top_n(tally.observed_ids(), &tally, n, RankingAlgorithm::Merge)
    }

    /// The `n` users with the most ratings, ties in ascending id order.
    pub fn most_rated_users(&self, n: i64) -> Vec<UserId> {
        let tally = self.tally_by(|rating| rating.user);
        top_n(tally.observed_ids(), &tally, n, RankingAlgorithm::Merge)
    }

    /// The `n` films with the highest mean score.
    ///
    /// Films are ranked in the order they were first seen in the rating
    /// snapshot when their means tie.
    pub fn top_average_rated_movies(&self, n: i64) -> Vec<MovieId> {
        if n <= 0 {
            return Vec::new();
        }
        let tally = self.tally_by(|rating| rating.movie);
        let mut rated = UniqueSet::new();
        for (key, _) in self.ratings.iter() {
            rated.add(key.movie);
        }

        let average = |id: &MovieId| tally.average(*id).unwrap_or(0.0);
        top_n(rated.iter().copied(), &average, n, RankingAlgorithm::Merge)
    }

    fn movie_totals(&self, movie: MovieId) -> (usize, f64) {
        self.ratings
            .iter()
            .filter(|(key, _)| key.movie == movie)
            .fold((0, 0.0), |(count, sum), (_, rating)| {
                (count + 1, sum + rating.score)
            })
    }

    fn tally_by(&self, id_of: impl Fn(&Rating) -> u32) -> DenseTally {
        DenseTally::from_observations(
            self.ratings
                .iter()
                .map(|(_, rating)| (id_of(rating), rating.score)),
        )
    }
}

impl Default for RatingStore {
    fn default() -> Self {
        Self::new()
    }
}
