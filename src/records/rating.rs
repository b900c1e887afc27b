// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! User ratings.

use serde::{Deserialize, Serialize};

use super::{MovieId, UserId};

/// Identity of a rating: one user rating one film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RatingKey {
    pub user: UserId,
    pub movie: MovieId,
}

impl RatingKey {
    /// Creates the key for `user` rating `movie`.
    pub fn new(user: UserId, movie: MovieId) -> Self {
        Self { user, movie }
    }
}

/// A score given by a user to a film.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user: UserId,
    pub movie: MovieId,
    pub score: f64,
    /// Unix seconds
    pub timestamp: i64,
}

impl Rating {
    /// Creates a rating.
    pub fn new(user: UserId, movie: MovieId, score: f64, timestamp: i64) -> Self {
        Self {
            user,
            movie,
            score,
            timestamp,
        }
    }

    /// The key this rating is stored under.
    pub fn key(&self) -> RatingKey {
        RatingKey::new(self.user, self.movie)
    }
}
