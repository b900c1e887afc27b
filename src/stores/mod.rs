// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Movie, credit and rating stores.
//!
//! Each store keeps its records in [`ChainedTable`]s and answers queries by
//! scanning independent snapshots, so results never alias store state.
//!
//! # Sentinels
//!
//! Queries keep two "nothing here" answers apart:
//!
//! - [`NOT_FOUND`] / [`NOT_FOUND_F64`] (`-1` / `-1.0`): the subject is unknown
//! - `0` / `0.0`: the subject is known but has no data yet
//!
//! # Example
//!
//! ```
//! use reel_index_lib::records::{CastCredit, Movie, Rating};
//! use reel_index_lib::stores::Stores;
//!
//! let mut stores = Stores::new();
//! stores.movies.add(Movie::new(862, "Toy Story"));
//! stores.credits.add(862, vec![CastCredit::new(31, "Tom Hanks", "Woody", 0)], vec![]);
//! stores.ratings.add(Rating::new(1, 862, 4.0, 1_260_759_144));
//!
//! assert_eq!(stores.movie_average_rating(862), 4.0);
//! assert_eq!(stores.movie_average_rating(949), -1.0);
//! assert_eq!(stores.credits.num_cast_credits(31), 1);
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::config::ReelConfig;
use crate::data_structures::chained_table::{
    ChainedTable, ChainedTableConfig, InsertObserver, TracingInsertObserver,
};
use crate::records::MovieId;

pub mod credits;
pub mod movies;
pub mod ratings;

pub use credits::CreditStore;
pub use movies::MovieStore;
pub use ratings::RatingStore;

/// Integer answer for an unknown subject.
pub const NOT_FOUND: i64 = -1;

/// Floating-point answer for an unknown subject.
pub const NOT_FOUND_F64: f64 = -1.0;

/// Film existence check used to pick between "unknown" and "no data".
pub trait MovieCatalog {
    /// Whether `id` names a stored film.
    fn contains_movie(&self, id: MovieId) -> bool;
}

/// Allocates an empty table with the shared settings of a store.
pub(crate) fn new_table<K, V>(
    config: &ChainedTableConfig,
    observer: Option<&Arc<dyn InsertObserver>>,
) -> ChainedTable<K, V>
where
    K: Hash + Eq + Debug,
{
    let mut table = ChainedTable::with_config(config.clone());
    table.set_observer(observer.cloned());
    table
}

/// The three stores, built from one configuration.
#[derive(Debug)]
pub struct Stores {
    /// Films and collections
    pub movies: MovieStore,

    /// Cast and crew per film
    pub credits: CreditStore,

    /// User ratings
    pub ratings: RatingStore,
}

impl Stores {
    /// Creates empty stores with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&ReelConfig::default())
    }

    /// Creates empty stores that share table sizing and insert diagnostics.
    pub fn from_config(config: &ReelConfig) -> Self {
        let observer: Option<Arc<dyn InsertObserver>> = config
            .table
            .trace_inserts
            .then(|| Arc::new(TracingInsertObserver) as Arc<dyn InsertObserver>);
        Self::with_observer(config, observer)
    }

    /// Creates empty stores with an explicit insert observer.
    pub fn with_observer(config: &ReelConfig, observer: Option<Arc<dyn InsertObserver>>) -> Self {
        let table_config = config.table.to_table_config();
        tracing::info!(
            capacity = table_config.capacity,
            observed = observer.is_some(),
            "Initializing stores"
        );

        Self {
            movies: MovieStore::with_config(&table_config, observer.as_ref()),
            credits: CreditStore::with_config(
                &table_config,
                observer.as_ref(),
                config.stores.star_billing_max_order,
            ),
            ratings: RatingStore::with_config(&table_config, observer.as_ref()),
        }
    }

    /// Average rating of a film: `0.0` if stored but unrated, `-1.0` if unknown.
    pub fn movie_average_rating(&self, movie: MovieId) -> f64 {
        self.ratings.movie_average_rating(movie, &self.movies)
    }

    /// Number of ratings of a film: `0` if stored but unrated, `-1` if unknown.
    pub fn num_ratings(&self, movie: MovieId) -> i64 {
        self.ratings.num_ratings(movie, &self.movies)
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-sensitive literal containment.
pub(crate) fn matches_term(text: &str, term: &str) -> bool {
    text.contains(term)
}
