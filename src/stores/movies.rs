// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Film metadata and collection store.

use std::sync::Arc;

use super::{matches_term, new_table, MovieCatalog, NOT_FOUND, NOT_FOUND_F64};
use crate::data_structures::chained_table::{
    ChainStats, ChainedTable, ChainedTableConfig, InsertObserver,
};
use crate::records::{CollectionId, Company, Genre, Movie, MovieCollection, MovieId, ReleaseDate};

/// Films keyed by id, plus the collections they belong to.
#[derive(Debug)]
pub struct MovieStore {
    movies: ChainedTable<MovieId, Movie>,
    collections: ChainedTable<CollectionId, MovieCollection>,
}

impl MovieStore {
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
            movies: new_table(config, observer),
            collections: new_table(config, observer),
        }
    }

    /// Stores a film. Rejects a film whose id is already stored.
    ///
    /// A film that arrives with `collection` set joins that collection. A
    /// collection first seen this way has no name or artwork until
    /// [`add_to_collection`](Self::add_to_collection) supplies them.
    pub fn add(&mut self, movie: Movie) -> bool {
        let id = movie.id;
        let collection = movie.collection;
        if !self.movies.insert_or_reject(id, movie) {
            tracing::debug!(film = id, "Rejected duplicate film");
            return false;
        }
        if let Some(collection_id) = collection {
            self.join_collection(id, collection_id, String::new(), None, None);
        }
        true
    }

    /// Removes a film and its collection membership.
    pub fn remove(&mut self, id: MovieId) -> bool {
        let Some(movie) = self.movies.take(&id) else {
            return false;
        };
        if let Some(collection) = movie
            .collection
            .and_then(|cid| self.collections.get_mut(&cid))
        {
            collection.remove_film(id);
        }
        true
    }

    /// Number of stored films.
    pub fn size(&self) -> usize {
        self.movies.len()
    }

    /// The stored film, if any.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Ids of every stored film.
    pub fn all_ids(&self) -> Vec<MovieId> {
        self.movies.keys_snapshot().into_vec()
    }

    /// Ids of films released strictly after `start` and strictly before `end`.
    ///
    /// Films without a release date are never included.
    pub fn ids_released_in_range(&self, start: ReleaseDate, end: ReleaseDate) -> Vec<MovieId> {
        self.movies
            .iter()
            .filter(|(_, movie)| {
                movie
                    .release
                    .map_or(false, |release| start < release && release < end)
            })
            .map(|(id, _)| *id)
            .collect()
    }

    /// Chain statistics of the film table.
    pub fn table_stats(&self) -> ChainStats {
        self.movies.stats()
    }

    /// Title of a stored film.
    pub fn title(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.title.as_str())
    }

    /// Title in the original language.
    pub fn original_title(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.original_title.as_str())
    }

    /// Plot summary.
    pub fn overview(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.overview.as_str())
    }

    /// Marketing tagline.
    pub fn tagline(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.tagline.as_str())
    }

    /// Release status, such as `Released`.
    pub fn status(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.status.as_str())
    }

    /// Genres of a stored film.
    pub fn genres(&self, id: MovieId) -> Option<&[Genre]> {
        self.get(id).map(|movie| movie.genres.as_slice())
    }

    /// Release date, `None` if unknown or unset.
    pub fn release(&self, id: MovieId) -> Option<ReleaseDate> {
        self.get(id).and_then(|movie| movie.release)
    }

    /// Spoken languages.
    pub fn languages(&self, id: MovieId) -> Option<&[String]> {
        self.get(id).map(|movie| movie.languages.as_slice())
    }

    /// Original language code.
    pub fn original_language(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.original_language.as_str())
    }

    /// Homepage URL.
    pub fn homepage(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.homepage.as_str())
    }

    /// Poster path.
    pub fn poster(&self, id: MovieId) -> Option<&str> {
        self.get(id).map(|movie| movie.poster.as_str())
    }

    /// Budget, `-1` for an unknown film.
    pub fn budget(&self, id: MovieId) -> i64 {
        self.get(id).map_or(NOT_FOUND, |movie| movie.budget)
    }

    /// Revenue, `-1` for an unknown film.
    pub fn revenue(&self, id: MovieId) -> i64 {
        self.get(id).map_or(NOT_FOUND, |movie| movie.revenue)
    }

    /// Runtime in minutes, `-1.0` for an unknown film.
    pub fn runtime(&self, id: MovieId) -> f64 {
        self.get(id).map_or(NOT_FOUND_F64, |movie| movie.runtime)
    }

    /// Adult flag, `false` for an unknown film.
    pub fn adult(&self, id: MovieId) -> bool {
        self.get(id).map_or(false, |movie| movie.adult)
    }

    /// Video flag, `false` for an unknown film.
    pub fn video(&self, id: MovieId) -> bool {
        self.get(id).map_or(false, |movie| movie.video)
    }

    /// Records vote results for a stored film.
    pub fn set_vote(&mut self, id: MovieId, average: f64, count: u32) -> bool {
        match self.movies.get_mut(&id) {
            Some(movie) => {
                movie.vote_average = average;
                movie.vote_count = count;
                true
            }
            None => false,
        }
    }

    /// Vote average, `-1.0` for an unknown film.
    pub fn vote_average(&self, id: MovieId) -> f64 {
        self.get(id).map_or(NOT_FOUND_F64, |movie| movie.vote_average)
    }

    /// Vote count, `-1` for an unknown film.
    pub fn vote_count(&self, id: MovieId) -> i64 {
        self.get(id)
            .map_or(NOT_FOUND, |movie| i64::from(movie.vote_count))
    }

    /// Records the IMDb id of a stored film.
    pub fn set_imdb(&mut self, id: MovieId, imdb: impl Into<String>) -> bool {
        match self.movies.get_mut(&id) {
            Some(movie) => {
                movie.imdb = Some(imdb.into());
                true
            }
            None => false,
        }
    }

    /// IMDb id, `None` if unknown or unset.
    pub fn imdb(&self, id: MovieId) -> Option<&str> {
        self.get(id).and_then(|movie| movie.imdb.as_deref())
    }

    /// Records the popularity score of a stored film.
    pub fn set_popularity(&mut self, id: MovieId, popularity: f64) -> bool {
        match self.movies.get_mut(&id) {
            Some(movie) => {
                movie.popularity = Some(popularity);
                true
            }
            None => false,
        }
    }

    /// Popularity: `-1.0` for an unknown film, `0.0` if never set.
    pub fn popularity(&self, id: MovieId) -> f64 {
        self.get(id)
            .map_or(NOT_FOUND_F64, |movie| movie.popularity.unwrap_or(0.0))
    }

    /// Appends a production company to a stored film.
    pub fn add_production_company(&mut self, id: MovieId, company: Company) -> bool {
        match self.movies.get_mut(&id) {
            Some(movie) => {
                movie.production_companies.push(company);
                true
            }
            None => false,
        }
    }

    /// Appends a production country to a stored film.
    pub fn add_production_country(&mut self, id: MovieId, country: impl Into<String>) -> bool {
        match self.movies.get_mut(&id) {
            Some(movie) => {
                movie.production_countries.push(country.into());
                true
            }
            None => false,
        }
    }

    /// Production companies, `None` for an unknown film.
    pub fn production_companies(&self, id: MovieId) -> Option<&[Company]> {
        self.get(id).map(|movie| movie.production_companies.as_slice())
    }

    /// Production countries, `None` for an unknown film.
    pub fn production_countries(&self, id: MovieId) -> Option<&[String]> {
        self.get(id).map(|movie| movie.production_countries.as_slice())
    }

    /// Places a stored film in a collection, creating the collection on first use.
    ///
    /// A film belongs to at most one collection; moving it drops the old
    /// membership. Collection metadata is only taken from the first call that
    /// creates it.
    ///
    /// # Returns
    ///
    /// `false` if the film is not stored.
    pub fn add_to_collection(
        &mut self,
        film: MovieId,
        collection_id: CollectionId,
        name: impl Into<String>,
        poster: Option<String>,
        backdrop: Option<String>,
    ) -> bool {
        let Some(movie) = self.movies.get_mut(&film) else {
            return false;
        };
        let previous = movie.collection.replace(collection_id);

        if let Some(old) = previous.filter(|old| *old != collection_id) {
            if let Some(collection) = self.collections.get_mut(&old) {
                collection.remove_film(film);
            }
        }

        self.join_collection(film, collection_id, name.into(), poster, backdrop);
        true
    }

    /// Adds `film` to a collection, creating it or naming an unnamed one.
    fn join_collection(
        &mut self,
        film: MovieId,
        collection_id: CollectionId,
        name: String,
        poster: Option<String>,
        backdrop: Option<String>,
    ) {
        match self.collections.get_mut(&collection_id) {
            Some(collection) => {
                if collection.is_unnamed() && !name.is_empty() {
                    collection.name = name;
                    collection.poster = poster;
                    collection.backdrop = backdrop;
                }
                collection.add_film(film);
            }
            None => {
                let mut collection = MovieCollection::new(collection_id, name, poster, backdrop);
                collection.add_film(film);
                self.collections.add(collection_id, collection);
                tracing::debug!(collection = collection_id, "Created collection");
            }
        }
    }

    /// Films in a collection, most recently added first. Empty if unknown.
    pub fn films_in_collection(&self, collection_id: CollectionId) -> Vec<MovieId> {
        self.collections
            .get(&collection_id)
            .map(|collection| collection.films.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Name of a collection.
    pub fn collection_name(&self, collection_id: CollectionId) -> Option<&str> {
        self.collections
            .get(&collection_id)
            .map(|collection| collection.name.as_str())
    }

    /// Poster path of a collection.
    pub fn collection_poster(&self, collection_id: CollectionId) -> Option<&str> {
        self.collections
            .get(&collection_id)
            .and_then(|collection| collection.poster.as_deref())
    }

    /// Backdrop path of a collection.
    pub fn collection_backdrop(&self, collection_id: CollectionId) -> Option<&str> {
        self.collections
            .get(&collection_id)
            .and_then(|collection| collection.backdrop.as_deref())
    }

    /// Collection of a film, `-1` if the film is unknown or in no collection.
    pub fn collection_id(&self, film: MovieId) -> i64 {
        self.get(film)
            .and_then(|movie| movie.collection)
            .map_or(NOT_FOUND, i64::from)
    }

    /// Films whose title, original title or overview contains `term`.
    ///
    /// Matching is literal and case-sensitive; results are unranked.
    pub fn find_films(&self, term: &str) -> Vec<MovieId> {
        self.movies
            .snapshot()
            .into_iter()
            .filter(|movie| {
                matches_term(&movie.title, term)
                    || matches_term(&movie.original_title, term)
                    || matches_term(&movie.overview, term)
            })
            .map(|movie| movie.id)
            .collect()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieCatalog for MovieStore {
    fn contains_movie(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }
}
