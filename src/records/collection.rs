// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Film collections (franchises, series).

use super::{CollectionId, MovieId};
use crate::data_structures::ordered_list::OrderedList;

/// A named group of films. Members are kept newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCollection {
    pub id: CollectionId,
    pub name: String,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    pub films: OrderedList<MovieId>,
}

impl MovieCollection {
    /// Creates an empty collection.
    pub fn new(
        id: CollectionId,
        name: impl Into<String>,
        poster: Option<String>,
        backdrop: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            poster,
            backdrop,
            films: OrderedList::new(),
        }
    }

    /// Whether the collection was created without a name.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Adds `film` unless it is already a member.
    pub fn add_film(&mut self, film: MovieId) -> bool {
        if self.films.contains(&film) {
            return false;
        }
        self.films.add(film)
    }

    /// Removes `film` if it is a member.
    pub fn remove_film(&mut self, film: MovieId) -> bool {
        self.films.remove(&film)
    }
}
