// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Film metadata records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CollectionId, MovieId};

/// Calendar release date. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReleaseDate {
    /// Year
    pub year: i32,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
}

impl ReleaseDate {
    /// Creates a date from its parts.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    /// Genre id
    pub id: u32,
    /// Display name
    pub name: String,
}

/// A production company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    /// Company id
    pub id: u32,
    /// Display name
    pub name: String,
}

/// A film and the metadata attached to it.
///
/// The vote, popularity, imdb, production and collection fields are usually
/// filled in after the film is stored, through the movie store setters. A
/// `collection` already set when the film is stored is honoured by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub tagline: String,
    pub status: String,
    pub genres: Vec<Genre>,
    pub release: Option<ReleaseDate>,
    pub budget: i64,
    pub revenue: i64,
    pub languages: Vec<String>,
    pub original_language: String,
    pub runtime: f64,
    pub homepage: String,
    pub adult: bool,
    pub video: bool,
    pub poster: String,

    pub vote_average: f64,
    pub vote_count: u32,
    pub imdb: Option<String>,
    pub popularity: Option<f64>,
    pub production_companies: Vec<Company>,
    pub production_countries: Vec<String>,
    pub collection: Option<CollectionId>,
}

impl Movie {
    /// Creates a film with a title and every other field empty.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            original_title: title.clone(),
            title,
            ..Self::default()
        }
    }

    /// Sets the overview text.
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    /// Sets the original title.
    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = original_title.into();
        self
    }

    /// Sets the release date.
    pub fn with_release(mut self, release: ReleaseDate) -> Self {
        self.release = Some(release);
        self
    }

    /// Sets budget and revenue.
    pub fn with_financials(mut self, budget: i64, revenue: i64) -> Self {
        self.budget = budget;
        self.revenue = revenue;
        self
    }

    /// Sets the runtime in minutes.
    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = runtime;
        self
    }

    /// Sets the genres.
    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }
}
