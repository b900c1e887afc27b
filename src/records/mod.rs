// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Plain records held by the stores.
//!
//! Records carry no behavior beyond construction helpers. Ids are plain
//! `u32` aliases; timestamps are unix seconds.

pub mod collection;
pub mod credit;
pub mod movie;
pub mod rating;

/// Identifier of a film.
pub type MovieId = u32;

/// Identifier of a cast or crew member.
pub type PersonId = u32;

/// Identifier of a rating user.
pub type UserId = u32;

/// Identifier of a film collection.
pub type CollectionId = u32;

// Re-exports
pub use collection::MovieCollection;
pub use credit::{CastCredit, CrewCredit, FilmCredits, Person};
pub use movie::{Company, Genre, Movie, ReleaseDate};
pub use rating::{Rating, RatingKey};
