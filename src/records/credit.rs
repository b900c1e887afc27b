// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Cast and crew credits.

use serde::{Deserialize, Serialize};

use super::{MovieId, PersonId};

/// A person as identified across credits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub profile_path: Option<String>,
}

/// One acting role in one film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastCredit {
    pub id: PersonId,
    pub name: String,
    pub character: String,
    /// Billing position, 0 for top billing
    pub order: u32,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastCredit {
    /// Creates a credit for `name` playing `character`.
    pub fn new(id: PersonId, name: impl Into<String>, character: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            character: character.into(),
            order,
            profile_path: None,
        }
    }

    /// The credited person.
    pub fn person(&self) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            profile_path: self.profile_path.clone(),
        }
    }
}

/// One crew job in one film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewCredit {
    pub id: PersonId,
    pub name: String,
    pub job: String,
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CrewCredit {
    /// Creates a credit for `name` working as `job` in `department`.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        job: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            job: job.into(),
            department: department.into(),
            profile_path: None,
        }
    }

    /// The credited person.
    pub fn person(&self) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            profile_path: self.profile_path.clone(),
        }
    }
}

/// Every credit attached to one film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmCredits {
    pub film: MovieId,
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
}

impl FilmCredits {
    /// Groups credits under a film id.
    pub fn new(film: MovieId, cast: Vec<CastCredit>, crew: Vec<CrewCredit>) -> Self {
        Self { film, cast, crew }
    }

    /// Whether `person` appears in the cast.
    pub fn features_cast(&self, person: PersonId) -> bool {
        self.cast.iter().any(|credit| credit.id == person)
    }

    /// Whether `person` appears in the crew.
    pub fn features_crew(&self, person: PersonId) -> bool {
        self.crew.iter().any(|credit| credit.id == person)
    }
}
