// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Cast and crew store.
//!
//! Credits are stored per film. Person-centric queries walk every film's
//! credits; the most-credited leaderboard counts occurrences into a scratch
//! table and ranks the distinct people with a partition-exchange sort.

use std::sync::Arc;

use super::{matches_term, new_table, NOT_FOUND};
use crate::config::stores::DEFAULT_STAR_BILLING_MAX_ORDER;
use crate::data_structures::chained_table::{ChainedTable, ChainedTableConfig, InsertObserver};
use crate::data_structures::ordered_list::OrderedList;
use crate::data_structures::ranking::{top_n, RankingAlgorithm};
use crate::data_structures::unique_set::UniqueSet;
use crate::records::{CastCredit, CrewCredit, FilmCredits, MovieId, Person, PersonId};

/// Credits keyed by film id.
#[derive(Debug)]
pub struct CreditStore {
    credits: ChainedTable<MovieId, FilmCredits>,
    /// Films with credits, most recently added first
    films: OrderedList<MovieId>,
    table_config: ChainedTableConfig,
    star_billing_max_order: u32,
}

impl CreditStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(
            &ChainedTableConfig::default(),
            None,
            DEFAULT_STAR_BILLING_MAX_ORDER,
        )
    }

    /// Creates an empty store.
    ///
    /// # Arguments
    ///
    /// * `config` - Sizing of the credit table and of scratch tables used by queries
    /// * `observer` - Insert diagnostics for the credit table
    /// * `star_billing_max_order` - Highest billing order counted as starring
    pub fn with_config(
        config: &ChainedTableConfig,
        observer: Option<&Arc<dyn InsertObserver>>,
        star_billing_max_order: u32,
    ) -> Self {
        Self {
            credits: new_table(config, observer),
            films: OrderedList::new(),
            table_config: config.clone(),
            star_billing_max_order,
        }
    }

    /// Stores the credits of a film. Rejects a film that already has credits.
    pub fn add(&mut self, film: MovieId, cast: Vec<CastCredit>, crew: Vec<CrewCredit>) -> bool {
        let added = self
            .credits
            .insert_or_reject(film, FilmCredits::new(film, cast, crew));
        if added {
            self.films.add(film);
        } else {
            tracing::debug!(film, "Rejected duplicate credits");
        }
        added
    }

    /// Removes the credits of a film.
    pub fn remove(&mut self, film: MovieId) -> bool {
        if !self.credits.remove(&film) {
            return false;
        }
        self.films.remove(&film);
        true
    }

    /// Number of films with credits.
    pub fn size(&self) -> usize {
        self.credits.len()
    }

    /// Films with credits, most recently added first.
    pub fn films(&self) -> Vec<MovieId> {
        self.films.iter().copied().collect()
    }

    /// Cast of a film, empty if unknown.
    pub fn film_cast(&self, film: MovieId) -> Vec<CastCredit> {
        self.credits
            .get(&film)
            .map(|credits| credits.cast.clone())
            .unwrap_or_default()
    }

    /// Crew of a film, empty if unknown.
    pub fn film_crew(&self, film: MovieId) -> Vec<CrewCredit> {
        self.credits
            .get(&film)
            .map(|credits| credits.crew.clone())
            .unwrap_or_default()
    }

    /// Cast size: `-1` for an unknown film, `0` for an empty cast.
    pub fn size_of_cast(&self, film: MovieId) -> i64 {
        self.credits
            .get(&film)
            .map_or(NOT_FOUND, |credits| credits.cast.len() as i64)
    }

    /// Crew size: `-1` for an unknown film, `0` for an empty crew.
    pub fn size_of_crew(&self, film: MovieId) -> i64 {
        self.credits
            .get(&film)
            .map_or(NOT_FOUND, |credits| credits.crew.len() as i64)
    }

    /// Every distinct cast member; the first sighting of a person wins.
    pub fn unique_cast(&self) -> Vec<Person> {
        self.distinct_people(|credits| credits.cast.iter().map(CastCredit::person).collect())
    }

    /// Every distinct crew member; the first sighting of a person wins.
    pub fn unique_crew(&self) -> Vec<Person> {
        self.distinct_people(|credits| credits.crew.iter().map(CrewCredit::person).collect())
    }

    /// Cast members whose name contains `term` (case-sensitive).
    pub fn find_cast(&self, term: &str) -> Vec<Person> {
        self.unique_cast()
            .into_iter()
            .filter(|person| matches_term(&person.name, term))
            .collect()
    }

    /// Crew members whose name contains `term` (case-sensitive).
    pub fn find_crew(&self, term: &str) -> Vec<Person> {
        self.unique_crew()
            .into_iter()
            .filter(|person| matches_term(&person.name, term))
            .collect()
    }

    /// The cast member with this id, if credited anywhere.
    pub fn cast_member(&self, id: PersonId) -> Option<Person> {
        self.credits.iter().find_map(|(_, credits)| {
            credits
                .cast
                .iter()
                .find(|credit| credit.id == id)
                .map(CastCredit::person)
        })
    }

    /// The crew member with this id, if credited anywhere.
    pub fn crew_member(&self, id: PersonId) -> Option<Person> {
        self.credits.iter().find_map(|(_, credits)| {
            credits
                .crew
                .iter()
                .find(|credit| credit.id == id)
                .map(CrewCredit::person)
        })
    }

    /// Films whose cast includes the person, most recently added first.
    pub fn cast_films(&self, id: PersonId) -> Vec<MovieId> {
        self.films_where(|credits| credits.features_cast(id))
    }

    /// Films whose crew includes the person, most recently added first.
    pub fn crew_films(&self, id: PersonId) -> Vec<MovieId> {
        self.films_where(|credits| credits.features_crew(id))
    }

    /// Films where the person is billed at or above the star billing cutoff.
    pub fn cast_stars_in_films(&self, id: PersonId) -> Vec<MovieId> {
        let max_order = self.star_billing_max_order;
        self.films_where(|credits| {
            credits
                .cast
                .iter()
                .any(|credit| credit.id == id && credit.order <= max_order)
        })
    }

    /// The `n` cast members with the most credits, most credited first.
    ///
    /// Every cast entry counts, so two roles in one film count twice. Ties
    /// come out in no particular order.
    pub fn most_cast_credits(&self, n: i64) -> Vec<Person> {
        if n <= 0 {
            return Vec::new();
        }

        let mut counts: ChainedTable<PersonId, u32> =
            ChainedTable::with_config(self.table_config.clone());
        let mut people: ChainedTable<PersonId, Person> =
            ChainedTable::with_config(self.table_config.clone());
        let mut ids = UniqueSet::new();

        for (_, credits) in self.credits.iter() {
            for credit in &credits.cast {
                match counts.get_mut(&credit.id) {
                    Some(count) => *count += 1,
                    None => {
                        counts.add(credit.id, 1);
                        people.add(credit.id, credit.person());
                    }
                }
                ids.add(credit.id);
            }
        }

        let ranked = top_n(ids.iter().copied(), &counts, n, RankingAlgorithm::PartitionExchange);
        ranked
            .into_iter()
            .filter_map(|id| people.get(&id).cloned())
            .collect()
    }

    /// Number of cast entries for the person, `-1` if never credited.
    pub fn num_cast_credits(&self, id: PersonId) -> i64 {
        let count = self
            .credits
            .iter()
            .map(|(_, credits)| credits.cast.iter().filter(|credit| credit.id == id).count())
            .sum::<usize>();
        match count {
            0 => NOT_FOUND,
            count => count as i64,
        }
    }

    fn films_where(&self, predicate: impl Fn(&FilmCredits) -> bool) -> Vec<MovieId> {
        self.films
            .iter()
            .filter(|film| self.credits.get(*film).map_or(false, &predicate))
            .copied()
            .collect()
    }

    fn distinct_people(&self, people_of: impl Fn(&FilmCredits) -> Vec<Person>) -> Vec<Person> {
        let mut seen = UniqueSet::new();
        let mut people = Vec::new();
        for credits in self.credits.snapshot() {
            for person in people_of(&credits) {
                if seen.add(person.id) {
                    people.push(person);
                }
            }
        }
        people
    }
}

impl Default for CreditStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CreditStore {
        let mut store = CreditStore::new();
        store.add(
            862,
            vec![
                CastCredit::new(31, "Tom Hanks", "Woody", 0),
                CastCredit::new(12898, "Tim Allen", "Buzz Lightyear", 1),
                CastCredit::new(7167, "Don Rickles", "Mr. Potato Head", 2),
            ],
            vec![CrewCredit::new(7879, "John Lasseter", "Director", "Directing")],
        );
        store.add(
            863,
            vec![
                CastCredit::new(31, "Tom Hanks", "Woody", 0),
                CastCredit::new(12898, "Tim Allen", "Buzz Lightyear", 1),
            ],
            vec![CrewCredit::new(7879, "John Lasseter", "Director", "Directing")],
        );
        store.add(
            13,
            vec![CastCredit::new(31, "Tom Hanks", "Forrest Gump", 5)],
            vec![],
        );
        store
    }

    #[test]
    fn test_add_remove() {
        let mut store = store();
        assert!(!store.add(862, vec![], vec![]));
        assert_eq!(store.size(), 3);
        assert_eq!(store.films(), vec![13, 863, 862]);

        assert!(store.remove(863));
        assert!(!store.remove(863));
        assert_eq!(store.films(), vec![13, 862]);
        assert!(store.film_cast(863).is_empty());
    }

    #[test]
    fn test_sizes() {
        let mut store = store();
        store.add(1, vec![], vec![]);
        assert_eq!(store.size_of_cast(862), 3);
        assert_eq!(store.size_of_crew(13), 0);
        assert_eq!(store.size_of_cast(1), 0);
        assert_eq!(store.size_of_cast(404), NOT_FOUND);
    }

    #[test]
    fn test_person_queries() {
        let store = store();
        assert_eq!(store.unique_cast().len(), 3);
        assert_eq!(store.unique_crew().len(), 1);
        assert_eq!(store.find_cast("Tim").len(), 1);
        assert!(store.find_cast("tim").is_empty());
        assert_eq!(store.cast_member(31).map(|p| p.name), Some("Tom Hanks".to_string()));
        assert!(store.crew_member(31).is_none());

        assert_eq!(store.cast_films(31), vec![13, 863, 862]);
        assert_eq!(store.crew_films(7879), vec![863, 862]);
        assert_eq!(store.cast_stars_in_films(31), vec![863, 862]);
    }

    #[test]
    fn test_most_cast_credits() {
        let store = store();
        let top = store.most_cast_credits(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 31);
        assert_eq!(top[1].id, 12898);

        assert!(store.most_cast_credits(0).is_empty());
        assert_eq!(store.most_cast_credits(50).len(), 3);
        assert_eq!(store.num_cast_credits(31), 3);
        assert_eq!(store.num_cast_credits(404), NOT_FOUND);
    }
}
