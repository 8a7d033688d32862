//! The in-memory movie collection.
//!
//! `MovieStore` owns an ordered `Vec<Movie>` behind a single `RwLock`. Every
//! read/modify/write sequence runs inside one critical section. Lookups are
//! linear scans; there is no secondary index.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::ids::{IdSource, RandomIds};
use crate::types::{Director, Movie, MovieId, NewMovie};

/// How many ids `create` draws before giving up on finding a free one.
pub const MAX_ID_ATTEMPTS: usize = 1_000;

/// The three records every server starts with.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "054322", "Halftime", Director::new("Amanda", "Micheli")),
        Movie::new("2", "054452", "Stardust", Director::new("Gabriel", "Range")),
        Movie::new("3", "430928", "Red", Director::new("Robert", "Schwentke")),
    ]
}

/// Authoritative, process-lifetime collection of movie records.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
    ids: Box<dyn IdSource>,
}

impl MovieStore {
    /// Empty store with random ids.
    pub fn new() -> Self {
        Self::with_id_source(RandomIds::new())
    }

    /// Empty store drawing ids from `ids`.
    pub fn with_id_source(ids: impl IdSource + 'static) -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    /// Store pre-populated with `seed_movies()` and random ids.
    pub fn with_seed_movies() -> Self {
        Self::new().seeded()
    }

    /// Append the seed records (builder style).
    pub fn seeded(self) -> Self {
        for movie in seed_movies() {
            self.append(movie);
        }
        self
    }

    /// Name of the configured id source.
    pub fn id_source_name(&self) -> &'static str {
        self.ids.name()
    }

    // A panic while holding the lock cannot leave the Vec half-modified by
    // any of our operations, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// First record whose id equals `id`.
    pub fn find(&self, id: &str) -> Option<Movie> {
        self.read().iter().find(|m| m.id == id).cloned()
    }

    /// Add a record at the end. The id is stored as given, duplicates included.
    pub fn append(&self, movie: Movie) {
        self.write().push(movie);
    }

    /// Mint an id, attach it to `movie` and append it.
    ///
    /// Ids already present in the collection are rejected and redrawn, up to
    /// `MAX_ID_ATTEMPTS` times.
    pub fn create(&self, movie: NewMovie) -> Result<MovieId> {
        let mut movies = self.write();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id().to_string();
            if movies.iter().any(|m| m.id == id) {
                debug!("Id {} already taken (attempt {})", id, attempt);
                continue;
            }
            movies.push(movie.with_id(id.clone()));
            return Ok(id);
        }

        warn!(
            "No free id from {} source after {} attempts",
            self.ids.name(),
            MAX_ID_ATTEMPTS
        );
        Err(StoreError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Remove the first record matching `id` and append `movie` in its place,
    /// keeping the original id. The replacement lands at the end of the
    /// sequence.
    ///
    /// Returns `false`, leaving the collection untouched, when no record
    /// matches.
    pub fn replace(&self, id: &str, movie: Movie) -> bool {
        let mut movies = self.write();
        let Some(pos) = movies.iter().position(|m| m.id == id) else {
            return false;
        };

        let original = movies.remove(pos);
        movies.push(Movie {
            id: original.id,
            ..movie
        });
        true
    }

    /// Remove the first record matching `id`.
    pub fn remove(&self, id: &str) -> Option<Movie> {
        let mut movies = self.write();
        let pos = movies.iter().position(|m| m.id == id)?;
        Some(movies.remove(pos))
    }

    /// Copy of the collection in sequence order.
    pub fn snapshot(&self) -> Vec<Movie> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
