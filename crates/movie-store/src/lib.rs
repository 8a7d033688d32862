//! # Movie Store Crate
//!
//! The in-memory movie collection behind the movie service.
//!
//! ## Main Components
//!
//! - **types**: Domain records (`Movie`, `Director`, `NewMovie`)
//! - **store**: `MovieStore`, the ordered collection and its operations
//! - **ids**: Id sources for created records
//! - **error**: Error types for store mutations
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_store::{MovieStore, NewMovie, Director};
//!
//! let store = MovieStore::with_seed_movies();
//! let id = store.create(NewMovie {
//!     isbn: "010900".to_string(),
//!     title: "Pulp Fiction".to_string(),
//!     director: Some(Director::new("Quentin", "Tarantino")),
//! })?;
//!
//! assert_eq!(store.find(&id).unwrap().title, "Pulp Fiction");
//! ```

// Public modules
pub mod error;
pub mod ids;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use ids::{IdSource, RandomIds, SequentialIds, RANDOM_ID_UPPER_BOUND};
pub use store::{seed_movies, MovieStore, MAX_ID_ATTEMPTS};
pub use types::{Director, Movie, MovieId, NewMovie};
