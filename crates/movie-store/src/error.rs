//! Error types for the movie-store crate.
//!
//! Lookups that miss are not errors here: `find`, `replace` and `remove`
//! report a missing id through `Option` / `bool`. Only conditions the caller
//! cannot express as "absent" end up in `StoreError`.

use thiserror::Error;

/// Errors that can occur while mutating the movie collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Every id drawn from the id source was already taken
    #[error("Could not allocate a free movie id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
