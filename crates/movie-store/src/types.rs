//! Core domain types for the movie catalogue.
//!
//! These are the server-side representation of a record. The wire types
//! generated from `movies.proto` live in `movie-rpc`, which converts to and
//! from these.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a movie record.
///
/// Ids are opaque strings: the seed records use "1", "2", "3" and the server
/// mints decimal numbers for created records.
pub type MovieId = String;

// =============================================================================
// Records
// =============================================================================

/// Name of a movie's director. A nested value, not a separate entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    /// "Firstname Lastname", trimmed when either half is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// A single movie entry in the collection.
///
/// No field is validated. `Movie::default()` is the zero-valued record that
/// the legacy wire contract returns for unknown ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub isbn: String,
    pub title: String,
    /// Absent when the record was submitted without one; kept as submitted.
    pub director: Option<Director>,
}

impl Movie {
    pub fn new(
        id: impl Into<MovieId>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        director: Director,
    ) -> Self {
        Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            director: Some(director),
        }
    }

    /// Director's full name, empty when there is no director.
    pub fn director_name(&self) -> String {
        self.director
            .as_ref()
            .map(Director::full_name)
            .unwrap_or_default()
    }

    /// True when every field is at its zero value.
    pub fn is_empty(&self) -> bool {
        *self == Movie::default()
    }
}

/// A movie as submitted for creation, before the server assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl NewMovie {
    /// Attach an id, producing a storable record.
    pub fn with_id(self, id: impl Into<MovieId>) -> Movie {
        Movie {
            id: id.into(),
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}

impl From<Movie> for NewMovie {
    /// Drops the id; used when a caller-supplied record goes through create.
    fn from(movie: Movie) -> Self {
        Self {
            isbn: movie.isbn,
            title: movie.title,
            director: movie.director,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_movie_is_empty() {
        assert!(Movie::default().is_empty());

        let movie = Movie {
            title: "Red".to_string(),
            ..Default::default()
        };
        assert!(!movie.is_empty());
    }

    #[test]
    fn test_new_movie_with_id_keeps_fields() {
        let new_movie = NewMovie {
            isbn: "010900".to_string(),
            title: "Pulp Fiction".to_string(),
            director: Some(Director::new("Quentin", "Tarantino")),
        };

        let movie = new_movie.with_id("42");
        assert_eq!(movie.id, "42");
        assert_eq!(movie.isbn, "010900");
        assert_eq!(movie.title, "Pulp Fiction");
        assert_eq!(movie.director_name(), "Quentin Tarantino");
    }

    #[test]
    fn test_full_name_with_missing_half() {
        assert_eq!(Director::new("", "Range").full_name(), "Range");
        assert_eq!(Director::default().full_name(), "");
    }

    #[test]
    fn test_director_name_without_director() {
        let movie = Movie {
            id: "9".to_string(),
            title: "Untitled".to_string(),
            ..Default::default()
        };

        assert!(movie.director.is_none());
        assert_eq!(movie.director_name(), "");
    }

    #[test]
    fn test_movie_serializes_nested_director() {
        let movie = Movie::new("3", "430928", "Red", Director::new("Robert", "Schwentke"));
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(json["id"], "3");
        assert_eq!(json["director"]["lastname"], "Schwentke");
    }
}
