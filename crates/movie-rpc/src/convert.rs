//! Conversions between the generated wire types and `movie_store` records.

use movie_store::{Director, Movie, NewMovie};

use crate::movies;

impl From<Director> for movies::Director {
    fn from(director: Director) -> Self {
        Self {
            firstname: director.firstname,
            lastname: director.lastname,
        }
    }
}

impl From<movies::Director> for Director {
    fn from(director: movies::Director) -> Self {
        Self {
            firstname: director.firstname,
            lastname: director.lastname,
        }
    }
}

impl From<Movie> for movies::MovieInfo {
    /// A missing director stays missing, so a stored record reads back
    /// exactly as it was submitted.
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            isbn: movie.isbn,
            title: movie.title,
            director: movie.director.map(movies::Director::from),
        }
    }
}

impl From<movies::MovieInfo> for Movie {
    fn from(info: movies::MovieInfo) -> Self {
        Self {
            id: info.id,
            isbn: info.isbn,
            title: info.title,
            director: info.director.map(Director::from),
        }
    }
}

impl From<movies::MovieInfo> for NewMovie {
    /// Drops any id the caller sent.
    fn from(info: movies::MovieInfo) -> Self {
        NewMovie::from(Movie::from(info))
    }
}

impl From<NewMovie> for movies::MovieInfo {
    fn from(movie: NewMovie) -> Self {
        Self {
            id: String::new(),
            isbn: movie.isbn,
            title: movie.title,
            director: movie.director.map(movies::Director::from),
        }
    }
}

impl movies::MutationStatus {
    pub const NOT_APPLIED: i32 = 0;
    pub const APPLIED: i32 = 1;

    pub fn from_applied(applied: bool) -> Self {
        Self {
            value: if applied { Self::APPLIED } else { Self::NOT_APPLIED },
        }
    }

    pub fn applied(&self) -> bool {
        self.value == Self::APPLIED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_round_trip_keeps_director() {
        let movie = Movie::new("1", "054322", "Halftime", Director::new("Amanda", "Micheli"));
        let info = movies::MovieInfo::from(movie.clone());

        assert_eq!(info.director.as_ref().unwrap().lastname, "Micheli");
        assert_eq!(Movie::from(info), movie);
    }

    #[test]
    fn test_empty_movie_maps_to_empty_message() {
        let info = movies::MovieInfo::from(Movie::default());
        assert_eq!(info, movies::MovieInfo::default());
        assert!(info.director.is_none());
    }

    #[test]
    fn test_missing_director_round_trips_as_missing() {
        let info = movies::MovieInfo {
            id: "9".to_string(),
            title: "No Director".to_string(),
            ..Default::default()
        };
        let movie = Movie::from(info.clone());
        assert!(movie.director.is_none());

        let back = movies::MovieInfo::from(movie);
        assert_eq!(back, info);
        assert!(back.director.is_none());
    }

    #[test]
    fn test_empty_director_is_not_dropped() {
        let info = movies::MovieInfo {
            id: "9".to_string(),
            director: Some(movies::Director::default()),
            ..Default::default()
        };

        assert_eq!(movies::MovieInfo::from(Movie::from(info.clone())), info);
    }

    #[test]
    fn test_new_movie_drops_id() {
        let info = movies::MovieInfo {
            id: "client-chosen".to_string(),
            isbn: "010900".to_string(),
            title: "Pulp Fiction".to_string(),
            director: Some(movies::Director {
                firstname: "Quentin".to_string(),
                lastname: "Tarantino".to_string(),
            }),
        };
        let new_movie = NewMovie::from(info);

        assert_eq!(new_movie.title, "Pulp Fiction");
        assert_eq!(new_movie.with_id("5").id, "5");
    }

    #[test]
    fn test_mutation_status_flag() {
        assert!(movies::MutationStatus::from_applied(true).applied());
        assert_eq!(movies::MutationStatus::from_applied(false).value, 0);
        assert!(!movies::MutationStatus::default().applied());
    }
}
