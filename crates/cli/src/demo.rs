//! The demonstration sequence: every operation once, in a fixed order.
//!
//! List failures are fatal and bubble up as errors. Get / create / update /
//! delete failures are logged as warnings and the sequence continues with a
//! zero-valued result.

use anyhow::{Context, Result};
use tracing::{info, warn};

use movie_rpc::{Director, MovieClient, MovieInfo};

/// Id the demo reads, updates and finally deletes.
pub const DEMO_MOVIE_ID: &str = "1";

/// Title the update routine assigns.
pub const UPDATED_TITLE: &str = "New updated title";

/// What the demo observed, in call order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoReport {
    /// Number of movies seen by each list run.
    pub list_counts: Vec<usize>,
    pub fetched: MovieInfo,
    pub updated: bool,
    /// Empty when create failed.
    pub created_id: String,
    pub deleted: bool,
}

/// Run list, get, update, create and delete in sequence.
pub async fn run_demo(client: &mut MovieClient) -> Result<DemoReport> {
    let mut report = DemoReport::default();

    report.list_counts.push(run_list_movies(client).await?);
    report.fetched = run_get_movie(client).await;
    report.updated = run_update_movie(client).await;

    report.created_id = run_create_movie(client).await;
    report.list_counts.push(run_list_movies(client).await?);

    report.deleted = run_delete_movie(client).await;
    report.list_counts.push(run_list_movies(client).await?);

    Ok(report)
}

/// List every movie. Returns how many were received.
pub async fn run_list_movies(client: &mut MovieClient) -> Result<usize> {
    let movies = client
        .list_movies()
        .await
        .context("Failed to list movies")?;

    for movie in &movies {
        info!(
            "Received a movie from the server: Title = {}, ISBN = {}, ID = {}",
            movie.title, movie.isbn, movie.id
        );
    }
    Ok(movies.len())
}

/// Fetch the demo movie.
pub async fn run_get_movie(client: &mut MovieClient) -> MovieInfo {
    let movie = client.get_movie(DEMO_MOVIE_ID).await.unwrap_or_else(|e| {
        warn!("cannot get movie: {}", e);
        MovieInfo::default()
    });

    let director = movie.director.clone().unwrap_or_default();
    info!(
        "The movie from the server is ID: {}, Title: {} and the director is {} {}",
        movie.id, movie.title, director.firstname, director.lastname
    );
    movie
}

/// Fetch the demo movie, retitle it and send it back.
pub async fn run_update_movie(client: &mut MovieClient) -> bool {
    let mut movie = client.get_movie(DEMO_MOVIE_ID).await.unwrap_or_else(|e| {
        warn!("cannot get movie: {}", e);
        MovieInfo::default()
    });
    movie.title = UPDATED_TITLE.to_string();

    let updated = client.update_movie(movie.clone()).await.unwrap_or_else(|e| {
        warn!("cannot update movie: {}", e);
        false
    });

    if updated {
        info!("movie updated");
    }
    info!("New movie title is : {}", movie.title);
    updated
}

/// Create the demo movie. Returns the assigned id, empty on failure.
pub async fn run_create_movie(client: &mut MovieClient) -> String {
    let movie = MovieInfo {
        id: String::new(),
        isbn: "010900".to_string(),
        title: "Pulp Fiction".to_string(),
        director: Some(Director {
            firstname: "Quentin".to_string(),
            lastname: "Tarantino".to_string(),
        }),
    };

    match client.create_movie(movie).await {
        Ok(id) => {
            info!("movie created with movie id: {}", id);
            id
        }
        Err(e) => {
            warn!("cannot create movie: {}", e);
            String::new()
        }
    }
}

/// Delete the demo movie.
pub async fn run_delete_movie(client: &mut MovieClient) -> bool {
    let deleted = client
        .delete_movie(DEMO_MOVIE_ID)
        .await
        .unwrap_or_else(|e| {
            warn!("cannot delete movie: {}", e);
            false
        });

    if deleted {
        info!("movie with id {} deleted", DEMO_MOVIE_ID);
    } else {
        info!("movie not found for delete it");
    }
    deleted
}
