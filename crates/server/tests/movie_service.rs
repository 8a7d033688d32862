//! End-to-end tests: `MovieClient` against an in-process movie server.

use std::sync::Arc;

use movie_rpc::{Director, MovieClient, MovieInfo, DEFAULT_DEADLINE};
use movie_store::MovieStore;
use server::{serve, MovieServiceImpl};
use tokio::net::TcpListener;

/// Start a server over `store` on a random port.
async fn start_server(store: Arc<MovieStore>) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind movie server");
    let addr = listener.local_addr().expect("Failed to get local address");
    let service = MovieServiceImpl::new(store);

    let handle = tokio::spawn(async move {
        serve(listener, service, std::future::pending())
            .await
            .expect("Movie server failed");
    });

    (format!("http://{}", addr), handle)
}

async fn connect(addr: &str) -> MovieClient {
    MovieClient::connect(addr.to_string(), DEFAULT_DEADLINE)
        .await
        .expect("Failed to connect")
}

fn pulp_fiction() -> MovieInfo {
    MovieInfo {
        id: String::new(),
        isbn: "010900".to_string(),
        title: "Pulp Fiction".to_string(),
        director: Some(Director {
            firstname: "Quentin".to_string(),
            lastname: "Tarantino".to_string(),
        }),
    }
}

#[tokio::test]
async fn test_seeded_catalogue_scenario() {
    let (addr, handle) = start_server(Arc::new(MovieStore::with_seed_movies())).await;
    let mut client = connect(&addr).await;

    let halftime = client.get_movie("1").await.unwrap();
    assert_eq!(halftime.title, "Halftime");
    assert_eq!(halftime.isbn, "054322");
    let director = halftime.director.unwrap();
    assert_eq!((director.firstname.as_str(), director.lastname.as_str()), ("Amanda", "Micheli"));

    let id = client.create_movie(pulp_fiction()).await.unwrap();
    let id_num: u64 = id.parse().expect("id should be a decimal number");
    assert!(id_num < 100_000);

    let movies = client.list_movies().await.unwrap();
    assert_eq!(movies.len(), 4);
    assert_eq!(movies[3], MovieInfo { id: id.clone(), ..pulp_fiction() });

    assert!(client.delete_movie("1").await.unwrap());
    assert_eq!(client.get_movie("1").await.unwrap(), MovieInfo::default());

    let titles: Vec<_> = client
        .list_movies()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["Stardust", "Red", "Pulp Fiction"]);

    handle.abort();
}

#[tokio::test]
async fn test_update_moves_record_to_end() {
    let (addr, handle) = start_server(Arc::new(MovieStore::with_seed_movies())).await;
    let mut client = connect(&addr).await;

    let mut movie = client.get_movie("1").await.unwrap();
    movie.title = "New updated title".to_string();
    assert!(client.update_movie(movie).await.unwrap());

    let movies = client.list_movies().await.unwrap();
    let ids: Vec<_> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
    assert_eq!(movies[2].title, "New updated title");
    assert_eq!(movies[2].isbn, "054322");

    handle.abort();
}

#[tokio::test]
async fn test_unknown_ids_leave_collection_unchanged() {
    let store = Arc::new(MovieStore::with_seed_movies());
    let (addr, handle) = start_server(store.clone()).await;
    let mut client = connect(&addr).await;
    let before = store.snapshot();

    assert_eq!(client.get_movie("404").await.unwrap(), MovieInfo::default());
    assert!(!client.delete_movie("404").await.unwrap());
    let update = MovieInfo {
        id: "404".to_string(),
        ..pulp_fiction()
    };
    assert!(!client.update_movie(update).await.unwrap());

    assert_eq!(store.snapshot(), before);

    handle.abort();
}

#[tokio::test]
async fn test_empty_catalogue_lists_nothing() {
    let (addr, handle) = start_server(Arc::new(MovieStore::new())).await;
    let mut client = connect(&addr).await;

    assert!(client.list_movies().await.unwrap().is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_concurrent_creates_are_all_stored() {
    let store = Arc::new(MovieStore::with_seed_movies());
    let (addr, handle) = start_server(store.clone()).await;
    let client = connect(&addr).await;

    let calls = (0..50).map(|_| {
        let mut client = client.clone();
        async move { client.create_movie(pulp_fiction()).await }
    });
    let mut ids: Vec<String> = futures::future::join_all(calls)
        .await
        .into_iter()
        .map(|r| r.expect("create failed"))
        .collect();

    assert_eq!(store.len(), 53);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50, "created ids should be distinct");

    handle.abort();
}
