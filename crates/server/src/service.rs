//! # Movie Service
//!
//! gRPC implementation of `movies.MovieService` on top of a shared
//! `MovieStore`.
//!
//! The store reports lookups as found / not found. Under
//! `NotFoundPolicy::Legacy` a miss is encoded in the response payload (an
//! empty `MovieInfo`, or status 0); under `NotFoundPolicy::Status` it becomes
//! a `NOT_FOUND` status.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::{debug, info, warn};

use movie_rpc::movies::movie_service_server::MovieService;
use movie_rpc::movies::{Empty, MovieId, MovieInfo, MutationStatus};
use movie_store::{Movie, MovieStore, NewMovie, StoreError};

use crate::config::NotFoundPolicy;

/// Capacity of the channel feeding a ListMovies stream.
const LIST_CHANNEL_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct MovieServiceImpl {
    store: Arc<MovieStore>,
    not_found: NotFoundPolicy,
}

impl MovieServiceImpl {
    pub fn new(store: Arc<MovieStore>) -> Self {
        Self::with_policy(store, NotFoundPolicy::Legacy)
    }

    pub fn with_policy(store: Arc<MovieStore>, not_found: NotFoundPolicy) -> Self {
        Self { store, not_found }
    }

    pub fn store(&self) -> &Arc<MovieStore> {
        &self.store
    }

    fn mutation_status(&self, applied: bool, id: &str) -> Result<MutationStatus, Status> {
        if !applied && self.not_found == NotFoundPolicy::Status {
            return Err(not_found(id));
        }
        Ok(MutationStatus::from_applied(applied))
    }
}

fn not_found(id: &str) -> Status {
    Status::not_found(format!("movie {} not found", id))
}

#[tonic::async_trait]
impl MovieService for MovieServiceImpl {
    type ListMoviesStream = ReceiverStream<Result<MovieInfo, Status>>;

    async fn list_movies(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<Self::ListMoviesStream>, Status> {
        info!("ListMovies request: {:?}", request.get_ref());

        // Point-in-time view; writers are not blocked while we stream
        let movies = self.store.snapshot();
        let (tx, rx) = mpsc::channel(LIST_CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let total = movies.len();
            for (sent, movie) in movies.into_iter().enumerate() {
                if tx.send(Ok(MovieInfo::from(movie))).await.is_err() {
                    debug!("ListMovies receiver dropped after {}/{} movies", sent, total);
                    return;
                }
            }
            debug!("ListMovies streamed {} movies", total);
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn get_movie(&self, request: Request<MovieId>) -> Result<Response<MovieInfo>, Status> {
        let id = request.into_inner().value;
        info!("GetMovie request: id={}", id);

        let movie = match self.store.find(&id) {
            Some(movie) => movie,
            None if self.not_found == NotFoundPolicy::Status => return Err(not_found(&id)),
            None => {
                debug!("GetMovie: no movie with id {}, returning empty record", id);
                Movie::default()
            }
        };

        Ok(Response::new(MovieInfo::from(movie)))
    }

    async fn create_movie(&self, request: Request<MovieInfo>) -> Result<Response<MovieId>, Status> {
        let movie = request.into_inner();
        info!("CreateMovie request: {:?}", movie);

        let id = self
            .store
            .create(NewMovie::from(movie))
            .map_err(|e: StoreError| {
                warn!("CreateMovie failed: {}", e);
                Status::resource_exhausted(e.to_string())
            })?;

        info!("Created movie with id {}", id);
        Ok(Response::new(MovieId { value: id }))
    }

    async fn update_movie(
        &self,
        request: Request<MovieInfo>,
    ) -> Result<Response<MutationStatus>, Status> {
        let movie = Movie::from(request.into_inner());
        info!("UpdateMovie request: {:?}", movie);

        let id = movie.id.clone();
        let applied = self.store.replace(&id, movie);
        if !applied {
            debug!("UpdateMovie: no movie with id {}", id);
        }

        self.mutation_status(applied, &id).map(Response::new)
    }

    async fn delete_movie(
        &self,
        request: Request<MovieId>,
    ) -> Result<Response<MutationStatus>, Status> {
        let id = request.into_inner().value;
        info!("DeleteMovie request: id={}", id);

        let applied = self.store.remove(&id).is_some();
        if !applied {
            debug!("DeleteMovie: no movie with id {}", id);
        }

        self.mutation_status(applied, &id).map(Response::new)
    }
}
