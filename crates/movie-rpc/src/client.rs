//! Typed client for the movie service.
//!
//! Wraps the generated gRPC client and bounds every call by a deadline. The
//! deadline is sent to the server as `grpc-timeout` and enforced locally as
//! well, so an unresponsive server surfaces as `ClientError::DeadlineExceeded`
//! instead of a hang.

use std::future::Future;
use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::error::ClientError;
use crate::movies::{movie_service_client::MovieServiceClient, Empty, MovieId, MovieInfo};

/// Default endpoint of the movie server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:50051";

/// Default per-call deadline.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Client for the movie service.
#[derive(Clone)]
pub struct MovieClient {
    inner: MovieServiceClient<Channel>,
    endpoint: String,
    deadline: Duration,
}

impl MovieClient {
    /// Connect to the movie service at `endpoint` (e.g. "http://127.0.0.1:50051").
    ///
    /// Establishing the connection is itself bounded by `deadline`.
    pub async fn connect(
        endpoint: impl Into<String>,
        deadline: Duration,
    ) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        info!("Connecting to movie service at {}", endpoint);

        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| ClientError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?
            .connect_timeout(deadline)
            .connect()
            .await?;

        Ok(Self {
            inner: MovieServiceClient::new(channel),
            endpoint,
            deadline,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fetch every movie. The whole stream has to drain within the deadline;
    /// a receive error on any record fails the call.
    pub async fn list_movies(&mut self) -> Result<Vec<MovieInfo>, ClientError> {
        let deadline = self.deadline;
        let request = timed_request(Empty {}, deadline);
        let client = &mut self.inner;

        with_deadline(deadline, async move {
            let mut stream = client.list_movies(request).await?.into_inner();
            let mut movies = Vec::new();
            while let Some(movie) = stream.message().await? {
                debug!("Received movie {}", movie.id);
                movies.push(movie);
            }
            Ok::<_, ClientError>(movies)
        })
        .await
    }

    /// Look up a movie. Unknown ids come back as an empty `MovieInfo`.
    pub async fn get_movie(&mut self, id: &str) -> Result<MovieInfo, ClientError> {
        let deadline = self.deadline;
        let request = timed_request(
            MovieId {
                value: id.to_string(),
            },
            deadline,
        );
        let client = &mut self.inner;

        with_deadline(deadline, async move {
            Ok::<_, ClientError>(client.get_movie(request).await?.into_inner())
        })
        .await
    }

    /// Create a movie and return the id the server assigned.
    pub async fn create_movie(&mut self, movie: MovieInfo) -> Result<String, ClientError> {
        let deadline = self.deadline;
        let request = timed_request(movie, deadline);
        let client = &mut self.inner;

        with_deadline(deadline, async move {
            Ok::<_, ClientError>(client.create_movie(request).await?.into_inner().value)
        })
        .await
    }

    /// Replace the movie with `movie.id`. Returns whether it existed.
    pub async fn update_movie(&mut self, movie: MovieInfo) -> Result<bool, ClientError> {
        let deadline = self.deadline;
        let request = timed_request(movie, deadline);
        let client = &mut self.inner;

        with_deadline(deadline, async move {
            Ok::<_, ClientError>(client.update_movie(request).await?.into_inner().applied())
        })
        .await
    }

    /// Delete the movie with `id`. Returns whether it existed.
    pub async fn delete_movie(&mut self, id: &str) -> Result<bool, ClientError> {
        let deadline = self.deadline;
        let request = timed_request(
            MovieId {
                value: id.to_string(),
            },
            deadline,
        );
        let client = &mut self.inner;

        with_deadline(deadline, async move {
            Ok::<_, ClientError>(client.delete_movie(request).await?.into_inner().applied())
        })
        .await
    }
}

fn timed_request<T>(message: T, deadline: Duration) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request.set_timeout(deadline);
    request
}

async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    tokio::time::timeout(deadline, call)
        .await
        .map_err(|_| ClientError::DeadlineExceeded(deadline))?
}
