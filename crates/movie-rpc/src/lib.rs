//! gRPC contract and client for the movie service.
//!
//! This crate owns `proto/movies.proto`. It provides:
//! - The generated messages and client/server stubs (`movies`)
//! - Conversions between wire messages and `movie_store` records
//! - `MovieClient`, a typed client that applies a per-call deadline

// Include the generated protobuf code
pub mod movies {
    tonic::include_proto!("movies");
}

pub mod client;
pub mod convert;
pub mod error;

pub use client::{MovieClient, DEFAULT_DEADLINE, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use movies::{Director, Empty, MovieId, MovieInfo, MutationStatus};
