//! Server crate for the movie catalogue.
//!
//! This crate contains the gRPC service over the in-memory movie store and
//! the bootstrap that binds and serves it.

pub mod config;
pub mod server;
pub mod service;

pub use config::{IdStrategy, NotFoundPolicy, ServerConfig, DEFAULT_LISTEN_ADDR};
pub use server::{run_server, serve, shutdown_signal};
pub use service::MovieServiceImpl;
