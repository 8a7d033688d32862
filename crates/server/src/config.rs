//! Server configuration.

use std::net::SocketAddr;

use clap::ValueEnum;
use movie_store::{MovieStore, RandomIds, SequentialIds};

/// Default listen address of the movie server.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:50051";

/// How GetMovie / UpdateMovie / DeleteMovie report an unknown id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NotFoundPolicy {
    /// Empty record for GetMovie, status 0 for UpdateMovie / DeleteMovie.
    #[default]
    Legacy,
    /// `NOT_FOUND` gRPC status.
    Status,
}

/// Where created movies get their ids from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    /// Random number below 100000, redrawn on collision.
    #[default]
    Random,
    /// Increasing counter starting at 1.
    Sequential,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub not_found: NotFoundPolicy,
    pub ids: IdStrategy,
    /// Start with the three seed movies.
    pub seed: bool,
}

impl ServerConfig {
    /// Build the store this configuration describes.
    pub fn build_store(&self) -> MovieStore {
        let store = match self.ids {
            IdStrategy::Random => MovieStore::with_id_source(RandomIds::new()),
            IdStrategy::Sequential => MovieStore::with_id_source(SequentialIds::default()),
        };
        if self.seed {
            store.seeded()
        } else {
            store
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 50051)),
            not_found: NotFoundPolicy::default(),
            ids: IdStrategy::default(),
            seed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.not_found, NotFoundPolicy::Legacy);
        assert_eq!(config.ids, IdStrategy::Random);
        assert!(config.seed);
    }

    #[test]
    fn test_build_store_honours_seed_and_ids() {
        let config = ServerConfig {
            ids: IdStrategy::Sequential,
            seed: false,
            ..Default::default()
        };
        let store = config.build_store();

        assert!(store.is_empty());
        assert_eq!(store.id_source_name(), "sequential");
        assert_eq!(ServerConfig::default().build_store().len(), 3);
    }
}
