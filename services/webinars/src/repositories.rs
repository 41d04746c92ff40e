//! Repositories for webinar persistence
//!
//! The use cases only see the [`WebinarRepository`] trait; storage lives in
//! the implementations below.

use async_trait::async_trait;
use common::error::DatabaseError;
use thiserror::Error;

use crate::models::Webinar;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryWebinarRepository;
pub use postgres::PgWebinarRepository;

/// Errors raised by webinar repositories
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Storage backend failure
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// An update targeted a webinar that is not stored
    #[error("No webinar stored with id {0}")]
    Missing(String),

    /// The repository cannot serve requests
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Type alias for repository results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Fetch and persist webinars by id
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Find a webinar by id; a missing webinar is `Ok(None)`
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Webinar>>;

    /// Persist the full state of an already stored webinar
    async fn update(&self, webinar: &Webinar) -> RepositoryResult<()>;
}
