//! Persistence for person records.

pub mod postgres;
pub mod query;

use crate::domain::{Filter, NewPerson, Person};
use async_trait::async_trait;
use thiserror::Error;

pub use postgres::PgPersonRepository;
pub use query::{from_filter, ClauseBuilder, QueryFragment, SqlArg};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("person {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract used by the service layer.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create(&self, person: NewPerson) -> Result<Person, RepoError>;

    async fn get_by_id(&self, id: i64) -> Result<Person, RepoError>;

    /// Rows matching every constraint in `filter`, paginated by its limit/offset.
    async fn list(&self, filter: &Filter) -> Result<Vec<Person>, RepoError>;

    async fn update(&self, person: &Person) -> Result<(), RepoError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), RepoError>;
}
