//! Person use cases: enrichment on create, filtered listing, partial updates.

use crate::domain::{CreatePersonRequest, Filter, NewPerson, Person, UpdatePersonRequest};
use crate::infra::enrich::{EnrichError, Enricher};
use crate::storage::{PersonRepository, RepoError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("person {0} not found")]
    NotFound(i64),
    #[error("enrichment failed: {0}")]
    Enrichment(#[from] EnrichError),
    #[error(transparent)]
    Storage(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
    enricher: Arc<dyn Enricher>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>, enricher: Arc<dyn Enricher>) -> Self {
        Self { repo, enricher }
    }

    /// Looks up age, gender and nationality for the name, then stores the person.
    pub async fn create_person(&self, req: CreatePersonRequest) -> Result<Person, ServiceError> {
        let (age, gender, nationality) = tokio::try_join!(
            self.enricher.age(&req.name),
            self.enricher.gender(&req.name),
            self.enricher.nationality(&req.name),
        )?;

        let person = self
            .repo
            .create(NewPerson {
                name: req.name,
                surname: req.surname,
                age,
                gender,
                nationality,
            })
            .await?;
        tracing::info!(id = person.id, "person created");
        Ok(person)
    }

    pub async fn list_people(&self, filter: &Filter) -> Result<Vec<Person>, ServiceError> {
        Ok(self.repo.list(filter).await?)
    }

    pub async fn get_person(&self, id: i64) -> Result<Person, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn update_person(
        &self,
        id: i64,
        req: &UpdatePersonRequest,
    ) -> Result<Person, ServiceError> {
        let mut person = self.repo.get_by_id(id).await?;
        req.apply_to(&mut person, Utc::now());
        tracing::debug!(?person, "person on update");
        self.repo.update(&person).await?;
        Ok(person)
    }

    pub async fn delete_person(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "person deleted");
        Ok(())
    }

    /// Storage round trip for readiness checks.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.repo.ping().await?)
    }
}
