//! Person storage backed by PostgreSQL.

use crate::domain::{Filter, NewPerson, Person};
use crate::storage::query::{from_filter, SqlArg};
use crate::storage::{PersonRepository, RepoError};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const SELECT_PEOPLE: &str =
    "SELECT id, name, surname, age, gender, nationality, created_at, updated_at FROM people";

/// A person repository that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `database_url` and makes sure the `people` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS people (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                surname TEXT NOT NULL,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                nationality TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn create(&self, person: NewPerson) -> Result<Person, RepoError> {
        let created = sqlx::query_as::<_, Person>(
            "INSERT INTO people (name, surname, age, gender, nationality)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, surname, age, gender, nationality, created_at, updated_at",
        )
        .bind(&person.name)
        .bind(&person.surname)
        .bind(person.age)
        .bind(&person.gender)
        .bind(&person.nationality)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Person, RepoError> {
        let sql = format!("{SELECT_PEOPLE} WHERE id = $1");
        sqlx::query_as::<_, Person>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(id))
    }

    async fn list(&self, filter: &Filter) -> Result<Vec<Person>, RepoError> {
        let fragment = from_filter(filter);
        let sql = format!("{SELECT_PEOPLE}{}", fragment.sql());
        tracing::debug!(sql = %sql, params = fragment.args().len(), "listing people");

        let mut query = sqlx::query_as::<_, Person>(&sql);
        for arg in fragment.args() {
            query = match arg {
                SqlArg::Text(value) => query.bind(value.as_str()),
                SqlArg::Int(value) => query.bind(*value),
            };
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn update(&self, person: &Person) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE people
             SET name = $1, surname = $2, age = $3, gender = $4, nationality = $5, updated_at = $6
             WHERE id = $7",
        )
        .bind(&person.name)
        .bind(&person.surname)
        .bind(person.age)
        .bind(&person.gender)
        .bind(&person.nationality)
        .bind(person.updated_at)
        .bind(person.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(person.id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
