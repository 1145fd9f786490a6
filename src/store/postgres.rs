//! PostgreSQL implementation of [`RepoStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{GitRepo, RepoStore, StoreError};
use crate::config::DatabaseConfig;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS git_repos (\
     remote TEXT NOT NULL, \
     branch TEXT NOT NULL, \
     PRIMARY KEY (remote, branch))";

/// PostgreSQL-backed git repository store using `sqlx::PgPool`.
///
/// The pool is shared by every request; concurrency is left to the pool
/// and to the database. Uniqueness of `(remote, branch)` is enforced by the
/// table's primary key.
#[derive(Debug, Clone)]
pub struct PostgresRepoStore {
    pool: PgPool,
}

impl PostgresRepoStore {
    /// Opens a connection pool and verifies it with an initial connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the connection string is
    /// invalid, the server is unreachable, or authentication fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        tracing::debug!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "connecting to database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "unable to connect to database");
                StoreError::Connection(e)
            })?;

        Ok(Self::new(pool))
    }

    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `git_repos` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|source| StoreError::Query {
                context: "unable to create git_repos table".to_string(),
                source,
            })?;

        Ok(())
    }
}

/// Maps an insert failure to [`StoreError`], recognising unique violations.
fn insert_error(repo: &GitRepo, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err
        && db.is_unique_violation()
    {
        return StoreError::duplicate(repo);
    }
    StoreError::Query {
        context: format!("unable to create git repo {repo}"),
        source: err,
    }
}

#[async_trait]
impl RepoStore for PostgresRepoStore {
    async fn create(&self, repo: &GitRepo) -> Result<(), StoreError> {
        tracing::debug!(remote = %repo.remote, branch = %repo.branch, "creating git repo");

        sqlx::query("INSERT INTO git_repos (remote, branch) VALUES ($1, $2)")
            .bind(&repo.remote)
            .bind(&repo.branch)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, repo = %repo, "unable to create git repo");
                insert_error(repo, e)
            })?;

        Ok(())
    }

    async fn get(&self, remote: &str, branch: &str) -> Result<GitRepo, StoreError> {
        tracing::debug!(remote, branch, "getting git repo from postgres");

        let row = sqlx::query_as::<_, GitRepo>(
            "SELECT remote, branch FROM git_repos WHERE remote = $1 AND branch = $2",
        )
        .bind(remote)
        .bind(branch)
        .fetch_optional(&self.pool)
        .await
        .map_err(|source| {
            tracing::debug!(error = %source, remote, branch, "unable to query database");
            StoreError::Query {
                context: format!("unable to get git repo {remote}#{branch}"),
                source,
            }
        })?;

        row.ok_or_else(|| StoreError::not_found(remote, branch))
    }

    async fn list(&self) -> Result<Vec<GitRepo>, StoreError> {
        tracing::debug!("getting git repos from postgres");

        sqlx::query_as::<_, GitRepo>("SELECT remote, branch FROM git_repos")
            .fetch_all(&self.pool)
            .await
            .map_err(|source| {
                tracing::debug!(error = %source, "unable to query database");
                StoreError::Query {
                    context: "unable to list git repos".to_string(),
                    source,
                }
            })
    }
}
