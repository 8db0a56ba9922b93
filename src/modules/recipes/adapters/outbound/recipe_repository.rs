// Port for recipe persistence.
//
// Responsibilities
// - list/create/update/delete by numeric id; the store assigns ids.
//
// Boundaries
// - Adapters implement this trait: SQLite for the server, a JSON file for local
//   use, an HTTP client against the REST API, and an in-memory store for tests.

use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::shared::core::primitives::RecipeId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("recipe {id} not found")]
    NotFound { id: RecipeId },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Backend(err.to_string())
    }
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RecipeRecord>, RepositoryError>;
    async fn create(&self, fields: RecipeFields) -> Result<RecipeRecord, RepositoryError>;
    /// Full replace of every field.
    async fn update(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, RepositoryError>;
    /// Number of removed records, 0 or 1.
    async fn delete(&self, id: RecipeId) -> Result<u64, RepositoryError>;
}
