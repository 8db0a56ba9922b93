use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::RecipeId;
use std::sync::Arc;
use tracing::info;

pub struct DeleteRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Returns the number of removed records. Deleting an unknown id is not an error.
    pub async fn handle(&self, id: RecipeId) -> Result<u64, ApplicationError> {
        let deleted = self.repository.delete(id).await?;
        info!(recipe_id = id, deleted, "recipe delete handled");
        Ok(deleted)
    }
}
