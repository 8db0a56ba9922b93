use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::core::record::RecipeRecord;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListRecipesHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListRecipesHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<RecipeRecord>, ApplicationError> {
        Ok(self.repository.list().await?)
    }
}
