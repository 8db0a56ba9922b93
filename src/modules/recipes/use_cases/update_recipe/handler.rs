use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::core::mapping::to_ui;
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::modules::recipes::core::validation::validate;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::RecipeId;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Full replace: every field of the record takes the value in `fields`.
    pub async fn handle(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, ApplicationError> {
        if let Err(e) = validate(&to_ui(&RecipeRecord::new(id, fields.clone()))) {
            warn!(recipe_id = id, error = %e, "rejected recipe update");
            return Err(e.into());
        }
        let record = self.repository.update(id, fields).await?;
        info!(recipe_id = id, "recipe updated");
        Ok(record)
    }
}
