use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::core::mapping::to_ui;
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::modules::recipes::core::validation::validate;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct CreateRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateRecipeHandler<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, fields: RecipeFields) -> Result<RecipeRecord, ApplicationError> {
        // The store assigns the id; 0 only stands in for validation.
        if let Err(e) = validate(&to_ui(&RecipeRecord::new(0, fields.clone()))) {
            warn!(error = %e, "rejected recipe creation");
            return Err(e.into());
        }
        let record = self.repository.create(fields).await?;
        info!(recipe_id = record.id, bean_name = %record.fields.bean_name, "recipe created");
        Ok(record)
    }
}
