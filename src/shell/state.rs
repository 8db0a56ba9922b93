use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::use_cases::create_recipe::handler::CreateRecipeHandler;
use crate::modules::recipes::use_cases::delete_recipe::handler::DeleteRecipeHandler;
use crate::modules::recipes::use_cases::list_recipes::handler::ListRecipesHandler;
use crate::modules::recipes::use_cases::update_recipe::handler::UpdateRecipeHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListRecipesHandler<dyn RecipeRepository>>,
    pub create_handler: Arc<CreateRecipeHandler<dyn RecipeRepository>>,
    pub update_handler: Arc<UpdateRecipeHandler<dyn RecipeRepository>>,
    pub delete_handler: Arc<DeleteRecipeHandler<dyn RecipeRepository>>,
}

impl AppState {
    /// Wires every recipe use case to the same store.
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self {
            list_handler: Arc::new(ListRecipesHandler::new(repository.clone())),
            create_handler: Arc::new(CreateRecipeHandler::new(repository.clone())),
            update_handler: Arc::new(UpdateRecipeHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteRecipeHandler::new(repository)),
        }
    }
}
