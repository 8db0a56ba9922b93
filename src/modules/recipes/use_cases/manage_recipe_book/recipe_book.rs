// Client-side application state for the recipe list.
//
// Responsibilities
// - Hold the loaded collection in UI shape, a loading flag and the last surfaced error.
// - Confirm every store write before touching local state.
// - Allow one store operation at a time; overlapping calls are refused with `Busy`.
//
// Boundaries
// - Works against any RecipeRepository (HTTP client, JSON file, in memory).

use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::filter::RecipeFilter;
use crate::modules::recipes::core::mapping::{to_storage, to_ui};
use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::core::validation::{ValidationError, validate};
use crate::shared::core::primitives::RecipeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const LOAD_FAILED: &str = "failed to load recipes";
const CREATE_FAILED: &str = "failed to create recipe";
const UPDATE_FAILED: &str = "failed to update recipe";
const DELETE_FAILED: &str = "failed to delete recipe";

#[derive(Debug, Error)]
pub enum BookError {
    #[error("another recipe operation is in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("recipe {id} is not loaded")]
    UnknownRecipe { id: RecipeId },

    #[error("recipe has not been saved yet")]
    Unsaved,

    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

/// What the brewing screen is opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewStart {
    pub recipe: Recipe,
    pub method: BrewMethod,
}

#[derive(Default)]
struct BookState {
    recipes: Vec<Recipe>,
    loading: bool,
    last_error: Option<String>,
}

pub struct RecipeBook<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    repository: Arc<TRepository>,
    state: RwLock<BookState>,
    in_flight: AtomicBool,
}

// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<TRepository> RecipeBook<TRepository>
where
    TRepository: RecipeRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(BookState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn recipes(&self) -> Vec<Recipe> {
        self.state.read().await.recipes.clone()
    }

    pub async fn recipe(&self, id: RecipeId) -> Option<Recipe> {
        self.state
            .read()
            .await
            .recipes
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    /// Recipes passing `filter`, in collection order.
    pub async fn visible(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        self.state
            .read()
            .await
            .recipes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    fn begin(&self) -> Result<InFlight<'_>, BookError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("recipe operation refused, another one is pending");
            return Err(BookError::Busy);
        }
        Ok(InFlight(&self.in_flight))
    }

    async fn fail(&self, message: &'static str, source: RepositoryError) -> BookError {
        warn!(error = %source, "{message}");
        self.state.write().await.last_error = Some(message.to_string());
        BookError::Store { message, source }
    }

    pub async fn refresh(&self) -> Result<(), BookError> {
        let _gate = self.begin()?;
        self.state.write().await.loading = true;
        let result = self.repository.list().await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(records) => {
                state.recipes = records.iter().map(to_ui).collect();
                state.last_error = None;
                debug!(count = state.recipes.len(), "recipes loaded");
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "{LOAD_FAILED}");
                state.last_error = Some(LOAD_FAILED.to_string());
                Err(BookError::Store {
                    message: LOAD_FAILED,
                    source,
                })
            }
        }
    }

    pub async fn create(&self, recipe: Recipe) -> Result<Recipe, BookError> {
        validate(&recipe)?;
        let _gate = self.begin()?;
        match self.repository.create(to_storage(&recipe)).await {
            Ok(record) => {
                let created = to_ui(&record);
                let mut state = self.state.write().await;
                state.recipes.push(created.clone());
                state.last_error = None;
                info!(recipe_id = record.id, "recipe added to book");
                Ok(created)
            }
            Err(source) => Err(self.fail(CREATE_FAILED, source).await),
        }
    }

    pub async fn update(&self, recipe: Recipe) -> Result<Recipe, BookError> {
        validate(&recipe)?;
        let _gate = self.begin()?;
        self.persist(recipe).await
    }

    pub async fn delete(&self, id: RecipeId) -> Result<u64, BookError> {
        let _gate = self.begin()?;
        match self.repository.delete(id).await {
            Ok(deleted) => {
                let mut state = self.state.write().await;
                state.recipes.retain(|r| r.id != Some(id));
                state.last_error = None;
                Ok(deleted)
            }
            Err(source) => Err(self.fail(DELETE_FAILED, source).await),
        }
    }

    pub async fn toggle_archived(&self, id: RecipeId) -> Result<Recipe, BookError> {
        let mut recipe = self
            .recipe(id)
            .await
            .ok_or(BookError::UnknownRecipe { id })?;
        recipe.is_archived = !recipe.is_archived;
        let _gate = self.begin()?;
        self.persist(recipe).await
    }

    /// Bumps the brew counter and hands back the recipe to brew with.
    ///
    /// The increment is best-effort: if the store refuses it, the session still
    /// opens with the recipe as it was.
    pub async fn start_brew(
        &self,
        id: RecipeId,
        method_override: Option<BrewMethod>,
    ) -> Result<BrewStart, BookError> {
        let current = self
            .recipe(id)
            .await
            .ok_or(BookError::UnknownRecipe { id })?;
        let method = BrewMethod::effective(method_override, current.brew_method);
        let _gate = self.begin()?;

        let mut incremented = current.clone();
        incremented.brew_count = incremented.brew_count.saturating_add(1);
        let recipe = match self.repository.update(id, to_storage(&incremented)).await {
            Ok(record) => {
                let stored = to_ui(&record);
                self.replace_local(stored.clone()).await;
                stored
            }
            Err(e) => {
                warn!(
                    recipe_id = id,
                    error = %e,
                    "brew count not updated, brewing with the loaded recipe"
                );
                current
            }
        };
        info!(recipe_id = id, method = %method, "brew started");
        Ok(BrewStart { recipe, method })
    }

    /// Takes in a recipe that was written to the store elsewhere, e.g. by a rating save.
    pub async fn accept_saved(&self, recipe: Recipe) {
        self.replace_local(recipe).await;
    }

    async fn persist(&self, recipe: Recipe) -> Result<Recipe, BookError> {
        let id = recipe.id.ok_or(BookError::Unsaved)?;
        match self.repository.update(id, to_storage(&recipe)).await {
            Ok(record) => {
                let stored = to_ui(&record);
                self.replace_local(stored.clone()).await;
                self.state.write().await.last_error = None;
                Ok(stored)
            }
            Err(source) => Err(self.fail(UPDATE_FAILED, source).await),
        }
    }

    async fn replace_local(&self, recipe: Recipe) {
        let mut state = self.state.write().await;
        match state.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => *slot = recipe,
            None => state.recipes.push(recipe),
        }
    }
}

#[cfg(test)]
mod recipe_book_tests {
    use super::*;
    use crate::modules::recipes::adapters::outbound::in_memory::InMemoryRecipeStore;
    use crate::modules::recipes::core::filter::Category;
    use crate::tests::fixtures::recipes::{RecipeBuilder, recipe_record_fixture};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryRecipeStore {
        InMemoryRecipeStore::new()
    }

    async fn loaded_book(store: InMemoryRecipeStore) -> RecipeBook<InMemoryRecipeStore> {
        store.create(recipe_record_fixture().fields).await.unwrap();
        let book = RecipeBook::new(Arc::new(store));
        book.refresh().await.unwrap();
        book
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_recipes_in_ui_shape(store: InMemoryRecipeStore) {
        let book = loaded_book(store).await;
        let recipes = book.recipes().await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, Some(1));
        assert_eq!(recipes[0].bean_name, "Yirgacheffe");
        assert!(!book.is_loading().await);
        assert_eq!(book.last_error().await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_a_generic_message_when_loading_fails() {
        let mut store = InMemoryRecipeStore::new();
        store.toggle_offline();
        let book = RecipeBook::new(Arc::new(store));

        let result = book.refresh().await;

        assert!(matches!(result, Err(BookError::Store { message: LOAD_FAILED, .. })));
        assert_eq!(book.last_error().await.as_deref(), Some("failed to load recipes"));
        assert!(!book.is_loading().await);
        assert!(book.recipes().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_validate_before_calling_the_store(store: InMemoryRecipeStore) {
        let store = Arc::new(store);
        let book = RecipeBook::new(store.clone());

        let result = book.create(RecipeBuilder::new().bean_name(" ").build()).await;

        assert!(matches!(
            result,
            Err(BookError::Validation(ValidationError::MissingName))
        ));
        assert!(store.list().await.unwrap().is_empty());
        assert!(book.recipes().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_add_created_recipes_with_their_store_id(store: InMemoryRecipeStore) {
        let book = RecipeBook::new(Arc::new(store));
        let created = book.create(RecipeBuilder::new().build()).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(book.recipes().await, vec![created]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_operation_while_one_is_pending() {
        let mut store = InMemoryRecipeStore::new();
        store.set_delay_ms(50);
        let book = RecipeBook::new(Arc::new(store));

        let (first, second) = tokio::join!(
            book.create(RecipeBuilder::new().build()),
            book.create(RecipeBuilder::new().bean_name("Sidamo").build()),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(BookError::Busy)));
        assert_eq!(book.recipes().await.len(), 1);

        // The gate opens again once the first call settles.
        assert!(book.refresh().await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_toggle_the_archived_flag(store: InMemoryRecipeStore) {
        let book = loaded_book(store).await;

        let archived = book.toggle_archived(1).await.unwrap();
        assert!(archived.is_archived);

        let filter = RecipeFilter::default();
        assert!(book.visible(&filter).await.is_empty());

        let filter = RecipeFilter {
            show_archived: true,
            category: Category::Filter,
            ..RecipeFilter::default()
        };
        assert_eq!(book.visible(&filter).await, vec![archived]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_deleted_recipes(store: InMemoryRecipeStore) {
        let book = loaded_book(store).await;
        assert_eq!(book.delete(1).await.unwrap(), 1);
        assert!(book.recipes().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_increment_the_brew_count_when_a_brew_starts(store: InMemoryRecipeStore) {
        let book = loaded_book(store).await;

        let start = book.start_brew(1, Some(BrewMethod::Filter)).await.unwrap();

        assert_eq!(start.method, BrewMethod::Filter);
        assert_eq!(start.recipe.brew_count, 4);
        assert_eq!(book.recipe(1).await.unwrap().brew_count, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_brew_with_the_loaded_recipe_when_the_increment_fails() {
        let store = InMemoryRecipeStore::new();
        store.create(recipe_record_fixture().fields).await.unwrap();
        let mut store = store;
        // Load first, then take the store offline for the increment.
        let records = store.list().await.unwrap();
        store.toggle_offline();
        let book = RecipeBook::new(Arc::new(store));
        for record in &records {
            book.accept_saved(to_ui(record)).await;
        }

        let start = book.start_brew(1, None).await.unwrap();

        assert_eq!(start.method, BrewMethod::Espresso);
        assert_eq!(start.recipe.brew_count, 3);
        assert_eq!(book.last_error().await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_unknown_and_unsaved_recipes(store: InMemoryRecipeStore) {
        let book = RecipeBook::new(Arc::new(store));
        assert!(matches!(
            book.start_brew(8, None).await,
            Err(BookError::UnknownRecipe { id: 8 })
        ));
        assert!(matches!(
            book.update(RecipeBuilder::new().build()).await,
            Err(BookError::Unsaved)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_a_generic_message_when_an_update_fails() {
        let store = InMemoryRecipeStore::new();
        store.create(recipe_record_fixture().fields).await.unwrap();
        let records = store.list().await.unwrap();
        let mut store = store;
        store.toggle_offline();
        let book = RecipeBook::new(Arc::new(store));
        book.accept_saved(to_ui(&records[0])).await;

        let mut edited = book.recipe(1).await.unwrap();
        edited.bean_name = "Renamed".to_string();
        let result = book.update(edited).await;

        assert!(matches!(result, Err(BookError::Store { message: UPDATE_FAILED, .. })));
        assert_eq!(book.last_error().await.as_deref(), Some("failed to update recipe"));
        assert_eq!(book.recipe(1).await.unwrap().bean_name, "Yirgacheffe");
    }
}
