// In memory implementation of the RecipeRepository port.
//
// Purpose
// - Support handler and session tests and local development without a database.
//
// Responsibilities
// - Keep records ordered by id and assign ids from an incrementing counter.
// - Simulate an offline store and slow responses on demand.

use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::shared::core::primitives::RecipeId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    next_id: RecipeId,
    records: BTreeMap<RecipeId, RecipeFields>,
}

#[derive(Default)]
pub struct InMemoryRecipeStore {
    rows: RwLock<Rows>,
    is_offline: bool,
    delay_ms: u64,
    update_calls: AtomicUsize,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Number of `update` calls received, successful or not.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    async fn simulate(&self) -> Result<(), RepositoryError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.is_offline {
            return Err(RepositoryError::Unavailable(
                "Recipe store offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeStore {
    async fn list(&self) -> Result<Vec<RecipeRecord>, RepositoryError> {
        self.simulate().await?;
        let guard = self.rows.read().await;
        Ok(guard
            .records
            .iter()
            .map(|(id, fields)| RecipeRecord::new(*id, fields.clone()))
            .collect())
    }

    async fn create(&self, fields: RecipeFields) -> Result<RecipeRecord, RepositoryError> {
        self.simulate().await?;
        let fields = fields.normalized();
        let mut guard = self.rows.write().await;
        guard.next_id += 1;
        let id = guard.next_id;
        guard.records.insert(id, fields.clone());
        Ok(RecipeRecord::new(id, fields))
    }

    async fn update(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate().await?;
        let fields = fields.normalized();
        let mut guard = self.rows.write().await;
        match guard.records.get_mut(&id) {
            Some(slot) => {
                *slot = fields.clone();
                Ok(RecipeRecord::new(id, fields))
            }
            None => Err(RepositoryError::NotFound { id }),
        }
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, RepositoryError> {
        self.simulate().await?;
        let mut guard = self.rows.write().await;
        Ok(u64::from(guard.records.remove(&id).is_some()))
    }
}
