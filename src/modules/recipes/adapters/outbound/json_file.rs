// Local-file implementation of the RecipeRepository port.
//
// Responsibilities
// - Keep the whole collection in a single pretty-printed JSON document.
// - Rewrite the document after every mutation: write a sibling temp file, then rename it
//   over the original so a reader never sees a half-written collection.
//
// Boundaries
// - One process owns the file. Writers in the same process are serialized by a mutex.

use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::shared::core::primitives::RecipeId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    next_id: RecipeId,
    recipes: Vec<RecipeRecord>,
}

pub struct JsonFileRecipeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<Document, RepositoryError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                RepositoryError::Backend(format!("corrupt recipe file: {e}"))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(RepositoryError::Unavailable(e.to_string())),
        }
    }

    async fn save(&self, document: &Document) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| RepositoryError::Backend(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
            }
        }
        let staging = self.staging_path();
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        debug!(path = %self.path.display(), count = document.recipes.len(), "recipe file written");
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for JsonFileRecipeStore {
    async fn list(&self) -> Result<Vec<RecipeRecord>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut recipes = self.load().await?.recipes;
        recipes.sort_by_key(|r| r.id);
        Ok(recipes)
    }

    async fn create(&self, fields: RecipeFields) -> Result<RecipeRecord, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let max_id = document.recipes.iter().map(|r| r.id).max().unwrap_or(0);
        document.next_id = document.next_id.max(max_id) + 1;
        let record = RecipeRecord::new(document.next_id, fields.normalized());
        document.recipes.push(record.clone());
        self.save(&document).await?;
        Ok(record)
    }

    async fn update(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let slot = document
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound { id })?;
        slot.fields = fields.normalized();
        let record = slot.clone();
        self.save(&document).await?;
        Ok(record)
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let before = document.recipes.len();
        document.recipes.retain(|r| r.id != id);
        let removed = (before - document.recipes.len()) as u64;
        if removed > 0 {
            self.save(&document).await?;
        }
        Ok(removed)
    }
}
