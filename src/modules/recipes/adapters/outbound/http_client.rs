// Networked implementation of the RecipeRepository port, speaking the REST API.
//
// Boundaries
// - No retries. A non-2xx answer becomes `Rejected` carrying the body's `error`
//   message when one is present.

use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::shared::core::primitives::RecipeId;
use crate::shared::infrastructure::http_error::ErrorBody;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct DeletedBody {
    deleted: u64,
}

pub struct HttpRecipeStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeStore {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn item_url(&self, id: RecipeId) -> String {
        format!("{}/api/recipes/{id}", self.base_url)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        return Err(RepositoryError::Rejected {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|e| RepositoryError::Backend(format!("unexpected response body: {e}")))
}

fn unavailable(err: reqwest::Error) -> RepositoryError {
    RepositoryError::Unavailable(err.to_string())
}

#[async_trait]
impl RecipeRepository for HttpRecipeStore {
    async fn list(&self) -> Result<Vec<RecipeRecord>, RepositoryError> {
        let url = self.collection_url();
        debug!(url = %url, "fetching recipes");
        let response = self.client.get(url).send().await.map_err(unavailable)?;
        read_json(response).await
    }

    async fn create(&self, fields: RecipeFields) -> Result<RecipeRecord, RepositoryError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&fields)
            .send()
            .await
            .map_err(unavailable)?;
        read_json(response).await
    }

    async fn update(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, RepositoryError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&fields)
            .send()
            .await
            .map_err(unavailable)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound { id });
        }
        read_json(response).await
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, RepositoryError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(unavailable)?;
        let body: DeletedBody = read_json(response).await?;
        Ok(body.deleted)
    }
}
