//! HTTP implementation of [`ItemRepository`] over the JSON transport.

use crate::models::{Category, Item, ItemDraft};
use crate::repository::{ItemRepository, RepositoryError};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Repository client speaking to a stockroom-api server.
#[derive(Clone)]
pub struct HttpItemClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpItemClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "repository call failed");
            return Err(RepositoryError::Server {
                status: status.as_u16(),
                message,
            });
        }
        response.json().await.map_err(|err| {
            warn!("repository response body was not valid JSON: {}", err);
            RepositoryError::Server {
                status: status.as_u16(),
                message: format!("invalid response body: {}", err),
            }
        })
    }

    fn transport(err: reqwest::Error) -> RepositoryError {
        warn!("repository transport failure: {}", err);
        RepositoryError::Network(err.to_string())
    }
}

#[async_trait]
impl ItemRepository for HttpItemClient {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let response = self
            .http
            .get(self.url("/api/items"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(response).await
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let response = self
            .http
            .post(self.url("/api/items"))
            .json(&draft)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(response).await
    }

    async fn update(&self, id: i64, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let response = self
            .http
            .put(self.url(&format!("/api/items/{}", id)))
            .json(&draft)
            .send()
            .await
            .map_err(Self::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!(item_id = id, "update target missing");
            return Err(RepositoryError::NotFound(id));
        }
        Self::read_json(response).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let response = self
            .http
            .get(self.url("/api/categories"))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::read_json(response).await
    }
}
