//! Boundary to the Hortina REST backend
//!
//! The backend is treated as a black box returning records from
//! [`crate::model`]. [`HortinaApi`] is the seam repositories depend on;
//! [`HttpHortinaApi`] is the reqwest implementation.

use crate::model::{Crop, CropDetail, PlantProfile, Task};
use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

#[async_trait]
pub trait HortinaApi: Send + Sync {
    async fn crops(&self) -> MtResult<Vec<Crop>>;

    async fn crop(&self, id: i32) -> MtResult<Crop>;

    async fn crop_detail(&self, id: i32) -> MtResult<CropDetail>;

    async fn tasks(&self) -> MtResult<Vec<Task>>;

    async fn tasks_for_crop(&self, crop_id: i32) -> MtResult<Vec<Task>>;

    async fn search_plants(&self, query: &str) -> MtResult<Vec<PlantProfile>>;

    /// Plant care sheet by catalogue id
    async fn plant(&self, external_id: i32) -> MtResult<PlantProfile>;
}

#[derive(Clone)]
pub struct HttpHortinaApi {
    client: reqwest::Client,
    base_url: String,
    /// JWT sent as `Authorization: Bearer`
    access_token: Option<String>,
}

impl HttpHortinaApi {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> MtResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(MtError::ConfigError("API base URL cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> MtResult<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::ApiError(format!(
                "GET {} failed ({}): {}",
                path, status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MtError::ApiError(format!("Invalid response from {}: {}", path, e)))
    }
}

impl std::fmt::Debug for HttpHortinaApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpHortinaApi")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl HortinaApi for HttpHortinaApi {
    async fn crops(&self) -> MtResult<Vec<Crop>> {
        self.get("api/cultivos", &[]).await
    }

    async fn crop(&self, id: i32) -> MtResult<Crop> {
        self.get(&format!("api/cultivos/{}", id), &[]).await
    }

    async fn crop_detail(&self, id: i32) -> MtResult<CropDetail> {
        self.get(&format!("api/cultivos/{}/detalle", id), &[]).await
    }

    async fn tasks(&self) -> MtResult<Vec<Task>> {
        self.get("api/tareas", &[]).await
    }

    async fn tasks_for_crop(&self, crop_id: i32) -> MtResult<Vec<Task>> {
        self.get(&format!("api/tareas/cultivo/{}", crop_id), &[])
            .await
    }

    async fn search_plants(&self, query: &str) -> MtResult<Vec<PlantProfile>> {
        self.get("api/plants/search", &[("query", query)]).await
    }

    async fn plant(&self, external_id: i32) -> MtResult<PlantProfile> {
        self.get(&format!("api/plants/{}", external_id), &[]).await
    }
}
