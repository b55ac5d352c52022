// model-gallery/src/gallery_manager/query.rs

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use std::time::Duration;

use super::types::{CivitModel, CivitModelsResponse, ModelType};

pub const CIVITAI_API_BASE: &str = "https://civitai.com/api/v1";
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

const CATALOG_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const CATALOG_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query-string parameters for one catalog request. Built fresh per query;
/// `query` is present only when the trimmed search text is non-empty, and
/// `types` only when a specific type filter is active.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CivitModelQueryParams {
    pub limit: String,
    pub nsfw: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<ModelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl CivitModelQueryParams {
    pub fn new(limit: u32, types: Option<ModelType>, query: &str) -> Self {
        Self {
            limit: limit.to_string(),
            nsfw: "false",
            types,
            query: if query.trim().is_empty() {
                None
            } else {
                Some(query.to_string())
            },
        }
    }
}

/// Outbound seam to the model catalog endpoint.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_models(
        &self,
        params: &CivitModelQueryParams,
    ) -> Result<Vec<CivitModel>, String>;
}

/// Catalog client against a Civitai-compatible `GET {base}/models` endpoint.
pub struct CivitaiApi {
    client: reqwest::Client,
    base_url: String,
}

impl CivitaiApi {
    pub fn new() -> Result<Self, String> {
        Self::with_base_url(CIVITAI_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent("ModelGallery/0.1")
            .connect_timeout(CATALOG_CONNECT_TIMEOUT)
            .timeout(CATALOG_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogApi for CivitaiApi {
    async fn fetch_models(
        &self,
        params: &CivitModelQueryParams,
    ) -> Result<Vec<CivitModel>, String> {
        let url = format!("{}/models", self.base_url);
        debug!("Catalog request to {} with params {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| format!("Catalog request to {} failed: {}", url, e))?;

        if !response.status().is_success() {
            return Err(format!("Catalog query failed: HTTP {}", response.status()));
        }

        let body: CivitModelsResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to decode catalog response: {}", e))?;
        Ok(body.items)
    }
}
