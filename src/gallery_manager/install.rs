// model-gallery/src/gallery_manager/install.rs

use async_trait::async_trait;
use log::{error, info};
use serde::Serialize;
use std::time::Duration;

use super::events::InstallDispatchedPayload;
use super::gallery::ModelGallery;
use super::types::{CivitModel, CivitModelFileVersion};

/// Default base URL of the local installer service.
pub const DEFAULT_INSTALLER_BASE: &str = "http://127.0.0.1:8188";

const INSTALL_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire payload for one install request. The installer expects snake_case
/// field names, so this struct is serialized as-is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InstallModelsApiInput {
    pub filename: String,
    pub name: String,
    pub save_path: String,
    pub url: String,
}

/// Seam to the external installer service.
#[async_trait]
pub trait InstallerApi: Send + Sync {
    async fn install_model(&self, input: &InstallModelsApiInput) -> Result<(), String>;
}

/// HTTP client for the installer's `/install_model` endpoint.
pub struct HttpInstallerApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInstallerApi {
    pub fn new() -> Result<Self, String> {
        Self::with_base_url(DEFAULT_INSTALLER_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent("ModelGallery/0.1")
            .timeout(INSTALL_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build installer HTTP client: {}", e))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl InstallerApi for HttpInstallerApi {
    async fn install_model(&self, input: &InstallModelsApiInput) -> Result<(), String> {
        let url = format!("{}/install_model", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| format!("Install request failed: {}", e))?;
        if !response.status().is_success() {
            return Err(format!(
                "Installer returned HTTP {} for {}",
                response.status(),
                input.filename
            ));
        }
        Ok(())
    }
}

impl ModelGallery {
    /// Handle a click on one downloadable file of a catalog model: resolve
    /// the destination folder for the model's type (prompting the user when
    /// no mapping exists) and hand the download off to the installer. Fire
    /// and forget: repeated clicks dispatch repeated, independent requests.
    pub async fn on_click_install_model(&self, file: &CivitModelFileVersion, model: &CivitModel) {
        let (Some(url), Some(filename)) = (file.download_url.as_ref(), file.name.as_ref()) else {
            error!(
                "Cannot install from model '{}': file entry has no name or download URL",
                model.name
            );
            return;
        };

        let Some(save_path) = self.resolve_folder(model.model_type).await else {
            info!(
                "Install of '{}' cancelled: no destination folder for type {:?}",
                model.name, model.model_type
            );
            return;
        };

        let input = InstallModelsApiInput {
            filename: filename.clone(),
            name: model.name.clone(),
            save_path,
            url: url.clone(),
        };
        self.dispatch_install(&model.name, input).await;
    }

    pub(super) async fn dispatch_install(&self, model_name: &str, input: InstallModelsApiInput) {
        info!(
            "Dispatching install of '{}' ({}) to {}",
            model_name, input.filename, input.save_path
        );
        match self.installer.install_model(&input).await {
            Ok(()) => {
                self.events.install_dispatched(InstallDispatchedPayload {
                    model_name: model_name.to_string(),
                    filename: input.filename,
                    save_path: input.save_path,
                });
            }
            Err(e) => {
                error!("Install dispatch for '{}' failed: {}", model_name, e);
            }
        }
    }
}
