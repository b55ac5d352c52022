// model-gallery/src/gallery_manager/testing.rs
//
// Shared stubs and fixtures for the gallery_manager tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

use super::events::{GalleryEventSink, InstallDispatchedPayload, ModelsUpdatedPayload};
use super::folder_mapping::FolderPathPrompt;
use super::gallery::ModelGallery;
use super::install::{InstallModelsApiInput, InstallerApi};
use super::query::{CatalogApi, CivitModelQueryParams, DEFAULT_PAGE_LIMIT};
use super::types::{CivitModel, CivitModelFileVersion, ModelType};

pub fn model(id: u64, name: &str, model_type: ModelType) -> CivitModel {
    CivitModel {
        id,
        name: name.to_string(),
        model_type,
        model_versions: Vec::new(),
    }
}

pub fn file(name: Option<&str>, url: Option<&str>) -> CivitModelFileVersion {
    CivitModelFileVersion {
        name: name.map(str::to_string),
        download_url: url.map(str::to_string),
        size_kb: None,
        hashes: None,
    }
}

/// Catalog stub. Records every query; each call optionally waits the next
/// queued delay, then returns the next scripted result or a default
/// one-model page named after the requested type filter.
pub struct StubCatalog {
    pub calls: Mutex<Vec<CivitModelQueryParams>>,
    delays: Mutex<VecDeque<Duration>>,
    scripted: Mutex<VecDeque<Result<Vec<CivitModel>, String>>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::with_delays(Vec::new())
    }

    pub fn with_delays(delays: Vec<Duration>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            delays: Mutex::new(delays.into()),
            scripted: Mutex::new(VecDeque::new()),
        }
    }

    pub fn script(&self, result: Result<Vec<CivitModel>, String>) {
        self.scripted.lock().unwrap().push_back(result);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn fetch_models(&self, params: &CivitModelQueryParams) -> Result<Vec<CivitModel>, String> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(params.clone());
            calls.len()
        };
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        if let Some(scripted) = self.scripted.lock().unwrap().pop_front() {
            return scripted;
        }
        let label = match params.types {
            Some(t) => format!("{:?} result {}", t, index),
            None => format!("All result {}", index),
        };
        Ok(vec![model(1, &label, params.types.unwrap_or(ModelType::Checkpoint))])
    }
}

pub struct CountingInstaller {
    pub calls: Mutex<Vec<InstallModelsApiInput>>,
}

impl CountingInstaller {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InstallerApi for CountingInstaller {
    async fn install_model(&self, input: &InstallModelsApiInput) -> Result<(), String> {
        self.calls.lock().unwrap().push(input.clone());
        Ok(())
    }
}

pub struct StubPrompt {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubPrompt {
    pub fn replying(folder: &str) -> Self {
        Self {
            reply: Some(folder.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn declining() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FolderPathPrompt for StubPrompt {
    async fn prompt_folder_path(&self, _model_type: ModelType) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub struct RecordingSink {
    pub loading_events: Mutex<Vec<bool>>,
    pub update_counts: Mutex<Vec<usize>>,
    pub installs: Mutex<Vec<InstallDispatchedPayload>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            loading_events: Mutex::new(Vec::new()),
            update_counts: Mutex::new(Vec::new()),
            installs: Mutex::new(Vec::new()),
        }
    }
}

impl GalleryEventSink for RecordingSink {
    fn models_updated(&self, payload: ModelsUpdatedPayload) {
        self.update_counts.lock().unwrap().push(payload.model_count);
    }

    fn loading_changed(&self, loading: bool) {
        self.loading_events.lock().unwrap().push(loading);
    }

    fn install_dispatched(&self, payload: InstallDispatchedPayload) {
        self.installs.lock().unwrap().push(payload);
    }
}

pub fn gallery_with(
    catalog: Arc<dyn CatalogApi>,
    installer: Arc<dyn InstallerApi>,
    prompt: Arc<dyn FolderPathPrompt>,
) -> Arc<ModelGallery> {
    gallery_with_sink(
        catalog,
        installer,
        prompt,
        Arc::new(super::events::LogEventSink),
    )
}

pub fn gallery_with_sink(
    catalog: Arc<dyn CatalogApi>,
    installer: Arc<dyn InstallerApi>,
    prompt: Arc<dyn FolderPathPrompt>,
    events: Arc<dyn GalleryEventSink>,
) -> Arc<ModelGallery> {
    Arc::new(ModelGallery::new(
        catalog,
        installer,
        prompt,
        events,
        DEFAULT_PAGE_LIMIT,
    ))
}
