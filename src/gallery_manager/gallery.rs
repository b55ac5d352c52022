// model-gallery/src/gallery_manager/gallery.rs

use log::{debug, error, info};
use std::sync::{Arc, Mutex};

use super::events::{GalleryEventSink, ModelsUpdatedPayload};
use super::folder_mapping::FolderPathPrompt;
use super::install::{HttpInstallerApi, InstallerApi, DEFAULT_INSTALLER_BASE};
use super::query::{
    CatalogApi, CivitModelQueryParams, CivitaiApi, CIVITAI_API_BASE, DEFAULT_PAGE_LIMIT,
};
use super::selection::SelectionState;
use super::types::{CivitModel, ModelType};

/// Endpoint and paging configuration for the gallery.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub catalog_base_url: String,
    pub installer_base_url: String,
    pub page_limit: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: CIVITAI_API_BASE.to_string(),
            installer_base_url: DEFAULT_INSTALLER_BASE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Mutable gallery state, owned behind one mutex and only touched through
/// the transition methods on `ModelGallery`. The lock is never held across
/// an await point.
struct GalleryState {
    models: Vec<CivitModel>,
    loading: bool,
    model_type: Option<ModelType>,
    search_query: String,
    selection: SelectionState,
    // Monotonic catalog request counter. Only the response carrying the
    // latest value may touch `models` or `loading`.
    latest_request: u64,
}

/// Discovery-and-install controller. Holds the single source of truth for
/// the browse view (result list, loading flag, type filter, committed search
/// text, selection) and dispatches install requests for chosen files. The
/// presentation layer renders snapshots of this state and calls back into
/// the transition methods.
pub struct ModelGallery {
    pub(super) catalog: Arc<dyn CatalogApi>,
    pub(super) installer: Arc<dyn InstallerApi>,
    pub(super) prompt: Arc<dyn FolderPathPrompt>,
    pub(super) events: Arc<dyn GalleryEventSink>,
    page_limit: u32,
    state: Mutex<GalleryState>,
}

impl ModelGallery {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        installer: Arc<dyn InstallerApi>,
        prompt: Arc<dyn FolderPathPrompt>,
        events: Arc<dyn GalleryEventSink>,
        page_limit: u32,
    ) -> Self {
        Self {
            catalog,
            installer,
            prompt,
            events,
            page_limit,
            state: Mutex::new(GalleryState {
                models: Vec::new(),
                loading: false,
                // The browse view opens on checkpoints.
                model_type: Some(ModelType::Checkpoint),
                search_query: String::new(),
                selection: SelectionState::default(),
                latest_request: 0,
            }),
        }
    }

    /// Construct a gallery wired to HTTP implementations of the catalog and
    /// installer endpoints.
    pub fn connect(
        config: &GalleryConfig,
        prompt: Arc<dyn FolderPathPrompt>,
        events: Arc<dyn GalleryEventSink>,
    ) -> Result<Arc<Self>, String> {
        let catalog = Arc::new(CivitaiApi::with_base_url(&config.catalog_base_url)?);
        let installer = Arc::new(HttpInstallerApi::with_base_url(&config.installer_base_url)?);
        Ok(Arc::new(Self::new(
            catalog,
            installer,
            prompt,
            events,
            config.page_limit,
        )))
    }

    // --- Catalog querying ---

    /// Issue one catalog query for the current filter and committed search
    /// text. A response (success or failure) is applied only if no newer
    /// query was issued while it was in flight, so the result list and the
    /// loading flag always reflect the most recently issued request.
    pub async fn load_data(&self) {
        let (params, seq) = {
            let mut state = self.state.lock().unwrap();
            state.latest_request += 1;
            state.loading = true;
            (
                CivitModelQueryParams::new(self.page_limit, state.model_type, &state.search_query),
                state.latest_request,
            )
        };
        self.events.loading_changed(true);
        debug!("Catalog query #{} with params {:?}", seq, params);

        let result = self.catalog.fetch_models(&params).await;

        let payload = {
            let mut state = self.state.lock().unwrap();
            if state.latest_request != seq {
                debug!(
                    "Discarding stale catalog response #{} (latest is #{})",
                    seq, state.latest_request
                );
                return;
            }
            state.loading = false;
            match result {
                Ok(models) => {
                    info!("Catalog query #{} returned {} models", seq, models.len());
                    state.models = models;
                    Some(ModelsUpdatedPayload {
                        model_count: state.models.len(),
                        models: state.models.clone(),
                    })
                }
                Err(e) => {
                    // Recovered locally: the previous list is kept and no
                    // error reaches the presentation layer.
                    error!("Catalog query #{} failed: {}", seq, e);
                    None
                }
            }
        };
        if let Some(payload) = payload {
            self.events.models_updated(payload);
        }
        self.events.loading_changed(false);
    }

    /// Select one model type, or the "All" sentinel (`None`). Radio
    /// semantics: a specific selection replaces the previous one. Any change
    /// re-queries the catalog; reselecting the current value does nothing.
    pub async fn set_model_type(&self, model_type: Option<ModelType>) {
        {
            let mut state = self.state.lock().unwrap();
            if state.model_type == model_type {
                debug!("Model type filter unchanged ({:?})", model_type);
                return;
            }
            state.model_type = model_type;
        }
        self.load_data().await;
    }

    /// Commit a search query (called by `SearchDebouncer`). Every commit is
    /// a fresh user action and re-queries the catalog.
    pub async fn set_search_query(&self, query: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.search_query = query.to_string();
        }
        self.load_data().await;
    }

    // --- Selection mode ---

    pub fn set_selecting(&self, selecting: bool) {
        self.state.lock().unwrap().selection.set_selecting(selecting);
    }

    pub fn toggle_selected(&self, model_id: u64) {
        self.state.lock().unwrap().selection.toggle(model_id);
    }

    pub fn is_selecting(&self) -> bool {
        self.state.lock().unwrap().selection.is_selecting()
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.state.lock().unwrap().selection.selected_ids()
    }

    /// True when every model in the current result list is selected.
    pub fn is_all_selected(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.models.is_empty() && state.selection.selected_count() == state.models.len()
    }

    // --- Snapshots for the presentation layer ---

    pub fn models(&self) -> Vec<CivitModel> {
        self.state.lock().unwrap().models.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn model_type(&self) -> Option<ModelType> {
        self.state.lock().unwrap().model_type
    }

    pub fn search_query(&self) -> String {
        self.state.lock().unwrap().search_query.clone()
    }
}
