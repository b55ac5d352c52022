// model-gallery/src/gallery_manager/events.rs

use log::debug;
use serde::Serialize;

use super::types::CivitModel;

// --- Event Payloads ---

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ModelsUpdatedPayload {
    pub model_count: usize,
    pub models: Vec<CivitModel>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstallDispatchedPayload {
    pub model_name: String,
    pub filename: String,
    pub save_path: String,
}

// --- Event Sink ---

/// Notification seam towards the presentation layer. The gallery calls these
/// after each state transition and never waits on the sink; implementations
/// forward to whatever rendering mechanism the embedder uses.
pub trait GalleryEventSink: Send + Sync {
    fn models_updated(&self, payload: ModelsUpdatedPayload);
    fn loading_changed(&self, loading: bool);
    fn install_dispatched(&self, payload: InstallDispatchedPayload);
}

/// Default sink for embedders that poll the gallery snapshot instead of
/// listening for events. Only logs.
pub struct LogEventSink;

impl GalleryEventSink for LogEventSink {
    fn models_updated(&self, payload: ModelsUpdatedPayload) {
        debug!("models-updated: {} models", payload.model_count);
    }

    fn loading_changed(&self, loading: bool) {
        debug!("loading-changed: {}", loading);
    }

    fn install_dispatched(&self, payload: InstallDispatchedPayload) {
        debug!(
            "install-dispatched: {} -> {}",
            payload.filename, payload.save_path
        );
    }
}
