// model-gallery/src/lib.rs

//! Discovery-and-install core for a model manager: query a Civitai-style
//! catalog with debounced search and type filtering, resolve destination
//! folders per model type, and dispatch downloads to a local installer
//! service.

pub mod gallery_manager;
pub mod logging;

pub use gallery_manager::{
    CivitModel, CivitModelFileVersion, DeclinePrompt, FolderPathPrompt, GalleryConfig,
    GalleryEventSink, InstallModelsApiInput, LogEventSink, ModelGallery, ModelType,
    SearchDebouncer,
};
pub use logging::init_logging;
