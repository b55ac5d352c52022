// model-gallery/src/gallery_manager/mod.rs

pub mod events;
pub mod folder_mapping;
pub mod gallery;
pub mod install;
pub mod query;
pub mod search;
pub mod selection;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use events::{
    GalleryEventSink, InstallDispatchedPayload, LogEventSink, ModelsUpdatedPayload,
};
pub use folder_mapping::{folder_for_model_type, DeclinePrompt, FolderPathPrompt};
pub use gallery::{GalleryConfig, ModelGallery};
pub use install::{
    HttpInstallerApi, InstallModelsApiInput, InstallerApi, DEFAULT_INSTALLER_BASE,
};
pub use query::{
    CatalogApi, CivitModelQueryParams, CivitaiApi, CIVITAI_API_BASE, DEFAULT_PAGE_LIMIT,
};
pub use search::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use selection::SelectionState;
pub use types::{
    is_image_format, CivitModel, CivitModelFileVersion, CivitModelImage, CivitModelVersion,
    CivitModelsResponse, FileHashes, ModelType, ALL_MODEL_TYPES,
};
