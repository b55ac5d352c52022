// model-gallery/src/gallery_manager/types.rs

use serde::{Deserialize, Serialize};

// --- Model Type Tags ---

/// Model type tags as reported by the catalog. This is a closed set: the
/// catalog is the authority on classification, and a record carrying an
/// unknown tag fails decoding (handled as a transient fetch failure).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Checkpoint,
    TextualInversion,
    Hypernetwork,
    AestheticGradient,
    LORA,
    LoCon,
    Controlnet,
    Upscaler,
    MotionModule,
    VAE,
    Poses,
    Wildcards,
    Workflows,
}

/// Every known tag, in the order the filter bar presents them.
pub const ALL_MODEL_TYPES: [ModelType; 13] = [
    ModelType::Checkpoint,
    ModelType::TextualInversion,
    ModelType::Hypernetwork,
    ModelType::AestheticGradient,
    ModelType::LORA,
    ModelType::LoCon,
    ModelType::Controlnet,
    ModelType::Upscaler,
    ModelType::MotionModule,
    ModelType::VAE,
    ModelType::Poses,
    ModelType::Wildcards,
    ModelType::Workflows,
];

// --- Catalog Records ---

/// One catalog record. Immutable once received; the whole list is replaced
/// on each successful query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CivitModel {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub model_versions: Vec<CivitModelVersion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CivitModelVersion {
    #[serde(default)]
    pub files: Vec<CivitModelFileVersion>,
    #[serde(default)]
    pub images: Vec<CivitModelImage>,
}

/// One downloadable file of a model version. A null `name` or `downloadUrl`
/// is a valid state (variant not yet available) and aborts installation for
/// this file downstream; it must never crash decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CivitModelFileVersion {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(rename = "sizeKB", default)]
    pub size_kb: Option<f64>,
    #[serde(default)]
    pub hashes: Option<FileHashes>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FileHashes {
    #[serde(rename = "SHA256", default)]
    pub sha256: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CivitModelImage {
    pub url: String,
}

/// Catalog query response envelope.
#[derive(Deserialize, Debug, Clone)]
pub struct CivitModelsResponse {
    pub items: Vec<CivitModel>,
}

impl CivitModel {
    /// All files across versions, in catalog order.
    pub fn files(&self) -> impl Iterator<Item = &CivitModelFileVersion> {
        self.model_versions.iter().flat_map(|v| v.files.iter())
    }

    /// First preview reference that is actually an image. The catalog mixes
    /// video previews into `images`, so cards must not use index 0 blindly.
    pub fn preview_image_url(&self) -> Option<&str> {
        self.model_versions
            .iter()
            .flat_map(|v| v.images.iter())
            .map(|img| img.url.as_str())
            .find(|url| is_image_format(url))
    }
}

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Whether a preview URL points at a still image (as opposed to a video).
pub fn is_image_format(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    match path.rsplit('.').next() {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
