// model-gallery/src/gallery_manager/folder_mapping.rs

use async_trait::async_trait;
use log::info;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::gallery::ModelGallery;
use super::types::ModelType;

/// Destination subdirectories under the managed `models/` tree, keyed by
/// model type. Deliberately partial: a type without an entry has no agreed
/// destination and must go through the interactive prompt — defaulting to
/// some folder would misfile the installed content.
static MODEL_TYPE_TO_FOLDER: Lazy<HashMap<ModelType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ModelType::Checkpoint, "checkpoints"),
        (ModelType::TextualInversion, "embeddings"),
        (ModelType::Hypernetwork, "hypernetworks"),
        // AestheticGradient: not sure where this one goes
        (ModelType::LORA, "loras"),
        (ModelType::Controlnet, "controlnet"),
        (ModelType::Poses, "poses"),
        (ModelType::Upscaler, "upscale_models"),
        (ModelType::VAE, "vae"),
    ])
});

/// Static lookup; `None` means the type has no known destination.
pub fn folder_for_model_type(model_type: ModelType) -> Option<&'static str> {
    MODEL_TYPE_TO_FOLDER.get(&model_type).copied()
}

/// Interactive collaborator that asks the user for a destination folder when
/// the static mapping has no entry. `None` means the user declined.
#[async_trait]
pub trait FolderPathPrompt: Send + Sync {
    async fn prompt_folder_path(&self, model_type: ModelType) -> Option<String>;
}

/// Prompt that always declines. For headless embedders that only install
/// mapped model types.
pub struct DeclinePrompt;

#[async_trait]
impl FolderPathPrompt for DeclinePrompt {
    async fn prompt_folder_path(&self, model_type: ModelType) -> Option<String> {
        info!(
            "No folder mapping for model type {:?} and no interactive prompt available",
            model_type
        );
        None
    }
}

impl ModelGallery {
    /// Resolve the destination subdirectory for a model type: static table
    /// first, interactive prompt for unmapped types. `None` means the
    /// install for this file is abandoned.
    pub(super) async fn resolve_folder(&self, model_type: ModelType) -> Option<String> {
        if let Some(folder) = folder_for_model_type(model_type) {
            return Some(folder.to_string());
        }
        self.prompt.prompt_folder_path(model_type).await
    }
}
