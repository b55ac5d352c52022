// model-gallery/src/gallery_manager/search.rs

use log::debug;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use super::gallery::ModelGallery;

/// Quiet period after the last keystroke before a search is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Debounces free-text search input. Each keystroke restarts the timer, so
/// only the text standing after a full quiet period is committed to the
/// gallery; blank input never commits.
pub struct SearchDebouncer {
    gallery: Arc<ModelGallery>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new(gallery: Arc<ModelGallery>) -> Self {
        Self::with_delay(gallery, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(gallery: Arc<ModelGallery>, delay: Duration) -> Self {
        Self {
            gallery,
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Called on every edit of the search box with the full current text.
    pub fn on_input(&self, text: &str) {
        let gallery = self.gallery.clone();
        let delay = self.delay;
        let text = text.to_string();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if text.trim().is_empty() {
                return;
            }
            gallery.set_search_query(&text).await;
        });
        if let Some(previous) = self.pending.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }

    /// Commit `text` immediately, bypassing the quiet period. Any pending
    /// debounced commit is cancelled either way.
    pub fn search_now(&self, text: &str) {
        if let Some(previous) = self.pending.lock().unwrap().take() {
            previous.abort();
        }
        if text.trim().is_empty() {
            debug!("Ignoring immediate search with blank input");
            return;
        }
        let gallery = self.gallery.clone();
        let text = text.to_string();
        let handle = tokio::spawn(async move {
            gallery.set_search_query(&text).await;
        });
        *self.pending.lock().unwrap() = Some(handle);
    }
}
