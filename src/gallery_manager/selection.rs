// model-gallery/src/gallery_manager/selection.rs

use std::collections::HashSet;

/// Bulk-action selection state. The selected set only has meaning while
/// selection mode is active; leaving the mode clears it so a selection made
/// under a previous filter view cannot leak into the next bulk action.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: HashSet<u64>,
    selecting: bool,
}

impl SelectionState {
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn is_selected(&self, model_id: u64) -> bool {
        self.selected.contains(&model_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected identifiers, sorted for stable presentation.
    pub fn selected_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
        if !selecting {
            self.selected.clear();
        }
    }

    pub fn toggle(&mut self, model_id: u64) {
        if !self.selected.remove(&model_id) {
            self.selected.insert(model_id);
        }
    }
}
