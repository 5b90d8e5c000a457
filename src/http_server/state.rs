//! Shared state handed to every route

use std::sync::Arc;

use crate::activity::{ActivityRecorder, HeatmapRenderer, MemoryActivityRecorder, SvgHeatmap};
use crate::flashcards::FlashcardService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub flashcards: Arc<FlashcardService>,
    pub activity: Arc<dyn ActivityRecorder>,
    pub heatmap: Arc<dyn HeatmapRenderer>,
}

impl AppState {
    /// Empty store, in-memory activity, SVG heatmap
    pub fn new() -> Self {
        Self {
            flashcards: Arc::new(FlashcardService::new()),
            activity: Arc::new(MemoryActivityRecorder::new()),
            heatmap: Arc::new(SvgHeatmap::new()),
        }
    }

    pub fn with_flashcards(mut self, flashcards: Arc<FlashcardService>) -> Self {
        self.flashcards = flashcards;
        self
    }

    pub fn with_activity(mut self, activity: Arc<dyn ActivityRecorder>) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_heatmap(mut self, heatmap: Arc<dyn HeatmapRenderer>) -> Self {
        self.heatmap = heatmap;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
