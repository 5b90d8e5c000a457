//! Request activity tracking
//!
//! Counts handled flashcard requests per calendar day and renders the
//! history as a calendar heatmap.

mod heatmap;
mod recorder;

pub use heatmap::{HeatmapRenderer, SvgHeatmap, VMAX};
pub use recorder::{ActivityRecorder, MemoryActivityRecorder};
