use crate::backend::ThumbnailsGenerated;
use serde::Serialize;
use std::path::PathBuf;

/// Onboarding progress shown on the intro screen while the backend indexes
/// the freshly saved directories. Purely informational.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OnboardingProgress {
    /// set once `files-indexed` arrives
    pub files_indexed: Option<usize>,
    pub thumbnails_done: usize,
    pub thumbnails_total: usize,
    pub latest_thumbnail: Option<PathBuf>,
}

impl OnboardingProgress {
    pub fn record_files_indexed(&mut self, total: usize) {
        self.files_indexed = Some(total);
    }

    pub fn record_thumbnail(&mut self, payload: &ThumbnailsGenerated) {
        // Events may arrive out of order; progress never goes backwards.
        self.thumbnails_done = self.thumbnails_done.max(payload.done);
        self.thumbnails_total = payload.total;
        if !payload.latest.is_empty() {
            self.latest_thumbnail = Some(PathBuf::from(&payload.latest));
        }
    }

    pub fn indexing_complete(&self) -> bool {
        self.files_indexed.is_some()
    }

    pub fn thumbnails_complete(&self) -> bool {
        self.thumbnails_total > 0 && self.thumbnails_done >= self.thumbnails_total
    }

    /// Thumbnail completion in `[0, 1]`, or `None` before the first thumbnail.
    pub fn fraction(&self) -> Option<f64> {
        if self.thumbnails_total == 0 {
            return None;
        }
        let done = self.thumbnails_done.min(self.thumbnails_total);
        Some(done as f64 / self.thumbnails_total as f64)
    }
}
