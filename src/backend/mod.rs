pub mod events;
#[cfg(test)]
pub mod fake;

pub use events::{BackendEvent, EventTopic, FilesIndexed, ThumbnailsGenerated};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An indexed image as listed by the backend for the gallery view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    #[serde(default)]
    pub path: String,
}

/// Request/response surface of the native backend process.
///
/// Implementations map transport failures to `Error::BackendUnreachable`,
/// a wrong passphrase to `Error::AuthRejected`, and anything else the
/// backend reports to `Error::Backend`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Raw status string; see `SessionStatus::parse` for the known values.
    async fn get_status(&self) -> Result<String>;

    async fn has_images_dirs(&self) -> Result<bool>;

    /// Fire-and-forget; the backend emits `authenticated` later.
    async fn authenticate(&self) -> Result<()>;

    async fn get_private_key(&self, passphrase: &str) -> Result<()>;

    /// Persists the directories; `files-indexed` and `thumbnails-generated` follow.
    async fn save_images_dirs(&self, dirs: &[PathBuf]) -> Result<()>;

    async fn get_images(&self) -> Result<Vec<Image>>;

    /// Fire-and-forget re-scan.
    async fn sync_images(&self) -> Result<()>;
}
