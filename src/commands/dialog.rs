use crate::picker::DirectoryPicker;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::DialogExt;

/// Native folder chooser (multi-select). Blocks the calling thread; do not
/// call it from the main thread.
pub struct DialogDirectoryPicker<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogDirectoryPicker<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> DirectoryPicker for DialogDirectoryPicker<R> {
    fn pick_directories(&self, default_dir: Option<&Path>) -> Option<Vec<PathBuf>> {
        let mut builder = self.app.dialog().file();
        if let Some(dir) = default_dir {
            builder = builder.set_directory(dir);
        }
        let picked = builder.blocking_pick_folders()?;
        Some(
            picked
                .into_iter()
                .filter_map(|p| match p.into_path() {
                    Ok(path) => Some(path),
                    Err(e) => {
                        tracing::warn!("skipping unusable folder selection: {}", e);
                        None
                    }
                })
                .collect(),
        )
    }
}
