use std::path::{Path, PathBuf};

/// Directory chooser shown on the intro screen.
///
/// Returns `None` when the user dismisses the dialog.
pub trait DirectoryPicker: Send + Sync {
    fn pick_directories(&self, default_dir: Option<&Path>) -> Option<Vec<PathBuf>>;
}

/// Where the chooser opens: the user's pictures directory when the platform has one.
pub fn default_picture_dir() -> Option<PathBuf> {
    dirs::picture_dir().or_else(dirs::home_dir)
}

/// Fixed answer, for headless front-ends that already know the directories.
#[derive(Debug, Clone, Default)]
pub struct PresetPicker(pub Option<Vec<PathBuf>>);

impl DirectoryPicker for PresetPicker {
    fn pick_directories(&self, _default_dir: Option<&Path>) -> Option<Vec<PathBuf>> {
        self.0.clone()
    }
}
