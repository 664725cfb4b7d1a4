//! Scripted backend used by the session tests.

use super::{Backend, BackendEvent, FilesIndexed, Image, ThumbnailsGenerated};
use crate::error::{Error, Result};
use crate::events::LocalEventBus;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub struct FakeBackend {
    /// `Err` holds the transport failure reported by `get_status`
    pub status: std::result::Result<String, String>,
    pub has_dirs: bool,
    pub passphrase: String,
    /// error returned by the next `save_images_dirs`
    pub save_error: Mutex<Option<Error>>,
    pub images: Vec<Image>,
    pub calls: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<PathBuf>>,
    /// when set, `authenticate` and `save_images_dirs` emit the follow-up events here
    pub bus: Option<Arc<LocalEventBus>>,
}

impl FakeBackend {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: Ok(status.to_string()),
            has_dirs: false,
            passphrase: "open sesame".to_string(),
            save_error: Mutex::new(None),
            images: vec![],
            calls: Mutex::new(vec![]),
            saved: Mutex::new(vec![]),
            bus: None,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: Err("connection refused".to_string()),
            ..Self::with_status("")
        }
    }

    pub fn emitting_to(mut self, bus: Arc<LocalEventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn get_status(&self) -> Result<String> {
        self.record("get_status");
        self.status.clone().map_err(Error::BackendUnreachable)
    }

    async fn has_images_dirs(&self) -> Result<bool> {
        self.record("has_images_dirs");
        Ok(self.has_dirs)
    }

    async fn authenticate(&self) -> Result<()> {
        self.record("authenticate");
        if let Some(bus) = &self.bus {
            bus.emit(BackendEvent::Authenticated);
        }
        Ok(())
    }

    async fn get_private_key(&self, passphrase: &str) -> Result<()> {
        self.record("get_private_key");
        if passphrase == self.passphrase {
            Ok(())
        } else {
            Err(Error::AuthRejected)
        }
    }

    async fn save_images_dirs(&self, dirs: &[PathBuf]) -> Result<()> {
        self.record("save_images_dirs");
        if let Some(e) = self.save_error.lock().unwrap().take() {
            return Err(e);
        }
        self.saved.lock().unwrap().extend_from_slice(dirs);
        if let Some(bus) = &self.bus {
            bus.emit(BackendEvent::FilesIndexed(FilesIndexed { total: 2 }));
            for done in 1..=2 {
                bus.emit(BackendEvent::ThumbnailsGenerated(ThumbnailsGenerated {
                    done,
                    total: 2,
                    latest: format!("/thumbnails/{}.jpg", done),
                }));
            }
        }
        Ok(())
    }

    async fn get_images(&self) -> Result<Vec<Image>> {
        self.record("get_images");
        Ok(self.images.clone())
    }

    async fn sync_images(&self) -> Result<()> {
        self.record("sync_images");
        if let Some(bus) = &self.bus {
            bus.emit(BackendEvent::IndexUpdated);
        }
        Ok(())
    }
}
