use crate::backend::{Backend, BackendEvent, EventTopic, Image};
use crate::config::{NavigatorConfig, StartupProbe};
use crate::error::{Error, Result};
use crate::events::{self, EventSource, Subscription};
use crate::picker::{self, DirectoryPicker};
use crate::session::model::{Screen, SessionStatus, Transition};
use crate::session::navigator::Navigator;
use crate::session::progress::OnboardingProgress;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// A running client session: the navigator, its push-event subscriptions and
/// the queue those subscriptions feed.
///
/// Event handlers only enqueue. The owner applies queued events one at a time
/// through [`Session::pump`] or [`Session::drain`], and user actions take
/// `&mut self`, so the navigator is never mutated concurrently.
pub struct Session {
    navigator: Navigator,
    backend: Arc<dyn Backend>,
    inbox: mpsc::UnboundedReceiver<BackendEvent>,
    screen_tx: watch::Sender<Screen>,
    subscriptions: Vec<Subscription>,
}

impl Session {
    /// Subscribe to every backend push-event, then ask the backend where the
    /// session stands. A failed probe is returned to the caller and releases
    /// the subscriptions made so far.
    pub async fn start(
        backend: Arc<dyn Backend>,
        source: Arc<dyn EventSource>,
        config: &NavigatorConfig,
    ) -> Result<Self> {
        let (tx, inbox) = mpsc::unbounded_channel();
        let subscriptions: Vec<Subscription> = EventTopic::ALL
            .into_iter()
            .map(|topic| {
                let tx = tx.clone();
                events::subscribe(&source, topic, move |event| {
                    if tx.send(event).is_err() {
                        tracing::debug!("session inbox closed; dropping {}", topic);
                    }
                })
            })
            .collect();

        let navigator = match config.startup_probe {
            StartupProbe::Status => {
                let raw = backend.get_status().await.map_err(|e| {
                    tracing::error!("startup status query failed: {}", e);
                    e
                })?;
                Navigator::from_raw_status(&raw, config.intro_exit)
            }
            StartupProbe::HasImagesDirs => {
                let has_dirs = backend.has_images_dirs().await.map_err(|e| {
                    tracing::error!("startup directories query failed: {}", e);
                    e
                })?;
                let status = if has_dirs {
                    SessionStatus::DirectoriesSelected
                } else {
                    SessionStatus::AfterLogin
                };
                Navigator::new(status, config.intro_exit)
            }
        };

        let screen = navigator.current_screen();
        tracing::info!(
            "session started on {} ({} subscriptions)",
            screen,
            subscriptions.len()
        );
        let (screen_tx, _) = watch::channel(screen);
        Ok(Self {
            navigator,
            backend,
            inbox,
            screen_tx,
            subscriptions,
        })
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current_screen()
    }

    pub fn progress(&self) -> &OnboardingProgress {
        self.navigator.progress()
    }

    pub fn gallery_epoch(&self) -> u64 {
        self.navigator.gallery_epoch()
    }

    /// Receiver the rendering layer watches to swap views.
    pub fn watch_screen(&self) -> watch::Receiver<Screen> {
        self.screen_tx.subscribe()
    }

    /// Wait for the next push-event and apply it.
    pub async fn pump(&mut self) -> Result<Option<Transition>> {
        let event = self.inbox.recv().await.ok_or(Error::SessionClosed)?;
        Ok(self.apply(event))
    }

    /// Apply every event already queued, without waiting.
    pub fn drain(&mut self) -> Vec<Transition> {
        let mut applied = Vec::new();
        while let Ok(event) = self.inbox.try_recv() {
            applied.extend(self.apply(event));
        }
        applied
    }

    /// Ask the backend to start its credential flow. The screen changes only
    /// once `authenticated` arrives.
    pub async fn request_login(&self) -> Result<()> {
        self.backend.authenticate().await
    }

    /// Unlock the private key with the user's passphrase. A rejected
    /// passphrase leaves the login screen in place for another attempt.
    pub async fn unlock(&mut self, passphrase: &str) -> Result<Option<Transition>> {
        if let Err(e) = self.backend.get_private_key(passphrase).await {
            tracing::warn!("unlock failed on {}: {}", self.current_screen(), e);
            return Err(e);
        }
        let transition = self.navigator.on_private_key_unlocked();
        self.publish(&transition);
        Ok(transition)
    }

    /// Persist the chosen photo directories. An empty selection counts as a
    /// cancelled picker; any failure leaves the screen unchanged.
    pub async fn select_directories(&mut self, dirs: &[PathBuf]) -> Result<Option<Transition>> {
        if dirs.is_empty() {
            tracing::info!("directory selection cancelled");
            return Err(Error::UserCancelled);
        }
        tracing::info!("saving {} image directories", dirs.len());
        if let Err(e) = self.backend.save_images_dirs(dirs).await {
            tracing::warn!("save_images_dirs failed: {}", e);
            return Err(e);
        }
        let transition = self.navigator.on_directories_saved();
        self.publish(&transition);
        Ok(transition)
    }

    /// Open `picker` on the user's pictures directory and save what it returns.
    pub async fn choose_directories(
        &mut self,
        picker: &dyn DirectoryPicker,
    ) -> Result<Option<Transition>> {
        let default_dir = picker::default_picture_dir();
        let dirs = picker
            .pick_directories(default_dir.as_deref())
            .unwrap_or_default();
        self.select_directories(&dirs).await
    }

    pub async fn images(&self) -> Result<Vec<Image>> {
        self.backend.get_images().await
    }

    pub async fn sync_images(&self) -> Result<()> {
        self.backend.sync_images().await
    }

    /// Release every subscription. Dropping the session does the same.
    pub fn shutdown(mut self) {
        let released = self.subscriptions.len();
        self.subscriptions.clear();
        self.inbox.close();
        tracing::info!(
            "session shut down on {} ({} subscriptions released)",
            self.current_screen(),
            released
        );
    }

    fn apply(&mut self, event: BackendEvent) -> Option<Transition> {
        let transition = self.navigator.apply(&event);
        self.publish(&transition);
        transition
    }

    fn publish(&self, transition: &Option<Transition>) {
        if let Some(t) = transition {
            self.screen_tx.send_replace(t.to);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("navigator", &self.navigator)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}
