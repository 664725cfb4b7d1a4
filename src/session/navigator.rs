use crate::backend::{BackendEvent, ThumbnailsGenerated};
use crate::config::IntroExit;
use crate::session::model::{Screen, SessionStatus, Transition, Trigger};
use crate::session::progress::OnboardingProgress;

/// Screen state machine.
///
/// ```text
/// Login --authenticated--> Intro --directories saved--> Gallery
/// ```
///
/// Every transition checks the current screen first, so repeated or late
/// triggers are no-ops. Gallery is terminal.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    intro_exit: IntroExit,
    progress: OnboardingProgress,
    gallery_epoch: u64,
}

impl Navigator {
    pub fn new(status: SessionStatus, intro_exit: IntroExit) -> Self {
        Self {
            screen: status.initial_screen(),
            intro_exit,
            progress: OnboardingProgress::default(),
            gallery_epoch: 0,
        }
    }

    /// Build from the backend's raw status string. Unrecognized values start
    /// on the login screen.
    pub fn from_raw_status(raw: &str, intro_exit: IntroExit) -> Self {
        let status = SessionStatus::parse(raw).unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to login", e);
            SessionStatus::NeedsLogin
        });
        Self::new(status, intro_exit)
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> &OnboardingProgress {
        &self.progress
    }

    /// Bumped on every `index-updated`; the gallery refetches when it changes.
    pub fn gallery_epoch(&self) -> u64 {
        self.gallery_epoch
    }

    pub fn on_authenticated(&mut self) -> Option<Transition> {
        self.leave_login(Trigger::Authenticated)
    }

    /// The passphrase dialog unlocked the private key.
    pub fn on_private_key_unlocked(&mut self) -> Option<Transition> {
        self.leave_login(Trigger::PrivateKeyUnlocked)
    }

    pub fn on_directories_saved(&mut self) -> Option<Transition> {
        self.leave_intro(Trigger::DirectoriesSaved)
    }

    pub fn on_files_indexed(&mut self, total: usize) -> Option<Transition> {
        self.progress.record_files_indexed(total);
        self.leave_intro(Trigger::FilesIndexed)
    }

    pub fn on_thumbnails_generated(&mut self, payload: &ThumbnailsGenerated) {
        self.progress.record_thumbnail(payload);
    }

    pub fn on_index_updated(&mut self) {
        self.gallery_epoch += 1;
    }

    pub fn apply(&mut self, event: &BackendEvent) -> Option<Transition> {
        match event {
            BackendEvent::Authenticated => self.on_authenticated(),
            BackendEvent::FilesIndexed(p) => self.on_files_indexed(p.total),
            BackendEvent::ThumbnailsGenerated(p) => {
                self.on_thumbnails_generated(p);
                None
            }
            BackendEvent::IndexUpdated => {
                self.on_index_updated();
                None
            }
        }
    }

    fn leave_login(&mut self, trigger: Trigger) -> Option<Transition> {
        self.advance(Screen::Login, Screen::Intro, trigger)
    }

    // Single place deciding what leaves the intro screen.
    fn leave_intro(&mut self, trigger: Trigger) -> Option<Transition> {
        let allowed = match self.intro_exit {
            IntroExit::DirectoriesSaved => trigger == Trigger::DirectoriesSaved,
            IntroExit::FilesIndexed => trigger == Trigger::FilesIndexed,
        };
        if !allowed {
            return None;
        }
        self.advance(Screen::Intro, Screen::Gallery, trigger)
    }

    fn advance(&mut self, from: Screen, to: Screen, trigger: Trigger) -> Option<Transition> {
        if self.screen != from {
            tracing::debug!(
                "ignoring {:?} on {} (expects {})",
                trigger,
                self.screen,
                from
            );
            return None;
        }
        self.screen = to;
        tracing::info!("screen {} -> {} ({:?})", from, to, trigger);
        Some(Transition {
            from,
            to,
            trigger,
            at: chrono::Utc::now(),
        })
    }
}
