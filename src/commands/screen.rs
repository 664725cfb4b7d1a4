use crate::session::{Screen, Session};
use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, Runtime, State};
use tokio::sync::watch;

pub const SCREEN_CHANGED: &str = "screen-changed";

/// Payload of `screen-changed` and reply of `current_screen`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenPayload {
    pub screen: Screen,
    pub route: &'static str,
}

impl From<Screen> for ScreenPayload {
    fn from(screen: Screen) -> Self {
        Self {
            screen,
            route: screen.route(),
        }
    }
}

/// Read-only view of the session's screen, managed as Tauri state.
pub struct NavigatorView {
    screen: watch::Receiver<Screen>,
}

impl NavigatorView {
    pub fn new(screen: watch::Receiver<Screen>) -> Self {
        Self { screen }
    }
}

#[tauri::command]
pub fn current_screen(view: State<'_, NavigatorView>) -> ScreenPayload {
    ScreenPayload::from(*view.screen.borrow())
}

/// Emit `screen-changed` to the webview each time the session's screen changes.
pub fn forward_screen_changes<R: Runtime>(app: AppHandle<R>, mut screens: watch::Receiver<Screen>) {
    tauri::async_runtime::spawn(async move {
        while screens.changed().await.is_ok() {
            let screen = *screens.borrow_and_update();
            if let Err(e) = app.emit(SCREEN_CHANGED, ScreenPayload::from(screen)) {
                tracing::warn!("emit {} failed: {}", SCREEN_CHANGED, e);
            }
        }
        tracing::debug!("screen forwarding stopped");
    });
}

/// Expose `session` to the webview: manage the view state and start forwarding.
pub fn attach<R: Runtime>(app: &AppHandle<R>, session: &Session) {
    app.manage(NavigatorView::new(session.watch_screen()));
    forward_screen_changes(app.clone(), session.watch_screen());
}
