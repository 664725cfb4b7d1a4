use crate::backend::{BackendEvent, EventTopic};
use crate::events::{EventHandler, EventSource, ListenerId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tauri::{AppHandle, Event, EventId, Listener, Runtime};

/// Backend push-events delivered through Tauri's event system.
///
/// Payloads arrive as JSON text; ones that do not decode are logged and dropped.
pub struct TauriEventSource<R: Runtime> {
    app: AppHandle<R>,
    next_id: AtomicU64,
    ids: Mutex<HashMap<u64, EventId>>,
}

impl<R: Runtime> TauriEventSource<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self {
            app,
            next_id: AtomicU64::new(0),
            ids: Mutex::new(HashMap::new()),
        }
    }

    /// Tauri listeners still registered through this source.
    pub fn listener_count(&self) -> usize {
        self.ids().len()
    }

    fn ids(&self) -> MutexGuard<'_, HashMap<u64, EventId>> {
        self.ids.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("listener map lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl<R: Runtime> EventSource for TauriEventSource<R> {
    fn listen(&self, topic: EventTopic, handler: EventHandler) -> ListenerId {
        let event_id = self.app.listen(topic.name(), move |event: Event| {
            match BackendEvent::decode(topic, event.payload()) {
                Ok(decoded) => handler(decoded),
                Err(e) => tracing::warn!("dropping `{}` event: {}", topic, e),
            }
        });
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.ids().insert(id, event_id);
        ListenerId(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let event_id = self.ids().remove(&id.0);
        if let Some(event_id) = event_id {
            self.app.unlisten(event_id);
        }
    }
}
