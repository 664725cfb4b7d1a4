use super::{EventHandler, EventSource, ListenerId};
use crate::backend::{BackendEvent, EventTopic};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Listener = (EventTopic, Arc<EventHandler>);

/// In-process event source. Used when the backend lives in the same process
/// and by tests standing in for the process bridge.
#[derive(Default)]
pub struct LocalEventBus {
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<u64, Listener>>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener of its topic, in registration order.
    /// Returns how many handlers ran.
    pub fn emit(&self, event: BackendEvent) -> usize {
        let topic = event.topic();
        // Handlers run outside the lock so they may listen or unlisten.
        let handlers: Vec<Arc<EventHandler>> = self
            .lock()
            .values()
            .filter(|(t, _)| *t == topic)
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for handler in &handlers {
            (handler.as_ref())(event.clone());
        }
        handlers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    // The table is only touched by single insert/remove/read calls, so a
    // poisoned guard still holds a consistent map.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<u64, Listener>> {
        self.listeners.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("event bus lock poisoned; recovering listener table");
            poisoned.into_inner()
        })
    }
}

impl EventSource for LocalEventBus {
    fn listen(&self, topic: EventTopic, handler: EventHandler) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(id, (topic, Arc::new(handler)));
        ListenerId(id)
    }

    fn unlisten(&self, id: ListenerId) {
        self.lock().remove(&id.0);
    }
}
