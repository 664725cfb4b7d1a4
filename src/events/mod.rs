//! Push-event subscriptions.
//!
//! An [`EventSource`] hands out listener ids; a [`Subscription`] owns one id
//! and releases it when dropped, so a subscriber can never outlive its owner.

pub mod bus;

pub use bus::LocalEventBus;

use crate::backend::{BackendEvent, EventTopic};
use std::sync::Arc;

pub type EventHandler = Box<dyn Fn(BackendEvent) + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub trait EventSource: Send + Sync {
    fn listen(&self, topic: EventTopic, handler: EventHandler) -> ListenerId;
    fn unlisten(&self, id: ListenerId);
}

/// Scoped listener registration. Dropping it unlistens.
pub struct Subscription {
    source: Arc<dyn EventSource>,
    topic: EventTopic,
    id: ListenerId,
}

impl Subscription {
    pub fn topic(&self) -> EventTopic {
        self.topic
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        tracing::debug!("unlisten {} (listener {})", self.topic, self.id.0);
        self.source.unlisten(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("id", &self.id)
            .finish()
    }
}

pub fn subscribe<F>(source: &Arc<dyn EventSource>, topic: EventTopic, handler: F) -> Subscription
where
    F: Fn(BackendEvent) + Send + Sync + 'static,
{
    let id = source.listen(topic, Box::new(handler));
    tracing::debug!("listen {} (listener {})", topic, id.0);
    Subscription {
        source: Arc::clone(source),
        topic,
        id,
    }
}
