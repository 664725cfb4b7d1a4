use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the push-events the backend emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    Authenticated,
    FilesIndexed,
    ThumbnailsGenerated,
    IndexUpdated,
}

impl EventTopic {
    pub const ALL: [EventTopic; 4] = [
        EventTopic::Authenticated,
        EventTopic::FilesIndexed,
        EventTopic::ThumbnailsGenerated,
        EventTopic::IndexUpdated,
    ];

    /// Event name as emitted over the process bridge.
    pub fn name(self) -> &'static str {
        match self {
            EventTopic::Authenticated => "authenticated",
            EventTopic::FilesIndexed => "files-indexed",
            EventTopic::ThumbnailsGenerated => "thumbnails-generated",
            EventTopic::IndexUpdated => "index-updated",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for EventTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of `files-indexed`, emitted once indexing of the saved directories finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesIndexed {
    pub total: usize,
}

/// Payload of `thumbnails-generated`, emitted after each thumbnail is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailsGenerated {
    pub done: usize,
    pub total: usize,
    /// path of the thumbnail just written
    pub latest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    Authenticated,
    FilesIndexed(FilesIndexed),
    ThumbnailsGenerated(ThumbnailsGenerated),
    IndexUpdated,
}

impl BackendEvent {
    pub fn topic(&self) -> EventTopic {
        match self {
            BackendEvent::Authenticated => EventTopic::Authenticated,
            BackendEvent::FilesIndexed(_) => EventTopic::FilesIndexed,
            BackendEvent::ThumbnailsGenerated(_) => EventTopic::ThumbnailsGenerated,
            BackendEvent::IndexUpdated => EventTopic::IndexUpdated,
        }
    }

    /// Decode a raw JSON payload received for `topic`.
    ///
    /// Payload-less events ignore whatever body arrives with them.
    pub fn decode(topic: EventTopic, payload: &str) -> Result<Self> {
        let event = match topic {
            EventTopic::Authenticated => BackendEvent::Authenticated,
            EventTopic::IndexUpdated => BackendEvent::IndexUpdated,
            EventTopic::FilesIndexed => BackendEvent::FilesIndexed(
                serde_json::from_str(payload).map_err(|source| Error::Payload { topic, source })?,
            ),
            EventTopic::ThumbnailsGenerated => BackendEvent::ThumbnailsGenerated(
                serde_json::from_str(payload).map_err(|source| Error::Payload { topic, source })?,
            ),
        };
        Ok(event)
    }
}
