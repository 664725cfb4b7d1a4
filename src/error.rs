use crate::backend::EventTopic;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("backend unreachable: {0}")]
    BackendUnreachable(String),
    #[error("passphrase rejected by backend")]
    AuthRejected,
    #[error("directory selection cancelled")]
    UserCancelled,
    #[error("unrecognized session status: {0:?}")]
    UnrecognizedStatus(String),
    #[error("malformed payload for `{topic}` event")]
    Payload {
        topic: EventTopic,
        #[source]
        source: serde_json::Error,
    },
    #[error("backend call failed: {0}")]
    Backend(String),
    #[error("session already shut down")]
    SessionClosed,
}

impl Error {
    /// User-triggered actions that fail with a recoverable error leave the
    /// screen untouched and may be retried.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::SessionClosed)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
