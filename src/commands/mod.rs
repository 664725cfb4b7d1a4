pub mod bridge;
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub mod dialog;
pub mod screen;

pub use bridge::TauriEventSource;
pub use screen::{attach, NavigatorView, ScreenPayload};
