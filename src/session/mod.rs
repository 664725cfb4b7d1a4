pub mod driver;
pub mod model;
pub mod navigator;
pub mod progress;

pub use driver::Session;
pub use model::{Screen, SessionStatus, Transition, Trigger};
pub use navigator::Navigator;
pub use progress::OnboardingProgress;
