//! Build selection state: the seven slots, the live session around them, saved
//! snapshots and the guided-builder screen flow.

mod clock;
#[cfg(feature = "emitter")]
mod emitter;
mod event;
mod navigator;
mod saved;
mod selection;
mod session;
mod slot;

pub use clock::{Clock, FixedClock, SystemClock};
#[cfg(feature = "emitter")]
pub use emitter::SessionEmitter;
pub use event::SessionEvent;
pub use navigator::{BuilderNavigator, Screen};
pub use saved::{SavedBuild, SavedBuilds, SAVED_BUILDS_KEY};
pub use selection::BuildSelection;
pub use session::BuildSession;
pub use slot::Slot;
