//! Domain event system
//!
//! The notification collaborator seam: session mutations publish events for
//! real-time delivery, and the core has no opinion on transport framing.

mod bus;
mod memory;
mod types;

pub use bus::EventBus;
pub use memory::MemoryEventBus;
pub use types::PitchEvent;
