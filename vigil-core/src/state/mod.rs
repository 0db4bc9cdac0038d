//! Display state machine
//!
//! Defines the authoritative runtime behavior of the display.
//! Every event is handled to completion and ends in one render.

pub mod events;
pub mod machine;
pub mod mode;
pub mod snapshot;

pub use events::Event;
pub use machine::DisplayStateMachine;
pub use mode::{Mode, Phase};
pub use snapshot::{Asset, RenderSnapshot};
