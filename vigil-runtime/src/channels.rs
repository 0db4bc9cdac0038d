//! Inter-task communication channels
//!
//! The command queue is the single entry point into the display task.
//! Uses embassy-sync primitives so producers on any thread can enqueue
//! without touching display state.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use vigil_core::Event;

/// Channel capacity for display commands
///
/// Sized for a burst of sensor samples between two task wake-ups.
pub const COMMAND_QUEUE_SIZE: usize = 32;

/// Message consumed by the display task
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Deliver an event to the state machine
    Event(Event),
    /// Stop the display task
    Shutdown,
}

impl From<Event> for Command {
    fn from(event: Event) -> Self {
        Command::Event(event)
    }
}

/// Command queue between host producers and the display task
pub type CommandQueue = Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_SIZE>;
