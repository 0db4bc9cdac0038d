//! Producer handle for host input sources
//!
//! Every method enqueues and returns immediately. Nothing here touches
//! display state; the display task applies commands in arrival order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use log::{trace, warn};

use vigil_core::{Event, MotionSample};

use crate::channels::{Command, CommandQueue, COMMAND_QUEUE_SIZE};
use crate::error::RuntimeError;

/// Inbound interface of the display
#[derive(Clone, Copy)]
pub struct DisplayHandle<'a> {
    sender: Sender<'a, CriticalSectionRawMutex, Command, COMMAND_QUEUE_SIZE>,
}

impl<'a> DisplayHandle<'a> {
    /// Create a handle that feeds `queue`
    pub fn new(queue: &'a CommandQueue) -> Self {
        Self {
            sender: queue.sender(),
        }
    }

    /// Start a display session
    pub fn activate(&self) -> Result<(), RuntimeError> {
        self.send(Command::Event(Event::Activate))
    }

    /// End the display session
    pub fn deactivate(&self) -> Result<(), RuntimeError> {
        self.send(Command::Event(Event::Deactivate))
    }

    /// User tapped the screen
    pub fn tap(&self) -> Result<(), RuntimeError> {
        self.send(Command::Event(Event::Tap))
    }

    /// Raw accelerometer reading in m/s²
    pub fn motion_sample(&self, ax: f32, ay: f32, az: f32) -> Result<(), RuntimeError> {
        let magnitude = MotionSample::new(ax, ay, az).magnitude();
        self.send(Command::Event(Event::Motion { magnitude }))
    }

    /// Stop the display task
    pub fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(Command::Shutdown)
    }

    fn send(&self, command: Command) -> Result<(), RuntimeError> {
        match self.sender.try_send(command) {
            Ok(()) => {
                trace!("queued {:?}", command);
                Ok(())
            }
            Err(_) => {
                warn!("command queue full, dropped {:?}", command);
                Err(RuntimeError::QueueFull)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_queued_in_order() {
        let queue = CommandQueue::new();
        let handle = DisplayHandle::new(&queue);

        handle.activate().unwrap();
        handle.tap().unwrap();
        handle.motion_sample(3.0, 4.0, 0.0).unwrap();
        handle.deactivate().unwrap();

        let receiver = queue.receiver();
        assert_eq!(receiver.try_receive().unwrap(), Command::Event(Event::Activate));
        assert_eq!(receiver.try_receive().unwrap(), Command::Event(Event::Tap));
        match receiver.try_receive().unwrap() {
            Command::Event(Event::Motion { magnitude }) => {
                assert!((magnitude - 5.0).abs() < 1e-6)
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(
            receiver.try_receive().unwrap(),
            Command::Event(Event::Deactivate)
        );
        assert!(receiver.try_receive().is_err());
    }

    #[test]
    fn test_full_queue_does_not_block() {
        let queue = CommandQueue::new();
        let handle = DisplayHandle::new(&queue);

        for _ in 0..COMMAND_QUEUE_SIZE {
            handle.motion_sample(0.0, 0.0, 9.81).unwrap();
        }
        assert!(matches!(handle.tap(), Err(RuntimeError::QueueFull)));
    }
}
