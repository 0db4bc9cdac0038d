//! Display task
//!
//! Sole owner of the state machine. Waits for either the next command or the
//! earliest timer deadline, applies due timers first and then the command, so
//! every state change happens here in arrival order.

use embassy_futures::select::{select, Either};
use log::{debug, info, warn};
use rand::RngCore;

use vigil_core::{DisplayStateMachine, Renderer};

use crate::channels::{Command, CommandQueue};
use crate::clock::{now_ms, sleep_until};

/// Run the display loop until a [`Command::Shutdown`] arrives
pub async fn display_task<G: RngCore, R: Renderer>(
    machine: &mut DisplayStateMachine<G>,
    queue: &CommandQueue,
    renderer: &mut R,
) {
    info!("Display task started");
    let receiver = queue.receiver();

    loop {
        let deadline = machine.next_deadline();
        let wake = async {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => core::future::pending::<()>().await,
            }
        };

        match select(receiver.receive(), wake).await {
            Either::First(Command::Event(event)) => {
                let now = now_ms();
                // Timers that expired before this command was delivered go first
                fire_due(machine, now, renderer);

                if event.is_lifecycle_event() {
                    info!("Event: {:?}", event);
                } else {
                    debug!("Event: {:?}", event);
                }
                if !machine.handle(event, now, renderer) {
                    warn!("Dropped {:?}", event);
                }
            }
            Either::First(Command::Shutdown) => {
                info!("Display task stopping");
                return;
            }
            Either::Second(()) => fire_due(machine, now_ms(), renderer),
        }
    }
}

fn fire_due<G: RngCore, R: Renderer>(
    machine: &mut DisplayStateMachine<G>,
    now: u64,
    renderer: &mut R,
) {
    for fired in machine.advance(now, renderer) {
        debug!("Timer: {:?}", fired);
    }
}
