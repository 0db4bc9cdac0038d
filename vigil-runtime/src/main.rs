//! Vigil demo host
//!
//! Runs the display controller against a scripted input sequence and logs
//! every painted frame. Pass a config path as the first argument, otherwise
//! `display.toml` in the working directory is used (falling back to the
//! embedded defaults when it does not exist).

use std::path::PathBuf;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_time::Timer;
use env_logger::Env;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use vigil_core::{DisplayStateMachine, RenderSnapshot, Renderer};
use vigil_runtime::config::load_or_default;
use vigil_runtime::{display_task, CommandQueue, DedupRenderer, DisplayHandle, RuntimeError};

static COMMANDS: CommandQueue = CommandQueue::new();

/// Paints frames to the log
struct LogRenderer {
    frames: usize,
}

impl Renderer for LogRenderer {
    fn render(&mut self, s: &RenderSnapshot) {
        self.frames += 1;
        info!(
            "frame {}: {:?}/{:?} bg=({},{},{}) fg=({},{},{}) {:?} brightness={:.2} offset=({},{})",
            self.frames,
            s.mode,
            s.phase,
            s.background.r,
            s.background.g,
            s.background.b,
            s.foreground.r,
            s.foreground.g,
            s.foreground.b,
            s.asset,
            s.brightness,
            s.offset.dx,
            s.offset.dy,
        );
    }
}

/// Simulated user: a tap, some sensor noise, then a wrist raise
async fn script(handle: DisplayHandle<'_>) -> Result<(), RuntimeError> {
    handle.activate()?;
    Timer::after_millis(500).await;

    handle.tap()?;
    Timer::after_millis(300).await;

    // Resting readings, well inside the motion threshold
    for _ in 0..5 {
        handle.motion_sample(0.1, -0.2, 9.8)?;
        Timer::after_millis(50).await;
    }

    // Wrist raise
    handle.motion_sample(4.0, 3.0, 14.0)?;
    Timer::after_millis(1_500).await;

    handle.deactivate()
}

fn main() -> Result<(), RuntimeError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("display.toml"));
    let config = load_or_default(&path)?;

    let mut machine = DisplayStateMachine::new(config, SmallRng::from_entropy())?;
    let mut renderer = DedupRenderer::new(LogRenderer { frames: 0 });
    let handle = DisplayHandle::new(&COMMANDS);

    let ((), scripted) = block_on(join(
        display_task(&mut machine, &COMMANDS, &mut renderer),
        async {
            let result = script(handle).await;
            // The display task only exits on shutdown, so send it even on failure
            if handle.shutdown().is_err() {
                warn!("Shutdown not delivered");
            }
            result
        },
    ));
    if let Err(e) = &scripted {
        warn!("Input script aborted: {}", e);
    }

    info!("Painted {} frames", renderer.inner().frames);
    scripted
}
