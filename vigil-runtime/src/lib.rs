//! Host runtime for the always-on display controller
//!
//! Wires [`vigil_core::DisplayStateMachine`] to a host:
//!
//! - A single command channel serializes taps, motion samples and lifecycle
//!   calls coming from independent host threads
//! - [`tasks::display_task`] owns the state machine and is the only place
//!   state is mutated; it sleeps until the next timer deadline or the next
//!   command, whichever comes first
//! - [`DisplayHandle`] is the producer side handed to input sources
//! - TOML configuration loading with embedded defaults
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  ┌──────────┐  ┌───────────┐
//! │ tap      │  │ sensor   │  │ lifecycle │
//! └────┬─────┘  └────┬─────┘  └─────┬─────┘
//!      └─────────────┼──────────────┘
//!                    ▼  DisplayHandle (try_send)
//!             ┌──────────────┐
//!             │ CommandQueue │
//!             └──────┬───────┘
//!                    ▼
//!       ┌─────────────────────────┐   timers fire in-task
//!       │ display_task            │◄───────────────────
//!       │  DisplayStateMachine    │
//!       └──────────┬──────────────┘
//!                  ▼ Renderer
//!              host paints
//! ```

pub mod channels;
pub mod clock;
pub mod config;
pub mod error;
pub mod handle;
pub mod render;
pub mod tasks;

pub use channels::{Command, CommandQueue, COMMAND_QUEUE_SIZE};
pub use error::RuntimeError;
pub use handle::DisplayHandle;
pub use render::DedupRenderer;
pub use tasks::display_task;
