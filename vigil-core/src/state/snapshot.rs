//! Render snapshot handed to the host

use super::mode::{Mode, Phase};
use crate::policy::{Offset, Rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Foreground icon shown for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Asset {
    /// Shown in [`Mode::A`]
    ThumbsDown,
    /// Shown in [`Mode::B`]
    ThumbsUp,
}

impl From<Mode> for Asset {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::A => Asset::ThumbsDown,
            Mode::B => Asset::ThumbsUp,
        }
    }
}

/// Everything the host needs to paint one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderSnapshot {
    /// Background fill
    pub background: Rgb,
    /// Foreground asset tint
    pub foreground: Rgb,
    /// Screen brightness in `[0.0, 1.0]`
    pub brightness: f32,
    /// Layout inset
    pub offset: Offset,
    /// Foreground asset
    pub asset: Asset,
    /// Mode the snapshot was built for
    pub mode: Mode,
    /// Phase the snapshot was built for
    pub phase: Phase,
}
