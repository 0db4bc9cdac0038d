//! Two-valued presentation state

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User-selected logical choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Red, thumbs down
    #[default]
    A,
    /// Green, thumbs up
    B,
}

impl Mode {
    /// The other mode
    pub const fn toggled(self) -> Self {
        match self {
            Mode::A => Mode::B,
            Mode::B => Mode::A,
        }
    }
}

/// Which of the two color layouts is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Colored background, neutral foreground
    #[default]
    Normal,
    /// Neutral background, colored foreground
    Inverted,
}

impl Phase {
    /// The other phase
    pub const fn flipped(self) -> Self {
        match self {
            Phase::Normal => Phase::Inverted,
            Phase::Inverted => Phase::Normal,
        }
    }
}
