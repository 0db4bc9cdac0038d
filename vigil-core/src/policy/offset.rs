//! Pixel offset policy
//!
//! Shifts the whole layout by a few pixels so that no pixel shows the same
//! edge for the lifetime of the session.

use rand::{Rng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    /// Horizontal shift
    pub dx: i16,
    /// Vertical shift
    pub dy: i16,
}

impl Offset {
    /// No shift
    pub const ZERO: Offset = Offset { dx: 0, dy: 0 };

    /// Create an offset
    pub const fn new(dx: i16, dy: i16) -> Self {
        Self { dx, dy }
    }
}

/// Offset policy
///
/// Draws each axis independently and uniformly from `-range..=range`.
#[derive(Debug, Clone, Copy)]
pub struct OffsetPolicy {
    range: i16,
}

impl OffsetPolicy {
    /// Create a policy with the given symmetric range
    pub fn new(range: u8) -> Self {
        Self {
            range: i16::from(range),
        }
    }

    /// Draw the next offset
    pub fn next_offset<R: RngCore>(&self, rng: &mut R) -> Offset {
        Offset {
            dx: rng.gen_range(-self.range..=self.range),
            dy: rng.gen_range(-self.range..=self.range),
        }
    }
}
