//! Configuration type definitions
//!
//! These types hold the controller constants. Hosts usually build them with
//! [`DisplayConfig::default`] and override a few fields, or deserialize them
//! (with the `serde` feature) from a config file.

use core::fmt;

use crate::policy::Rgb;
use crate::state::Mode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When the inversion cycle makes its first flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InversionStart {
    /// First flip is due at the activation instant
    #[default]
    Immediate,
    /// First flip is due one interval after activation
    Delayed,
}

/// Base colors for the two user-selectable modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Base color for [`Mode::A`] (red, thumbs down)
    pub mode_a: Rgb,
    /// Base color for [`Mode::B`] (green, thumbs up)
    pub mode_b: Rgb,
}

impl Palette {
    /// Base color of a mode
    pub const fn base(&self, mode: Mode) -> Rgb {
        match mode {
            Mode::A => self.mode_a,
            Mode::B => self.mode_b,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            mode_a: Rgb::new(220, 40, 40),
            mode_b: Rgb::new(40, 200, 60),
        }
    }
}

/// Display controller configuration
///
/// Durations are monotonic milliseconds. Brightness values are in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Idle brightness
    pub dim_brightness: f32,
    /// Brightness while peeking
    pub full_brightness: f32,
    /// Minimum deviation from gravity (m/s²) that counts as a wrist raise
    pub motion_threshold: f32,
    /// Resting acceleration magnitude (m/s²)
    pub gravity: f32,
    /// How long a wake keeps the screen at full brightness
    pub peek_ms: u32,
    /// Minimum time between a wake and the next motion-triggered wake
    pub motion_debounce_ms: u32,
    /// Pixel offset refresh period
    pub offset_interval_ms: u32,
    /// Maximum absolute pixel offset on each axis
    pub offset_range: u8,
    /// Phase inversion period
    pub inversion_interval_ms: u32,
    /// Whether the first inversion happens at activation or one period later
    pub inversion_start: InversionStart,
    /// Maximum per-channel perturbation applied to the background color
    pub color_variance: u8,
    /// Lowest value the dominant channel may take after variance
    pub dominant_floor: u8,
    /// Highest value a minor channel may take after variance
    pub minor_ceiling: u8,
    /// Base colors per mode
    pub palette: Palette,
    /// Neutral foreground in the normal phase
    pub neutral_light: Rgb,
    /// Neutral background in the inverted phase
    pub neutral_dark: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dim_brightness: 0.2,
            full_brightness: 1.0,
            motion_threshold: 2.0,
            gravity: 9.81,
            peek_ms: 10_000,
            motion_debounce_ms: 1_000,
            offset_interval_ms: 60_000,
            offset_range: 10,
            inversion_interval_ms: 30_000,
            inversion_start: InversionStart::Immediate,
            color_variance: 20,
            dominant_floor: 160,
            minor_ceiling: 80,
            palette: Palette::default(),
            neutral_light: Rgb::WHITE,
            neutral_dark: Rgb::BLACK,
        }
    }
}

impl DisplayConfig {
    /// Check every field, failing on the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("peek_ms", self.peek_ms),
            ("offset_interval_ms", self.offset_interval_ms),
            ("inversion_interval_ms", self.inversion_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }

        for level in [self.dim_brightness, self.full_brightness] {
            if !(0.0..=1.0).contains(&level) {
                return Err(ConfigError::BrightnessOutOfRange);
            }
        }
        if self.dim_brightness > self.full_brightness {
            return Err(ConfigError::DimAboveFull);
        }

        for (field, value) in [
            ("motion_threshold", self.motion_threshold),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold(field));
            }
        }

        if self.dominant_floor <= self.minor_ceiling {
            return Err(ConfigError::FloorNotAboveCeiling {
                floor: self.dominant_floor,
                ceiling: self.minor_ceiling,
            });
        }

        for mode in [Mode::A, Mode::B] {
            let base = self.palette.base(mode);
            let dominant = base.dominant_channel();
            let in_bounds = base.channels().iter().enumerate().all(|(i, &c)| {
                if i == dominant {
                    c >= self.dominant_floor
                } else {
                    c <= self.minor_ceiling
                }
            });
            if !in_bounds {
                return Err(ConfigError::PaletteOutOfBounds(mode));
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A duration or interval was zero
    ZeroDuration(&'static str),
    /// A brightness level was outside `[0.0, 1.0]`
    BrightnessOutOfRange,
    /// Dim brightness was above full brightness
    DimAboveFull,
    /// A physical threshold was negative or not finite
    InvalidThreshold(&'static str),
    /// The dominant floor must be strictly above the minor ceiling
    FloorNotAboveCeiling {
        /// Configured floor
        floor: u8,
        /// Configured ceiling
        ceiling: u8,
    },
    /// A palette color violates the floor/ceiling bounds
    PaletteOutOfBounds(Mode),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration(field) => write!(f, "{field} must be non-zero"),
            ConfigError::BrightnessOutOfRange => f.write_str("brightness must be within 0.0..=1.0"),
            ConfigError::DimAboveFull => f.write_str("dim brightness exceeds full brightness"),
            ConfigError::InvalidThreshold(field) => {
                write!(f, "{field} must be finite and non-negative")
            }
            ConfigError::FloorNotAboveCeiling { floor, ceiling } => write!(
                f,
                "dominant floor {floor} must be above minor ceiling {ceiling}"
            ),
            ConfigError::PaletteOutOfBounds(mode) => {
                write!(f, "palette color for mode {mode:?} is outside floor/ceiling bounds")
            }
        }
    }
}
