//! Color policy
//!
//! Computes background/foreground colors for a mode and phase. The normal
//! phase paints the large background area, so its color is perturbed every
//! time it is computed to avoid a static color burning in. The inverted
//! phase paints only the foreground asset and uses the pure base color.

use rand::{Rng, RngCore};

use crate::config::{DisplayConfig, Palette};
use crate::state::{Mode, Phase};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 3]", into = "[u8; 3]"))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in `[r, g, b]` order
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Index of the strongest channel (first one wins on ties)
    pub fn dominant_channel(&self) -> usize {
        let channels = self.channels();
        let mut best = 0;
        for i in 1..channels.len() {
            if channels[i] > channels[best] {
                best = i;
            }
        }
        best
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

/// Color policy
///
/// `color_for` returns `(background, foreground)`.
#[derive(Debug, Clone)]
pub struct ColorPolicy {
    palette: Palette,
    variance: u8,
    floor: u8,
    ceiling: u8,
    neutral_light: Rgb,
    neutral_dark: Rgb,
}

impl ColorPolicy {
    /// Build the policy from a validated configuration
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            palette: config.palette,
            variance: config.color_variance,
            floor: config.dominant_floor,
            ceiling: config.minor_ceiling,
            neutral_light: config.neutral_light,
            neutral_dark: config.neutral_dark,
        }
    }

    /// Base color of a mode, before any variance
    pub fn base_color(&self, mode: Mode) -> Rgb {
        self.palette.base(mode)
    }

    /// Background and foreground for a mode and phase
    pub fn color_for<R: RngCore>(&self, mode: Mode, phase: Phase, rng: &mut R) -> (Rgb, Rgb) {
        let base = self.base_color(mode);
        match phase {
            Phase::Normal => (self.varied_color(base, rng), self.neutral_light),
            Phase::Inverted => (self.neutral_dark, base),
        }
    }

    /// Perturb each channel of `base` by up to the configured variance
    ///
    /// The dominant channel never drops below the floor and the minor
    /// channels never rise above the ceiling.
    pub fn varied_color<R: RngCore>(&self, base: Rgb, rng: &mut R) -> Rgb {
        let dominant = base.dominant_channel();
        let spread = i16::from(self.variance);
        let mut out = base.channels();

        for (i, channel) in out.iter_mut().enumerate() {
            let perturbed = i16::from(*channel) + rng.gen_range(-spread..=spread);
            let (lo, hi) = if i == dominant {
                (i16::from(self.floor), 255)
            } else {
                (0, i16::from(self.ceiling))
            };
            *channel = perturbed.clamp(lo, hi) as u8;
        }

        out.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn policy() -> ColorPolicy {
        ColorPolicy::new(&DisplayConfig::default())
    }

    #[test]
    fn test_normal_phase_uses_neutral_foreground() {
        let mut rng = SmallRng::seed_from_u64(1);
        let (bg, fg) = policy().color_for(Mode::A, Phase::Normal, &mut rng);
        assert_eq!(fg, Rgb::WHITE);
        assert_eq!(bg.dominant_channel(), 0);
    }

    #[test]
    fn test_inverted_phase_uses_pure_base() {
        let mut rng = SmallRng::seed_from_u64(1);
        let policy = policy();
        for mode in [Mode::A, Mode::B] {
            let (bg, fg) = policy.color_for(mode, Phase::Inverted, &mut rng);
            assert_eq!(bg, Rgb::BLACK);
            assert_eq!(fg, policy.base_color(mode));
        }
    }

    #[test]
    fn test_zero_variance_is_identity() {
        let config = DisplayConfig {
            color_variance: 0,
            ..Default::default()
        };
        let policy = ColorPolicy::new(&config);
        let mut rng = SmallRng::seed_from_u64(7);
        let base = config.palette.mode_b;
        assert_eq!(policy.varied_color(base, &mut rng), base);
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let policy = policy();
        let base = policy.base_color(Mode::A);
        let a = policy.varied_color(base, &mut SmallRng::seed_from_u64(42));
        let b = policy.varied_color(base, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_dominant_channel() {
        assert_eq!(Rgb::new(200, 10, 10).dominant_channel(), 0);
        assert_eq!(Rgb::new(10, 200, 10).dominant_channel(), 1);
        assert_eq!(Rgb::new(10, 10, 200).dominant_channel(), 2);
    }

    proptest! {
        #[test]
        fn varied_color_stays_within_bounds(
            seed in any::<u64>(),
            variance in 0u8..=120,
            is_b in any::<bool>(),
        ) {
            let config = DisplayConfig {
                color_variance: variance,
                ..Default::default()
            };
            let policy = ColorPolicy::new(&config);
            let mode = if is_b { Mode::B } else { Mode::A };
            let base = policy.base_color(mode);
            let dominant = base.dominant_channel();
            let mut rng = SmallRng::seed_from_u64(seed);

            for _ in 0..16 {
                let varied = policy.varied_color(base, &mut rng).channels();
                for (i, (&c, &b)) in varied.iter().zip(base.channels().iter()).enumerate() {
                    if i == dominant {
                        prop_assert!(c >= config.dominant_floor);
                    } else {
                        prop_assert!(c <= config.minor_ceiling);
                    }
                    prop_assert!((i16::from(c) - i16::from(b)).abs() <= i16::from(variance));
                }
            }
        }
    }
}
