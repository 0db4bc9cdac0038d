//! Accelerometer samples

/// Raw 3-axis acceleration (m/s²)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// X axis
    pub ax: f32,
    /// Y axis
    pub ay: f32,
    /// Z axis
    pub az: f32,
}

impl MotionSample {
    /// Create a sample
    pub const fn new(ax: f32, ay: f32, az: f32) -> Self {
        Self { ax, ay, az }
    }

    /// Euclidean norm of the acceleration vector
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.ax * self.ax + self.ay * self.ay + self.az * self.az)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let sample = MotionSample::new(3.0, 4.0, 0.0);
        assert!((sample.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_resting_magnitude_is_gravity() {
        let sample = MotionSample::new(0.0, 0.0, 9.81);
        assert!((sample.magnitude() - 9.81).abs() < 1e-5);
    }
}
