use crate::difficulty::object::DifficultyObject;

/// Fields around the scaling of hit objects.
///
/// Distances are multiplied by `factor` so that they are comparable
/// regardless of object size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalingFactor {
    /// `NORMALIZED_RADIUS / radius`
    pub factor: f32,
    /// Object radius in playfield units.
    pub radius: f64,
}

impl ScalingFactor {
    pub const OBJECT_RADIUS: f32 = 64.0;

    /// Derive the scaling factor from a circle size value.
    pub fn new(cs: f32) -> Self {
        let scale = (1.0 - 0.7 * ((cs - 5.0) / 5.0)) / 2.0;
        let radius = f64::from(Self::OBJECT_RADIUS * scale);
        let factor = DifficultyObject::NORMALIZED_RADIUS as f32 / radius as f32;

        Self { factor, radius }
    }

    /// Use an externally provided factor.
    pub fn from_factor(factor: f32) -> Self {
        let radius = f64::from(DifficultyObject::NORMALIZED_RADIUS as f32 / factor);

        Self { factor, radius }
    }
}

impl Default for ScalingFactor {
    fn default() -> Self {
        Self::new(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_circle_size() {
        let scaling_factor = ScalingFactor::default();

        assert_eq!(scaling_factor.radius, 32.0);
        assert_eq!(scaling_factor.factor, 50.0 / 32.0);
    }

    #[test]
    fn unit_factor() {
        let scaling_factor = ScalingFactor::from_factor(1.0);

        assert_eq!(scaling_factor.factor, 1.0);
        assert_eq!(scaling_factor.radius, 50.0);
    }
}
