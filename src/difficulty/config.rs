use crate::error::ConfigError;

/// Tunables of a [`StrainSkill`].
///
/// [`StrainSkill`]: crate::difficulty::skills::StrainSkill
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainConfig {
    /// Fraction of strain retained per second. `1.0` disables decay.
    pub decay_base: f64,
    /// Weight factor per rank when aggregating sorted strains.
    pub decay_weight: f64,
    /// Scale applied to each raw contribution.
    pub skill_multiplier: f64,
    /// How many previous objects the scoring rule gets to see.
    pub history_len: usize,
}

impl StrainConfig {
    /// Values used by the flashlight skill.
    pub const FLASHLIGHT: Self = Self {
        decay_base: 1.0,
        decay_weight: 1.0,
        skill_multiplier: 5000.0,
        history_len: 1,
    };

    pub const fn decay_base(mut self, decay_base: f64) -> Self {
        self.decay_base = decay_base;

        self
    }

    pub const fn decay_weight(mut self, decay_weight: f64) -> Self {
        self.decay_weight = decay_weight;

        self
    }

    pub const fn skill_multiplier(mut self, skill_multiplier: f64) -> Self {
        self.skill_multiplier = skill_multiplier;

        self
    }

    pub const fn history_len(mut self, history_len: usize) -> Self {
        self.history_len = history_len;

        self
    }

    /// Check that all values are within their valid range.
    pub fn validate(&self, requires_history: bool) -> Result<(), ConfigError> {
        // Negated comparisons so that NaN is rejected too
        if !(self.decay_base > 0.0 && self.decay_base <= 1.0) {
            return Err(ConfigError::DecayBase(self.decay_base));
        }

        if !(self.decay_weight > 0.0 && self.decay_weight <= 1.0) {
            return Err(ConfigError::DecayWeight(self.decay_weight));
        }

        if !(self.skill_multiplier.is_finite() && self.skill_multiplier >= 0.0) {
            return Err(ConfigError::SkillMultiplier(self.skill_multiplier));
        }

        if requires_history && self.history_len == 0 {
            return Err(ConfigError::EmptyHistory);
        }

        Ok(())
    }
}

impl Default for StrainConfig {
    fn default() -> Self {
        Self::FLASHLIGHT
    }
}
