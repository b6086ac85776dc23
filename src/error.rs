use thiserror::Error;

/// Errors that can occur while calculating difficulty.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DifficultyError {
    #[error("object {idx} starts at {curr} which is before its predecessor at {prev}")]
    OutOfOrderInput { idx: usize, prev: f64, curr: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("object {idx} has an invalid {metric}: {value}")]
    InvalidObjectMetric {
        idx: usize,
        metric: &'static str,
        value: f64,
    },
}

/// The reason a [`StrainConfig`] or a [`Difficulty`] setup was rejected.
///
/// [`StrainConfig`]: crate::StrainConfig
/// [`Difficulty`]: crate::Difficulty
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("decay base must be within (0, 1], got {0}")]
    DecayBase(f64),

    #[error("decay weight must be within (0, 1], got {0}")]
    DecayWeight(f64),

    #[error("skill multiplier must be finite and non-negative, got {0}")]
    SkillMultiplier(f64),

    #[error("history length must be non-zero for rules that require history")]
    EmptyHistory,

    #[error("scaling factor must be finite and positive, got {0}")]
    ScalingFactor(f32),
}

pub type Result<T> = std::result::Result<T, DifficultyError>;
