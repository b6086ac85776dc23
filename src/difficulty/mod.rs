use std::cmp;

use rosu_mods::GameModsLegacy;

use crate::{
    error::{ConfigError, Result},
    model::hit_object::HitObject,
    util::difficulty::difficulty_range,
};

use self::{
    config::StrainConfig,
    evaluators::FlashlightScoring,
    object::{DifficultyObject, create_difficulty_objects},
    scaling_factor::ScalingFactor,
    skills::{Flashlight, ScoringRule, StrainSample, StrainSkill},
};

pub use self::attributes::DifficultyAttributes;

mod attributes;
pub mod config;
pub mod evaluators;
pub mod gradual;
pub mod object;
pub mod scaling_factor;
pub mod skills;

const PREEMPT_MIN: f64 = 450.0;
const PREEMPT_MID: f64 = 1200.0;
const PREEMPT_MAX: f64 = 1800.0;

/// Difficulty calculator on a sequence of [`HitObject`]s.
///
/// # Example
///
/// ```
/// use strain_difficulty::{Difficulty, HitObject, HitObjectKind, Pos};
///
/// let objects = [
///     HitObject::new(Pos::new(0.0, 0.0), 0.0, HitObjectKind::Circle),
///     HitObject::new(Pos::new(50.0, 0.0), 500.0, HitObjectKind::Circle),
/// ];
///
/// let attrs = Difficulty::new()
///     .scaling_factor(1.0)
///     .calculate(&objects)
///     .unwrap();
///
/// assert_eq!(attrs.flashlight, 250_000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameModsLegacy,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    ar: f32,
    cs: f32,
    scaling_factor: Option<f32>,
    scoring: FlashlightScoring,
    config: StrainConfig,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameModsLegacy::NoMod,
            passed_objects: None,
            clock_rate: None,
            ar: 5.0,
            cs: 5.0,
            scaling_factor: None,
            scoring: FlashlightScoring::Distance,
            config: StrainConfig::FLASHLIGHT,
        }
    }

    /// Specify mods.
    ///
    /// Only their clock rate is taken into account.
    pub fn mods(self, mods: impl Into<GameModsLegacy>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// If you want to calculate the difficulty after every few objects,
    /// use [`GradualDifficulty`] instead.
    ///
    /// [`GradualDifficulty`]: gradual::GradualDifficulty
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT or NC, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(0.01, 100.0)),
            ..self
        }
    }

    /// Override the approach rate, `5.0` by default.
    pub fn ar(self, ar: f32) -> Self {
        Self {
            ar: ar.clamp(-20.0, 20.0),
            ..self
        }
    }

    /// Override the circle size, `5.0` by default.
    ///
    /// Ignored if a [`Difficulty::scaling_factor`] is specified. Values above
    /// roughly 12.14 result in a negative radius and are rejected by the
    /// calculation.
    pub fn cs(self, cs: f32) -> Self {
        Self {
            cs: cs.clamp(-20.0, 20.0),
            ..self
        }
    }

    /// Scale distances by a fixed factor instead of deriving it from the
    /// circle size.
    ///
    /// Must be finite and positive, otherwise the calculation fails.
    pub const fn scaling_factor(mut self, factor: f32) -> Self {
        self.scaling_factor = Some(factor);

        self
    }

    /// Choose what the flashlight rule rewards.
    pub const fn scoring(mut self, scoring: FlashlightScoring) -> Self {
        self.scoring = scoring;

        self
    }

    /// Replace the strain configuration.
    pub const fn config(mut self, config: StrainConfig) -> Self {
        self.config = config;

        self
    }

    pub const fn get_mods(&self) -> GameModsLegacy {
        self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| clock_rate_of(self.mods))
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub const fn get_config(&self) -> &StrainConfig {
        &self.config
    }

    pub fn get_scaling_factor(&self) -> ScalingFactor {
        self.scaling_factor
            .map_or_else(|| ScalingFactor::new(self.cs), ScalingFactor::from_factor)
    }

    /// The approach rate after applying the clock rate.
    pub fn get_ar(&self) -> f64 {
        // Preempt is truncated before being sped up or slowed down
        let preempt = difficulty_range(f64::from(self.ar), PREEMPT_MAX, PREEMPT_MID, PREEMPT_MIN)
            .trunc()
            / self.get_clock_rate();

        if preempt > PREEMPT_MID {
            (PREEMPT_MAX - preempt) / 120.0
        } else {
            (PREEMPT_MID - preempt) / 150.0 + 5.0
        }
    }

    /// Preprocess the passed objects into [`DifficultyObject`]s.
    pub fn difficulty_objects(&self, hit_objects: &[HitObject]) -> Result<Vec<DifficultyObject>> {
        let take = cmp::min(hit_objects.len(), self.get_passed_objects());

        create_difficulty_objects(
            &hit_objects[..take],
            self.checked_scaling_factor()?,
            self.get_clock_rate(),
        )
    }

    /// Calculate all difficulty related values.
    pub fn calculate(&self, hit_objects: &[HitObject]) -> Result<DifficultyAttributes> {
        let skill = self.run(hit_objects)?;

        let attrs = DifficultyAttributes {
            flashlight: skill.difficulty_value,
            ar: self.get_ar(),
            n_objects: skill.n_objects,
            max_combo: skill.max_combo,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_objects = attrs.n_objects,
            flashlight = attrs.flashlight,
            "Calculated difficulty"
        );

        Ok(attrs)
    }

    /// Calculate the strain after every object.
    ///
    /// Suitable to plot the difficulty over time.
    pub fn strains(&self, hit_objects: &[HitObject]) -> Result<FlashlightStrains> {
        self.run(hit_objects).map(|skill| FlashlightStrains {
            samples: skill.samples,
        })
    }

    fn flashlight(&self) -> Flashlight {
        Flashlight::new(self.scoring)
    }

    fn checked_scaling_factor(&self) -> Result<f32> {
        let factor = self.get_scaling_factor().factor;

        if factor.is_finite() && factor > 0.0 {
            Ok(factor)
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(factor, "Rejected scaling factor");

            Err(ConfigError::ScalingFactor(factor).into())
        }
    }

    fn check_config<R: ScoringRule>(&self, rule: &R) -> Result<()> {
        self.checked_scaling_factor()?;

        let res = self.config.validate(rule.requires_history());

        #[cfg(feature = "tracing")]
        if let Err(ref err) = res {
            tracing::warn!(%err, "Rejected strain configuration");
        }

        res.map_err(From::from)
    }

    fn run(&self, hit_objects: &[HitObject]) -> Result<ProcessedSkill> {
        let rule = self.flashlight();
        self.check_config(&rule)?;

        let diff_objects = self.difficulty_objects(hit_objects)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_objects = diff_objects.len(),
            clock_rate = self.get_clock_rate(),
            "Preprocessed hit objects"
        );

        let mut skill = StrainSkill::with_capacity(rule, self.config, diff_objects.len())?;
        skill.process_all(&diff_objects)?;

        Ok(ProcessedSkill {
            difficulty_value: skill.difficulty_value(),
            n_objects: diff_objects.len() as u32,
            max_combo: diff_objects.last().map_or(0, |obj| obj.cumulative_combo),
            samples: skill.into_samples(),
        })
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// The strain samples of a flashlight calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashlightStrains {
    /// Samples in processing order; `inspect` holds the visibility radius.
    pub samples: Vec<StrainSample<f64>>,
}

impl FlashlightStrains {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

struct ProcessedSkill {
    difficulty_value: f64,
    n_objects: u32,
    max_combo: u32,
    samples: Vec<StrainSample<f64>>,
}

fn clock_rate_of(mods: GameModsLegacy) -> f64 {
    if mods.intersects(GameModsLegacy::DoubleTime | GameModsLegacy::Nightcore) {
        1.5
    } else if mods.contains(GameModsLegacy::HalfTime) {
        0.75
    } else {
        1.0
    }
}
