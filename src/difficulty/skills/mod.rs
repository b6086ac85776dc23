use std::{collections::VecDeque, fmt::Debug};

use crate::{
    difficulty::{config::StrainConfig, object::DifficultyObject},
    error::{DifficultyError, Result},
};

pub use self::{flashlight::Flashlight, strain::difficulty_value};

pub mod flashlight;
pub mod strain;

/// Multiplier that decays strain over `ms` milliseconds.
pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// Maps an object and its recent history onto a raw strain contribution.
pub trait ScoringRule {
    /// Additional value exposed alongside every strain sample.
    type Inspect: Copy + Debug;

    /// Whether the rule is meaningless without previous objects.
    fn requires_history(&self) -> bool {
        true
    }

    /// Whether zero-contribution objects still produce a strain sample.
    fn emit_zero_contribution(&self) -> bool {
        true
    }

    fn inspect(&self, curr: &DifficultyObject) -> Self::Inspect;

    /// Only called for objects that are not zero-contribution.
    fn strain_value_of(&mut self, curr: &DifficultyObject, history: &History<'_>) -> f64;
}

/// Decayed strain right after processing an object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainSample<I> {
    pub time: f64,
    pub strain: f64,
    pub inspect: I,
}

/// Previously processed objects, most recent first.
#[derive(Clone, Debug)]
pub struct History<'a> {
    objects: VecDeque<&'a DifficultyObject>,
    capacity: usize,
}

impl<'a> History<'a> {
    pub fn new(capacity: usize) -> Self {
        Self {
            objects: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The object `backwards_idx + 1` steps in the past.
    pub fn previous(&self, backwards_idx: usize) -> Option<&'a DifficultyObject> {
        self.objects.get(backwards_idx).copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.objects.len() >= self.capacity
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a DifficultyObject> + '_ {
        self.objects.iter().copied()
    }

    pub(crate) fn push(&mut self, obj: &'a DifficultyObject) {
        if self.capacity == 0 {
            return;
        }

        if self.objects.len() == self.capacity {
            self.objects.pop_back();
        }

        self.objects.push_front(obj);
    }
}

/// Lifecycle of a [`StrainSkill`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No object processed yet.
    Empty,
    /// At least one object processed but the history is not yet full.
    Warm,
    /// The history is at capacity.
    Steady,
}

/// Sliding-window strain tracker driven by a [`ScoringRule`].
///
/// Objects must be processed in order of their start time. Once all objects
/// are processed, the engine is consumed through [`StrainSkill::into_samples`]
/// or queried for its [`StrainSkill::difficulty_value`].
#[derive(Clone, Debug)]
pub struct StrainSkill<'a, R: ScoringRule> {
    rule: R,
    config: StrainConfig,
    current_strain: f64,
    prev_start_time: Option<f64>,
    history: History<'a>,
    samples: Vec<StrainSample<R::Inspect>>,
}

impl<'a, R: ScoringRule> StrainSkill<'a, R> {
    /// Fails with [`DifficultyError::InvalidConfiguration`] if `config` does
    /// not suit the rule.
    pub fn new(rule: R, config: StrainConfig) -> Result<Self> {
        config.validate(rule.requires_history())?;

        Ok(Self {
            rule,
            config,
            current_strain: 0.0,
            prev_start_time: None,
            history: History::new(config.history_len),
            samples: Vec::new(),
        })
    }

    /// Same as [`StrainSkill::new`] but reserves space for `len` samples.
    pub fn with_capacity(rule: R, config: StrainConfig, len: usize) -> Result<Self> {
        let mut this = Self::new(rule, config)?;
        this.samples.reserve_exact(len);

        Ok(this)
    }

    pub fn process(&mut self, curr: &'a DifficultyObject) -> Result<()> {
        curr.validate()?;

        let elapsed = match self.prev_start_time {
            Some(prev) if curr.start_time < prev => {
                return Err(DifficultyError::OutOfOrderInput {
                    idx: curr.idx,
                    prev,
                    curr: curr.start_time,
                });
            }
            Some(prev) => curr.start_time - prev,
            None => 0.0,
        };

        self.current_strain *= strain_decay(elapsed, self.config.decay_base);

        let zero_contribution = curr.is_zero_contribution();

        let raw = if zero_contribution {
            0.0
        } else {
            self.rule.strain_value_of(curr, &self.history)
        };

        if !raw.is_finite() || raw < 0.0 {
            return Err(DifficultyError::InvalidObjectMetric {
                idx: curr.idx,
                metric: "strain contribution",
                value: raw,
            });
        }

        self.current_strain += raw * self.config.skill_multiplier;

        if !zero_contribution || self.rule.emit_zero_contribution() {
            self.samples.push(StrainSample {
                time: curr.start_time,
                strain: self.current_strain,
                inspect: self.rule.inspect(curr),
            });
        }

        self.prev_start_time = Some(curr.start_time);
        self.history.push(curr);

        Ok(())
    }

    /// Process all objects in order, aborting on the first error.
    pub fn process_all(
        &mut self,
        objects: impl IntoIterator<Item = &'a DifficultyObject>,
    ) -> Result<()> {
        objects.into_iter().try_for_each(|obj| self.process(obj))
    }

    pub fn state(&self) -> EngineState {
        if self.prev_start_time.is_none() {
            EngineState::Empty
        } else if self.history.is_full() {
            EngineState::Steady
        } else {
            EngineState::Warm
        }
    }

    pub const fn current_strain(&self) -> f64 {
        self.current_strain
    }

    pub const fn config(&self) -> &StrainConfig {
        &self.config
    }

    pub const fn rule(&self) -> &R {
        &self.rule
    }

    pub fn samples(&self) -> &[StrainSample<R::Inspect>] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<StrainSample<R::Inspect>> {
        self.samples
    }

    /// Aggregate all samples so far with the configured decay weight.
    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(
            self.samples.iter().map(|sample| sample.strain),
            self.config.decay_weight,
        )
    }
}
