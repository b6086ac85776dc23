use crate::difficulty::{
    evaluators::{FlashlightEvaluator, FlashlightScoring},
    object::DifficultyObject,
};

use super::{History, ScoringRule};

/// Strain rule for reading patterns through a limited area of vision.
///
/// Every sample carries the visibility radius at that point of the map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flashlight {
    scoring: FlashlightScoring,
}

impl Flashlight {
    pub const fn new(scoring: FlashlightScoring) -> Self {
        Self { scoring }
    }

    pub const fn scoring(&self) -> FlashlightScoring {
        self.scoring
    }
}

impl ScoringRule for Flashlight {
    type Inspect = f64;

    fn inspect(&self, curr: &DifficultyObject) -> f64 {
        FlashlightEvaluator::visibility_radius(curr.cumulative_combo)
    }

    fn strain_value_of(&mut self, curr: &DifficultyObject, history: &History<'_>) -> f64 {
        FlashlightEvaluator::evaluate_diff_of(curr, history, self.scoring)
    }
}
