use crate::difficulty::{
    object::{DifficultyObject, ObjectKind},
    skills::History,
};

/// Which quantity the flashlight rule rewards.
///
/// Both variants exist in the rule's lineage. They are kept apart on purpose
/// and never blended.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FlashlightScoring {
    /// Reward spatial coverage: `jump_dist + travel_dist`.
    #[default]
    Distance,
    /// Reward combo growth: the cumulative combo itself.
    Combo,
}

pub struct FlashlightEvaluator;

impl FlashlightEvaluator {
    const RADIUS_LARGE: f64 = 160.0;
    const RADIUS_MEDIUM: f64 = 120.0;
    const RADIUS_SMALL: f64 = 100.0;

    const MEDIUM_COMBO: u32 = 100;
    const SMALL_COMBO: u32 = 200;

    /// Radius of the visible area around the cursor which shrinks as combo
    /// grows.
    pub const fn visibility_radius(cumulative_combo: u32) -> f64 {
        if cumulative_combo < Self::MEDIUM_COMBO {
            Self::RADIUS_LARGE
        } else if cumulative_combo < Self::SMALL_COMBO {
            Self::RADIUS_MEDIUM
        } else {
            Self::RADIUS_SMALL
        }
    }

    pub fn evaluate_diff_of(
        curr: &DifficultyObject,
        history: &History<'_>,
        scoring: FlashlightScoring,
    ) -> f64 {
        match curr.kind {
            ObjectKind::Spinner | ObjectKind::Hold | ObjectKind::Marker => return 0.0,
            ObjectKind::Circle | ObjectKind::Slider => {}
        }

        if history.is_empty() {
            return 0.0;
        }

        match scoring {
            FlashlightScoring::Distance => curr.jump_dist + curr.travel_dist,
            FlashlightScoring::Combo => f64::from(curr.cumulative_combo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(idx: usize, kind: ObjectKind, cumulative_combo: u32) -> DifficultyObject {
        DifficultyObject {
            idx,
            kind,
            start_time: idx as f64 * 100.0,
            delta_time: 100.0,
            jump_dist: 40.0,
            travel_dist: 15.0,
            cumulative_combo,
        }
    }

    #[test]
    fn radius_thresholds() {
        let radii = [0, 99, 100, 199, 200, 500].map(FlashlightEvaluator::visibility_radius);

        assert_eq!(radii, [160.0, 160.0, 120.0, 120.0, 100.0, 100.0]);
    }

    #[test]
    fn first_object_contributes_nothing() {
        let curr = object(0, ObjectKind::Circle, 1);
        let history = History::new(1);

        for scoring in [FlashlightScoring::Distance, FlashlightScoring::Combo] {
            assert_eq!(
                FlashlightEvaluator::evaluate_diff_of(&curr, &history, scoring),
                0.0
            );
        }
    }

    #[test]
    fn scoring_variants() {
        let prev = object(0, ObjectKind::Circle, 1);
        let curr = object(1, ObjectKind::Slider, 3);

        let mut history = History::new(1);
        history.push(&prev);

        assert_eq!(
            FlashlightEvaluator::evaluate_diff_of(&curr, &history, FlashlightScoring::Distance),
            55.0
        );
        assert_eq!(
            FlashlightEvaluator::evaluate_diff_of(&curr, &history, FlashlightScoring::Combo),
            3.0
        );
    }

    #[test]
    fn no_motion_objects() {
        let prev = object(0, ObjectKind::Circle, 1);
        let mut history = History::new(1);
        history.push(&prev);

        for kind in [ObjectKind::Spinner, ObjectKind::Hold, ObjectKind::Marker] {
            let curr = object(1, kind, 2);

            assert_eq!(
                FlashlightEvaluator::evaluate_diff_of(&curr, &history, FlashlightScoring::Combo),
                0.0
            );
        }
    }
}
