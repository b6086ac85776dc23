use crate::{
    error::{DifficultyError, Result},
    model::hit_object::{HitObject, HitObjectKind},
};

/// A [`HitObject`] enriched with the metrics a scoring rule needs.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyObject {
    pub idx: usize,
    pub kind: ObjectKind,
    pub start_time: f64,
    pub delta_time: f64,
    pub jump_dist: f64,
    pub travel_dist: f64,
    pub cumulative_combo: u32,
}

impl DifficultyObject {
    pub const NORMALIZED_RADIUS: i32 = 50;

    /// Create the difficulty object of `hit_object`.
    ///
    /// `last_object` is the previous raw object, if any, and
    /// `cumulative_combo` the combo up to and including `hit_object`.
    pub fn new(
        hit_object: &HitObject,
        last_object: Option<&HitObject>,
        cumulative_combo: u32,
        clock_rate: f64,
        scaling_factor: f32,
        idx: usize,
    ) -> Self {
        let start_time = hit_object.start_time / clock_rate;

        let Some(last_object) = last_object else {
            return Self {
                idx,
                kind: ObjectKind::from(&hit_object.kind),
                start_time,
                delta_time: 0.0,
                jump_dist: 0.0,
                travel_dist: 0.0,
                cumulative_combo,
            };
        };

        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;

        let jump_dist = f64::from(
            (hit_object.pos * scaling_factor - last_object.end_pos() * scaling_factor).length(),
        );

        let travel_dist = match last_object.kind {
            HitObjectKind::Slider(ref slider) => {
                slider.total_path_len() * f64::from(scaling_factor)
            }
            _ => 0.0,
        };

        Self {
            idx,
            kind: ObjectKind::from(&hit_object.kind),
            start_time,
            delta_time,
            jump_dist,
            travel_dist,
            cumulative_combo,
        }
    }

    /// Whether the object never adds strain, regardless of the scoring rule.
    pub const fn is_zero_contribution(&self) -> bool {
        self.kind.is_zero_contribution()
    }

    /// Fails if any metric is unusable for strain calculation.
    pub(crate) fn validate(&self) -> Result<()> {
        let metrics = [
            ("start time", self.start_time, false),
            ("delta time", self.delta_time, true),
            ("jump distance", self.jump_dist, true),
            ("travel distance", self.travel_dist, true),
        ];

        for (metric, value, non_negative) in metrics {
            if !value.is_finite() || (non_negative && value < 0.0) {
                return Err(DifficultyError::InvalidObjectMetric {
                    idx: self.idx,
                    metric,
                    value,
                });
            }
        }

        Ok(())
    }
}

/// The kind of a [`DifficultyObject`], resolved once during preprocessing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Circle,
    Slider,
    Spinner,
    Hold,
    Marker,
}

impl ObjectKind {
    /// Spinners, hold notes, and markers have no spatial meaning.
    pub const fn is_zero_contribution(self) -> bool {
        matches!(self, Self::Spinner | Self::Hold | Self::Marker)
    }
}

impl From<&HitObjectKind> for ObjectKind {
    fn from(kind: &HitObjectKind) -> Self {
        match kind {
            HitObjectKind::Circle => Self::Circle,
            HitObjectKind::Slider(_) => Self::Slider,
            HitObjectKind::Spinner => Self::Spinner,
            HitObjectKind::Hold => Self::Hold,
            HitObjectKind::Marker => Self::Marker,
        }
    }
}

/// Turn time-sorted hit objects into [`DifficultyObject`]s.
///
/// Fails if an object starts before its predecessor or carries a
/// non-finite time or position.
pub fn create_difficulty_objects(
    hit_objects: &[HitObject],
    scaling_factor: f32,
    clock_rate: f64,
) -> Result<Vec<DifficultyObject>> {
    let mut diff_objects = Vec::with_capacity(hit_objects.len());
    let mut last: Option<&HitObject> = None;
    let mut combo = 0;

    for (idx, h) in hit_objects.iter().enumerate() {
        check_raw(idx, h)?;

        if let Some(last) = last {
            if h.start_time < last.start_time {
                return Err(DifficultyError::OutOfOrderInput {
                    idx,
                    prev: last.start_time,
                    curr: h.start_time,
                });
            }
        }

        combo = next_combo(idx, h, combo)?;

        let diff_object = DifficultyObject::new(h, last, combo, clock_rate, scaling_factor, idx);
        last = Some(h);

        diff_objects.push(diff_object);
    }

    Ok(diff_objects)
}

fn next_combo(idx: usize, h: &HitObject, combo: u32) -> Result<u32> {
    let weight = h.combo_weight().ok_or_else(|| {
        let value = match h.kind {
            HitObjectKind::Slider(ref slider) => slider.repeats as f64,
            _ => f64::NAN,
        };

        DifficultyError::InvalidObjectMetric {
            idx,
            metric: "combo",
            value,
        }
    })?;

    combo
        .checked_add(weight)
        .ok_or(DifficultyError::InvalidObjectMetric {
            idx,
            metric: "combo",
            value: f64::from(combo) + f64::from(weight),
        })
}

fn check_raw(idx: usize, h: &HitObject) -> Result<()> {
    let end_pos = h.end_pos();

    let metrics = [
        ("start time", h.start_time),
        ("x position", f64::from(h.pos.x)),
        ("y position", f64::from(h.pos.y)),
        ("x end position", f64::from(end_pos.x)),
        ("y end position", f64::from(end_pos.y)),
    ];

    for (metric, value) in metrics {
        if !value.is_finite() {
            return Err(DifficultyError::InvalidObjectMetric { idx, metric, value });
        }
    }

    if let HitObjectKind::Slider(ref slider) = h.kind {
        if !slider.path_len.is_finite() || slider.path_len < 0.0 {
            return Err(DifficultyError::InvalidObjectMetric {
                idx,
                metric: "path length",
                value: slider.path_len,
            });
        }
    }

    Ok(())
}
