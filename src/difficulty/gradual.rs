use std::{iter::FusedIterator, slice};

use crate::error::Result;

use super::{
    Difficulty, DifficultyAttributes,
    object::DifficultyObject,
    skills::{Flashlight, StrainSkill},
};

/// Gradually calculate the difficulty attributes after each object.
///
/// Note that this iterator borrows the preprocessed objects so they need to
/// be created beforehand through [`Difficulty::difficulty_objects`].
///
/// Iteration stops after the first error.
///
/// # Example
///
/// ```
/// use strain_difficulty::{Difficulty, GradualDifficulty, HitObject, HitObjectKind, Pos};
///
/// let objects = [
///     HitObject::new(Pos::new(0.0, 0.0), 0.0, HitObjectKind::Circle),
///     HitObject::new(Pos::new(50.0, 0.0), 500.0, HitObjectKind::Circle),
///     HitObject::new(Pos::new(50.0, 30.0), 1000.0, HitObjectKind::Circle),
/// ];
///
/// let difficulty = Difficulty::new().scaling_factor(1.0);
/// let diff_objects = difficulty.difficulty_objects(&objects).unwrap();
/// let mut gradual = GradualDifficulty::new(&difficulty, &diff_objects).unwrap();
///
/// let values: Vec<_> = gradual
///     .by_ref()
///     .map(|attrs| attrs.unwrap().flashlight)
///     .collect();
///
/// assert_eq!(values, [0.0, 250_000.0, 650_000.0]);
/// assert!(gradual.next().is_none());
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct GradualDifficulty<'a> {
    diff_objects: slice::Iter<'a, DifficultyObject>,
    skill: StrainSkill<'a, Flashlight>,
    attrs: DifficultyAttributes,
    failed: bool,
}

impl<'a> GradualDifficulty<'a> {
    /// Fails if the [`Difficulty`]'s strain configuration or scaling factor
    /// is invalid.
    pub fn new(difficulty: &Difficulty, diff_objects: &'a [DifficultyObject]) -> Result<Self> {
        let rule = difficulty.flashlight();
        difficulty.check_config(&rule)?;

        let skill = StrainSkill::with_capacity(rule, difficulty.config, diff_objects.len())?;

        let attrs = DifficultyAttributes {
            ar: difficulty.get_ar(),
            ..Default::default()
        };

        Ok(Self {
            diff_objects: diff_objects.iter(),
            skill,
            attrs,
            failed: false,
        })
    }
}

impl Iterator for GradualDifficulty<'_> {
    type Item = Result<DifficultyAttributes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let curr = self.diff_objects.next()?;

        if let Err(err) = self.skill.process(curr) {
            self.failed = true;

            return Some(Err(err));
        }

        self.attrs.flashlight = self.skill.difficulty_value();
        self.attrs.n_objects += 1;
        self.attrs.max_combo = curr.cumulative_combo;

        Some(Ok(self.attrs.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.diff_objects.len()))
        }
    }
}

impl FusedIterator for GradualDifficulty<'_> {}
