//! Strain-based difficulty calculation for sequences of rhythm game objects.
//!
//! Hit objects are preprocessed into [`DifficultyObject`]s which are then fed
//! one by one through a [`StrainSkill`]. For every object, the skill decays its
//! running strain, adds the contribution of its [`ScoringRule`], and records a
//! [`StrainSample`]. All samples are finally aggregated into a single value by
//! sorting them descendingly and summing them with geometrically decreasing
//! weights.
//!
//! The crate comes with the [`Flashlight`] rule whose contribution is based on
//! the covered distance, or alternatively the combo, while exposing a
//! visibility radius that shrinks as combo grows.
//!
//! ## Usage
//!
//! ```
//! use strain_difficulty::{Difficulty, HitObject, HitObjectKind, Pos, Slider};
//!
//! let objects = vec![
//!     HitObject::new(Pos::new(100.0, 100.0), 1000.0, HitObjectKind::Circle),
//!     HitObject::new(
//!         Pos::new(200.0, 100.0),
//!         1300.0,
//!         HitObjectKind::Slider(Slider {
//!             end_pos: Pos::new(300.0, 100.0),
//!             path_len: 100.0,
//!             repeats: 0,
//!         }),
//!     ),
//!     HitObject::new(Pos::new(300.0, 200.0), 1700.0, HitObjectKind::Circle),
//! ];
//!
//! let attrs = Difficulty::new()
//!     .cs(4.0)
//!     .ar(9.0)
//!     .calculate(&objects)
//!     .unwrap();
//!
//! assert_eq!(attrs.n_objects, 3);
//! assert_eq!(attrs.max_combo, 4);
//! assert!(attrs.flashlight > 0.0);
//! ```
//!
//! ## Custom rules
//!
//! Implementing [`ScoringRule`] is sufficient to run a [`StrainSkill`] with
//! different semantics.
//!
//! ```
//! use strain_difficulty::{
//!     Difficulty, DifficultyObject, History, HitObject, HitObjectKind, Pos, ScoringRule,
//!     StrainConfig, StrainSkill,
//! };
//!
//! struct Density;
//!
//! impl ScoringRule for Density {
//!     type Inspect = ();
//!
//!     fn requires_history(&self) -> bool {
//!         false
//!     }
//!
//!     fn inspect(&self, _: &DifficultyObject) {}
//!
//!     fn strain_value_of(&mut self, _: &DifficultyObject, _: &History<'_>) -> f64 {
//!         1.0
//!     }
//! }
//!
//! let objects: Vec<_> = (0..4_u32)
//!     .map(|i| HitObject::new(Pos::default(), f64::from(i) * 100.0, HitObjectKind::Circle))
//!     .collect();
//!
//! let diff_objects = Difficulty::new().difficulty_objects(&objects).unwrap();
//!
//! let config = StrainConfig::FLASHLIGHT.skill_multiplier(1.0).history_len(0);
//! let mut skill = StrainSkill::new(Density, config).unwrap();
//! skill.process_all(&diff_objects).unwrap();
//!
//! assert_eq!(skill.difficulty_value(), 1.0 + 2.0 + 3.0 + 4.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description |
//! | ---- | ----------- |
//! | `default` | No features enabled |
//! | `tracing` | Log calculation steps and rejected configurations through the `tracing` crate |

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::float_cmp
)]

#[doc(inline)]
pub use self::{
    difficulty::{
        Difficulty, DifficultyAttributes, FlashlightStrains,
        config::StrainConfig,
        evaluators::{FlashlightEvaluator, FlashlightScoring},
        gradual::GradualDifficulty,
        object::{DifficultyObject, ObjectKind, create_difficulty_objects},
        scaling_factor::ScalingFactor,
        skills::{
            EngineState, Flashlight, History, ScoringRule, StrainSample, StrainSkill,
            difficulty_value,
        },
    },
    error::{ConfigError, DifficultyError, Result},
    model::hit_object::{HitObject, HitObjectKind, Pos, Slider},
};

/// Difficulty calculation.
pub mod difficulty;

/// Hitobject types.
pub mod model;

mod error;
mod util;
