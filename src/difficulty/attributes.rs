/// The result of a difficulty calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyAttributes {
    /// The flashlight difficulty, i.e. the aggregated strain.
    pub flashlight: f64,
    /// The approach rate after applying the clock rate.
    pub ar: f64,
    /// The amount of processed hit objects.
    pub n_objects: u32,
    /// The cumulative combo of the last processed object.
    pub max_combo: u32,
}

impl DifficultyAttributes {
    /// Return the flashlight difficulty.
    pub const fn difficulty(&self) -> f64 {
        self.flashlight
    }

    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }
}
