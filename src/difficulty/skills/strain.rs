/// Aggregate strains into a single difficulty value.
///
/// Strains are sorted descendingly and the `i`-th one is weighted by
/// `decay_weight^i`. No further normalization takes place.
pub fn difficulty_value(strains: impl IntoIterator<Item = f64>, decay_weight: f64) -> f64 {
    let mut strains: Vec<f64> = strains.into_iter().collect();

    // Sorting by value only so that the outcome does not depend on the
    // original order of equal strains.
    strains.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in strains {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}
