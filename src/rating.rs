use crate::error::CatalogError;
use crate::models::CategoryRatings;

/// Checks every category score is finite and within [0, 10]. The error names
/// the first offending category and its value. Pure, no side effects.
pub fn validate(ratings: &CategoryRatings) -> Result<(), CatalogError> {
    for (name, value) in ratings.fields() {
        if !value.is_finite() || !(0.0..=10.0).contains(&value) {
            return Err(CatalogError::Validation(format!(
                "{name} must be between 0 and 10, got {value}"
            )));
        }
    }
    Ok(())
}

/// Arithmetic mean of the seven category scores, rounded to one decimal with
/// halves away from zero (`f64::round` semantics). Deterministic and pure;
/// every write path re-derives the overall value from the current ratings
/// rather than trusting a stored copy.
pub fn compute_overall(ratings: &CategoryRatings) -> f64 {
    let sum: f64 = ratings.fields().iter().map(|(_, v)| v).sum();
    round_to_tenth(sum / CategoryRatings::COUNT as f64)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
