use thiserror::Error;

/// Conditions under which the core returns an error instead of a result.
///
/// Everything else (missing nutrients, unknown goal or diet text, empty
/// exercise buckets) falls back to a default silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("No foods available that match your dietary preferences")]
    EmptyCatalog,

    #[error("Food data is missing calorie information")]
    MissingCalories,

    #[error("No exercise data available")]
    EmptyExerciseCatalog,

    #[error("Weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
}

impl CoreError {
    /// Stable machine-readable tag
    pub fn tag(&self) -> &'static str {
        match self {
            CoreError::EmptyCatalog => "empty_catalog",
            CoreError::MissingCalories => "missing_calories",
            CoreError::EmptyExerciseCatalog => "empty_exercise_catalog",
            CoreError::InvalidWeight(_) => "invalid_weight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_tags() {
        assert_eq!(CoreError::EmptyCatalog.tag(), "empty_catalog");
        assert_eq!(CoreError::MissingCalories.tag(), "missing_calories");
        assert_eq!(CoreError::EmptyExerciseCatalog.tag(), "empty_exercise_catalog");
        assert_eq!(CoreError::InvalidWeight(-1.0).tag(), "invalid_weight");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::EmptyCatalog.to_string(),
            "No foods available that match your dietary preferences"
        );
    }
}
