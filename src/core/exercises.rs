use rand::seq::SliceRandom;
use rand::Rng;
use crate::core::{error::CoreError, metrics::bmi};
use crate::models::{
    ExerciseCategory, ExerciseRecommendations, ExerciseRecord, ExerciseSuggestion, Goal, Goals,
    HealthStatus, Profile,
};

/// Goals with their own category weights, checked in this order
const WEIGHT_PRIORITY: [Goal; 2] = [Goal::WeightLoss, Goal::MuscleGain];

/// Random exercises drawn to refill an empty category
const BACKFILL_SAMPLE: usize = 5;

/// Health-condition fragments that call for low-intensity training
const LOW_INTENSITY_CONDITIONS: [&str; 4] = ["heart", "diabetes", "respiratory", "joint"];

/// Share of the requested exercises given to each category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub cardio: f64,
    pub strength: f64,
    pub flexibility: f64,
}

impl CategoryWeights {
    /// Weights for the highest-priority goal mentioned
    pub fn for_goals(goals: &Goals) -> Self {
        match goals.resolve(&WEIGHT_PRIORITY) {
            Some(Goal::WeightLoss) => Self {
                cardio: 0.5,
                strength: 0.2,
                flexibility: 0.3,
            },
            Some(Goal::MuscleGain) => Self {
                cardio: 0.1,
                strength: 0.7,
                flexibility: 0.2,
            },
            _ => Self::default(),
        }
    }

    pub fn weight(&self, category: ExerciseCategory) -> f64 {
        match category {
            ExerciseCategory::Cardio => self.cardio,
            ExerciseCategory::Strength => self.strength,
            ExerciseCategory::Flexibility => self.flexibility,
        }
    }

    /// Maximum items accepted into a category for `limit` requested exercises
    #[inline]
    pub fn quota(&self, category: ExerciseCategory, limit: usize) -> usize {
        (limit as f64 * self.weight(category)).floor() as usize
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            cardio: 0.3,
            strength: 0.4,
            flexibility: 0.3,
        }
    }
}

/// Equipment-type fragments identifying each category
fn category_keywords(category: ExerciseCategory) -> &'static [&'static str] {
    match category {
        ExerciseCategory::Cardio => &["cardio", "hiit", "aerobic"],
        ExerciseCategory::Strength => &["strength", "resistance", "weight", "bodyweight"],
        ExerciseCategory::Flexibility => &["stretch", "yoga", "mobility", "flexibility"],
    }
}

/// Categorize an exercise by its equipment type
///
/// The first category (Cardio, Strength, Flexibility) with a keyword found in
/// the equipment text wins; anything unmatched counts as Strength.
pub fn categorize_exercise(exercise: &ExerciseRecord) -> ExerciseCategory {
    let equipment = exercise.equipment_type.trim().to_lowercase();

    ExerciseCategory::ALL
        .into_iter()
        .find(|category| {
            category_keywords(*category)
                .iter()
                .any(|keyword| equipment.contains(keyword))
        })
        .unwrap_or(ExerciseCategory::Strength)
}

/// Whether the profile's health suggests keeping intensity low
pub fn needs_low_intensity(profile: &Profile) -> bool {
    let (_, status) = bmi(profile.weight_kg, profile.height_cm);
    let conditions = profile.health_conditions.to_lowercase();

    matches!(status, HealthStatus::Underweight | HealthStatus::Obese)
        || LOW_INTENSITY_CONDITIONS
            .iter()
            .any(|condition| conditions.contains(condition))
}

/// Recommend exercises bucketed into Cardio, Strength and Flexibility
///
/// Exercises are taken in catalog order until each category holds
/// `floor(limit * weight)` items. A category left empty is refilled from up
/// to five randomly drawn exercises, regardless of their category, capped at
/// its quota. The backfill is a fallback, not a ranking.
///
/// # Errors
/// * [`CoreError::EmptyExerciseCatalog`] when `exercises` is empty
pub fn recommend_exercises<R: Rng + ?Sized>(
    profile: &Profile,
    exercises: &[ExerciseRecord],
    limit: usize,
    rng: &mut R,
) -> Result<ExerciseRecommendations, CoreError> {
    if exercises.is_empty() {
        return Err(CoreError::EmptyExerciseCatalog);
    }

    let weights = CategoryWeights::for_goals(&profile.goals());
    let mut recommendations = ExerciseRecommendations {
        low_intensity: needs_low_intensity(profile),
        ..ExerciseRecommendations::default()
    };

    for exercise in exercises.iter().filter(|e| !e.name.trim().is_empty()) {
        let category = categorize_exercise(exercise);
        let bucket = recommendations.bucket_mut(category);

        if bucket.len() < weights.quota(category, limit) {
            bucket.push(ExerciseSuggestion::from(exercise));
        }
    }

    for category in ExerciseCategory::ALL {
        if !recommendations.bucket(category).is_empty() {
            continue;
        }

        let quota = weights.quota(category, limit);
        let backfill: Vec<ExerciseSuggestion> = exercises
            .choose_multiple(rng, BACKFILL_SAMPLE.min(exercises.len()))
            .filter(|e| !e.name.trim().is_empty())
            .map(ExerciseSuggestion::from)
            .take(quota)
            .collect();

        tracing::debug!(
            "Backfilled empty {:?} bucket with {} random exercises",
            category,
            backfill.len()
        );

        *recommendations.bucket_mut(category) = backfill;
    }

    Ok(recommendations)
}
