use crate::core::filters::filter_by_diet;
use crate::models::{FoodRecommendation, FoodRecord, Goal, Goals, Profile};

/// Goals with their own scoring formula, checked in this order
const SCORING_PRIORITY: [Goal; 3] = [Goal::WeightLoss, Goal::WeightGain, Goal::MuscleGain];

/// Score given to foods that cannot be scored; always excluded from results
pub const UNSCORABLE: f64 = -1.0;

/// Score a food against a goal (higher is better)
///
/// Scoring formulas:
/// - weight loss: 5 * protein/kcal + 3 * fiber/kcal - 0.1 * sugar
/// - weight gain: 3 * kcal/100 + 2 * protein/kcal
/// - muscle gain: 2 * protein + 5 * protein/kcal
/// - otherwise:   5 * (protein + 2 * fiber + nutrition_density/100) / kcal
///
/// Per-calorie ratios divide by at least 1 kcal. Foods without positive
/// calories score [`UNSCORABLE`].
pub fn calculate_food_score(food: &FoodRecord, goals: &Goals) -> f64 {
    let Some(calories) = food.usable_calories() else {
        return UNSCORABLE;
    };

    let per_calorie = |amount: f64| amount / calories.max(1.0);

    match goals.resolve(&SCORING_PRIORITY) {
        Some(Goal::WeightLoss) => {
            per_calorie(food.protein_g) * 5.0 + per_calorie(food.fiber_g) * 3.0
                - food.sugar_g * 0.1
        }
        Some(Goal::WeightGain) => (calories / 100.0) * 3.0 + per_calorie(food.protein_g) * 2.0,
        Some(Goal::MuscleGain) => food.protein_g * 2.0 + per_calorie(food.protein_g) * 5.0,
        _ => {
            let density = food.protein_g + food.fiber_g * 2.0 + food.nutrition_density / 100.0;
            per_calorie(density) * 5.0
        }
    }
}

/// Recommend the `limit` best foods for the profile's goal
///
/// The catalog is filtered by diet first. Results are sorted by descending
/// score; equal scores keep catalog order (stable sort). Foods scoring zero
/// or below are dropped after truncation, so fewer than `limit` may return.
pub fn recommend_foods(
    profile: &Profile,
    foods: &[FoodRecord],
    limit: usize,
) -> Vec<FoodRecommendation> {
    let goals = profile.goals();
    let catalog = filter_by_diet(foods, profile.diet_preference);

    let mut scored: Vec<(&FoodRecord, f64)> = catalog
        .into_iter()
        .map(|food| (food, calculate_food_score(food, &goals)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);

    let recommendations: Vec<FoodRecommendation> = scored
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(food, score)| FoodRecommendation {
            name: food.name.clone(),
            calories: food.calories.unwrap_or(0.0),
            protein_g: food.protein_g,
            carbs_g: food.carbs_g,
            fat_g: food.fat_g,
            score,
        })
        .collect();

    tracing::debug!(
        "Recommended {} foods for goal '{}' (limit {})",
        recommendations.len(),
        profile.goal,
        limit
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietPreference;

    fn create_food(name: &str, calories: f64, protein_g: f64, fiber_g: f64, sugar_g: f64) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            calories: Some(calories),
            protein_g,
            fiber_g,
            sugar_g,
            ..FoodRecord::default()
        }
    }

    fn create_profile(goal: &str) -> Profile {
        Profile {
            goal: goal.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_weight_loss_score() {
        let food = create_food("Lentils", 100.0, 10.0, 5.0, 1.0);
        let score = calculate_food_score(&food, &Goals::from(Goal::WeightLoss));
        // 5 * 0.1 + 3 * 0.05 - 0.1
        assert!((score - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_weight_gain_score() {
        let food = create_food("Peanut Butter", 600.0, 24.0, 6.0, 9.0);
        let score = calculate_food_score(&food, &Goals::from(Goal::WeightGain));
        assert!((score - (18.0 + 0.08)).abs() < 1e-9);
    }

    #[test]
    fn test_muscle_gain_score() {
        let food = create_food("Tuna", 120.0, 26.0, 0.0, 0.0);
        let score = calculate_food_score(&food, &Goals::from(Goal::MuscleGain));
        assert!((score - (52.0 + 5.0 * 26.0 / 120.0)).abs() < 1e-9);
    }

    #[test]
    fn test_maintain_score() {
        let mut food = create_food("Spinach", 20.0, 3.0, 2.0, 0.0);
        food.nutrition_density = 200.0;
        let score = calculate_food_score(&food, &Goals::parse("Maintain Weight"));
        // 5 * (3 + 4 + 2) / 20
        assert!((score - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_unscorable_food() {
        let mut food = create_food("Water", 0.0, 0.0, 0.0, 0.0);
        assert_eq!(calculate_food_score(&food, &Goals::default()), UNSCORABLE);
        food.calories = None;
        assert_eq!(calculate_food_score(&food, &Goals::default()), UNSCORABLE);
    }

    #[test]
    fn test_recommendations_sorted_and_limited() {
        let foods = vec![
            create_food("Rice", 130.0, 2.7, 0.4, 0.1),
            create_food("Chicken Breast", 165.0, 31.0, 0.0, 0.0),
            create_food("Egg White", 52.0, 11.0, 0.0, 0.7),
            create_food("Cola", 140.0, 0.0, 0.0, 39.0),
            create_food("Broccoli", 34.0, 2.8, 2.6, 1.7),
        ];

        let recs = recommend_foods(&create_profile("Weight Loss"), &foods, 3);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].name, "Egg White");
        assert_eq!(recs[1].name, "Chicken Breast");
        assert_eq!(recs[2].name, "Broccoli");
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(recs.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn test_negative_scores_dropped() {
        let foods = vec![create_food("Cola", 140.0, 0.0, 0.0, 39.0)];
        assert!(recommend_foods(&create_profile("Weight Loss"), &foods, 10).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let foods = vec![
            create_food("Oats A", 100.0, 10.0, 0.0, 0.0),
            create_food("Oats B", 100.0, 10.0, 0.0, 0.0),
        ];

        let recs = recommend_foods(&create_profile("Muscle Gain"), &foods, 2);
        assert_eq!(recs[0].name, "Oats A");
        assert_eq!(recs[1].name, "Oats B");
    }

    #[test]
    fn test_recommendations_respect_diet() {
        let foods = vec![
            create_food("Chicken Breast", 165.0, 31.0, 0.0, 0.0),
            create_food("Tofu", 76.0, 8.0, 0.3, 0.6),
        ];
        let profile = Profile {
            diet_preference: DietPreference::Vegetarian,
            ..create_profile("Muscle Gain")
        };

        let recs = recommend_foods(&profile, &foods, 5);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Tofu");
    }
}
