use chrono::{DateTime, Utc};
use crate::core::error::CoreError;
use crate::models::{
    ActivityLevel, Gender, Goal, Goals, HealthStatus, MacroTargets, Profile, ProfileMetrics,
    ProgressEntry, ProgressUpdate,
};

/// Goals that shift the calorie target, checked in this order
const CALORIE_PRIORITY: [Goal; 3] = [Goal::WeightLoss, Goal::WeightGain, Goal::MuscleGain];

/// Goals with their own macro split, checked in this order
const MACRO_PRIORITY: [Goal; 3] = [Goal::MuscleGain, Goal::WeightLoss, Goal::WeightGain];

/// Upper bounds of the Underweight, Healthy and Overweight bands
const UNDERWEIGHT_BELOW: f64 = 18.5;
const HEALTHY_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

/// Calculate BMI and its health band
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimetres
///
/// # Returns
/// BMI rounded to two decimals, and the band of the unrounded value.
/// A non-positive or non-finite height yields `(0.0, Underweight)`.
pub fn bmi(weight_kg: f64, height_cm: f64) -> (f64, HealthStatus) {
    if !(height_cm.is_finite() && height_cm > 0.0) || !weight_kg.is_finite() {
        return (0.0, HealthStatus::Underweight);
    }

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);

    ((value * 100.0).round() / 100.0, health_status(value))
}

/// Map a BMI value onto the 18.5 / 25 / 30 bands
#[inline]
pub fn health_status(bmi: f64) -> HealthStatus {
    if bmi < UNDERWEIGHT_BELOW {
        HealthStatus::Underweight
    } else if bmi < HEALTHY_BELOW {
        HealthStatus::Healthy
    } else if bmi < OVERWEIGHT_BELOW {
        HealthStatus::Overweight
    } else {
        HealthStatus::Obese
    }
}

/// Basal metabolic rate (Mifflin-St Jeor)
#[inline]
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Additive calorie offset for the highest-priority goal mentioned
pub fn goal_adjustment(goals: &Goals) -> f64 {
    match goals.resolve(&CALORIE_PRIORITY) {
        Some(Goal::WeightLoss) => -500.0,
        Some(Goal::WeightGain) => 500.0,
        Some(Goal::MuscleGain) => 300.0,
        _ => 0.0,
    }
}

/// Daily calorie target
///
/// TDEE (BMR scaled by activity) plus the goal offset, rounded to the
/// nearest 50 kcal. Ties round to even, so the result is always a multiple of 50.
pub fn calorie_needs(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goals: &Goals,
) -> i64 {
    let tdee = bmr(weight_kg, height_cm, age, gender) * activity_level.multiplier();
    let target = tdee + goal_adjustment(goals);

    (target / 50.0).round_ties_even() as i64 * 50
}

/// Split a calorie budget into protein, carbohydrate and fat grams
///
/// Percentages (protein / fat / carbs):
/// - muscle gain: 30 / 25 / 45
/// - weight loss: 35 / 30 / 35
/// - weight gain: 20 / 30 / 50
/// - otherwise:   25 / 30 / 45
pub fn macro_split(calories: i64, goals: &Goals) -> MacroTargets {
    let (protein_pct, fat_pct, carbs_pct) = match goals.resolve(&MACRO_PRIORITY) {
        Some(Goal::MuscleGain) => (0.30, 0.25, 0.45),
        Some(Goal::WeightLoss) => (0.35, 0.30, 0.35),
        Some(Goal::WeightGain) => (0.20, 0.30, 0.50),
        _ => (0.25, 0.30, 0.45),
    };

    let calories = calories as f64;

    MacroTargets {
        protein_g: (calories * protein_pct / 4.0).round_ties_even() as i64,
        carbs_g: (calories * carbs_pct / 4.0).round_ties_even() as i64,
        fat_g: (calories * fat_pct / 9.0).round_ties_even() as i64,
    }
}

/// Daily calorie target for a profile
pub fn daily_calories(profile: &Profile) -> i64 {
    calorie_needs(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        profile.activity_level,
        &profile.goals(),
    )
}

/// Every derived number for a profile, computed from its current height and weight
pub fn derive_metrics(profile: &Profile) -> ProfileMetrics {
    let (bmi, health_status) = bmi(profile.weight_kg, profile.height_cm);
    let daily_calories = daily_calories(profile);

    ProfileMetrics {
        bmi,
        health_status,
        daily_calories,
        macros: macro_split(daily_calories, &profile.goals()),
    }
}

/// Prepare a progress entry for a new weigh-in
///
/// BMI and band are recomputed with the profile's height; the caller appends
/// `entry` to the history and stores the new weight, BMI and band.
pub fn record_progress(
    profile: &Profile,
    weight_kg: f64,
    timestamp: DateTime<Utc>,
) -> Result<ProgressUpdate, CoreError> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(CoreError::InvalidWeight(weight_kg));
    }

    let (bmi, health_status) = bmi(weight_kg, profile.height_cm);

    Ok(ProgressUpdate {
        weight_kg,
        bmi,
        health_status,
        entry: ProgressEntry {
            timestamp,
            weight_kg,
            bmi,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(goal: &str) -> Profile {
        Profile {
            name: "Test User".to_string(),
            gender: Gender::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            goal: goal.to_string(),
            activity_level: ActivityLevel::ModeratelyActive,
            ..Profile::default()
        }
    }

    #[test]
    fn test_bmi_value() {
        let (value, status) = bmi(70.0, 175.0);
        assert_eq!(value, 22.86);
        assert_eq!(status, HealthStatus::Healthy);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(health_status(18.49), HealthStatus::Underweight);
        assert_eq!(health_status(18.5), HealthStatus::Healthy);
        assert_eq!(health_status(24.99), HealthStatus::Healthy);
        assert_eq!(health_status(25.0), HealthStatus::Overweight);
        assert_eq!(health_status(29.99), HealthStatus::Overweight);
        assert_eq!(health_status(30.0), HealthStatus::Obese);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert_eq!(bmi(70.0, 0.0), (0.0, HealthStatus::Underweight));
    }

    #[test]
    fn test_bmr_by_gender() {
        assert_eq!(bmr(70.0, 175.0, 30, Gender::Male), 1648.75);
        assert_eq!(bmr(70.0, 175.0, 30, Gender::Female), 1482.75);
    }

    #[test]
    fn test_calorie_needs_maintain() {
        // 1648.75 * 1.55 = 2555.56
        let profile = create_test_profile("Maintain Weight");
        assert_eq!(daily_calories(&profile), 2550);
    }

    #[test]
    fn test_calorie_needs_weight_loss() {
        let profile = create_test_profile("Weight Loss");
        assert_eq!(daily_calories(&profile), 2050);
    }

    #[test]
    fn test_goal_priority_for_calories() {
        // Weight loss outranks muscle gain for the calorie offset
        let goals = Goals::parse("muscle gain while weight loss");
        assert_eq!(goal_adjustment(&goals), -500.0);
        assert_eq!(goal_adjustment(&Goals::parse("Muscle Gain")), 300.0);
        assert_eq!(goal_adjustment(&Goals::parse("Not specified")), 0.0);
    }

    #[test]
    fn test_goal_priority_for_macros() {
        // Muscle gain outranks weight loss for the macro split
        let goals = Goals::parse("muscle gain while weight loss");
        let macros = macro_split(2000, &goals);
        assert_eq!(macros.protein_g, 150);
    }

    #[test]
    fn test_macro_split_weight_loss() {
        let macros = macro_split(2100, &Goals::from(Goal::WeightLoss));
        assert_eq!(macros.protein_g, 184);
        assert_eq!(macros.carbs_g, 184);
        assert_eq!(macros.fat_g, 70);
    }

    #[test]
    fn test_macro_energy_close_to_budget() {
        for goal in ["Weight Loss", "Weight Gain", "Muscle Gain", "Maintain Weight"] {
            let macros = macro_split(2350, &Goals::parse(goal));
            let energy = macros.protein_g * 4 + macros.carbs_g * 4 + macros.fat_g * 9;
            assert!((energy - 2350).abs() <= 5, "{} gave {} kcal", goal, energy);
        }
    }

    #[test]
    fn test_unknown_activity_defaults() {
        let profile = Profile {
            activity_level: ActivityLevel::parse("couch potato"),
            ..create_test_profile("Maintain Weight")
        };
        assert_eq!(daily_calories(&profile), 2550);
    }

    #[test]
    fn test_record_progress() {
        let profile = create_test_profile("Weight Loss");
        let now = Utc::now();
        let update = record_progress(&profile, 80.0, now).unwrap();

        assert_eq!(update.bmi, 26.12);
        assert_eq!(update.health_status, HealthStatus::Overweight);
        assert_eq!(update.entry.timestamp, now);
        assert_eq!(update.entry.weight_kg, 80.0);
    }

    #[test]
    fn test_record_progress_rejects_bad_weight() {
        let profile = create_test_profile("Weight Loss");
        assert_eq!(
            record_progress(&profile, 0.0, Utc::now()),
            Err(CoreError::InvalidWeight(0.0))
        );
    }
}
