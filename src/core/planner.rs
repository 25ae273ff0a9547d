use rand::seq::SliceRandom;
use rand::Rng;
use crate::core::{
    error::CoreError,
    filters::filter_by_diet,
    metrics::{daily_calories, macro_split},
};
use crate::models::{Day, ExerciseFocus, FoodRecord, Meal, MealFood, MealPlan, Profile};

/// Tolerances of the greedy meal assembly
///
/// A meal accepts a food while its running total stays within
/// `target * overshoot`, and stops early once it holds its food count and
/// reaches `target * undershoot`. Meal plans are best effort inside this band,
/// not an exact-sum solution.
#[derive(Debug, Clone, Copy)]
pub struct PlanTolerances {
    /// Shuffled records examined per meal
    pub scan_window: usize,
    pub min_foods: usize,
    pub max_foods: usize,
    pub overshoot: f64,
    pub undershoot: f64,
    /// Range of the random factor applied to every meal but the last
    pub min_variation: f64,
    pub max_variation: f64,
}

impl Default for PlanTolerances {
    fn default() -> Self {
        Self {
            scan_window: 50,
            min_foods: 2,
            max_foods: 4,
            overshoot: 1.1,
            undershoot: 0.8,
            min_variation: 0.8,
            max_variation: 1.2,
        }
    }
}

/// Meal plan generator
///
/// # Pipeline
/// 1. Dietary filtering of the food catalog
/// 2. Daily calorie target and macro split from the profile
/// 3. Per day: weekly exercise focus, then one budgeted meal at a time
/// 4. Randomized greedy food selection per meal
#[derive(Debug, Clone)]
pub struct MealPlanner {
    tolerances: PlanTolerances,
}

impl MealPlanner {
    pub fn with_default_tolerances() -> Self {
        Self {
            tolerances: PlanTolerances::default(),
        }
    }

    /// Generate a plan of `days` days with `meals_per_day` meals each
    ///
    /// Bounds on `days` and `meals_per_day` are the caller's business; both
    /// are expected to be at least 1.
    ///
    /// # Errors
    /// * [`CoreError::EmptyCatalog`] when no food survives the dietary filter
    /// * [`CoreError::MissingCalories`] when none of the remaining foods has a calorie value
    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &Profile,
        foods: &[FoodRecord],
        days: usize,
        meals_per_day: usize,
        rng: &mut R,
    ) -> Result<MealPlan, CoreError> {
        let catalog = filter_by_diet(foods, profile.diet_preference);

        if catalog.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        if catalog.iter().all(|food| food.calories.is_none()) {
            return Err(CoreError::MissingCalories);
        }

        let daily_calories = daily_calories(profile);
        let macros = macro_split(daily_calories, &profile.goals());

        tracing::debug!(
            "Planning {} days x {} meals at {} kcal from {} foods",
            days,
            meals_per_day,
            daily_calories,
            catalog.len()
        );

        let plan_days = (1..=days)
            .map(|day| self.plan_day(day, &catalog, daily_calories as f64, meals_per_day, rng))
            .collect();

        Ok(MealPlan {
            user: profile.name.clone(),
            daily_calories,
            macros,
            days: plan_days,
        })
    }

    fn plan_day<R: Rng + ?Sized>(
        &self,
        day: usize,
        catalog: &[&FoodRecord],
        daily_calories: f64,
        meals_per_day: usize,
        rng: &mut R,
    ) -> Day {
        let calories_per_meal = daily_calories / meals_per_day as f64;
        let mut remaining_calories = daily_calories;
        let mut meals = Vec::with_capacity(meals_per_day);

        for ordinal in 1..=meals_per_day {
            let target = self.meal_target(
                ordinal == meals_per_day,
                calories_per_meal,
                remaining_calories,
                rng,
            );
            let foods = self.assemble_meal(catalog, target, rng);
            let meal = Meal::new(ordinal, meal_name(ordinal, meals_per_day), foods);

            remaining_calories -= meal.calories;
            meals.push(meal);
        }

        Day::new(day, exercise_focus(day), meals)
    }

    /// Calorie budget of the next meal; the last meal takes whatever is left
    fn meal_target<R: Rng + ?Sized>(
        &self,
        is_last: bool,
        calories_per_meal: f64,
        remaining_calories: f64,
        rng: &mut R,
    ) -> f64 {
        if is_last {
            return remaining_calories;
        }

        let variation = rng.gen_range(self.tolerances.min_variation..self.tolerances.max_variation);
        (calories_per_meal * variation).min(remaining_calories)
    }

    /// Greedily pick foods for one meal from a shuffled catalog
    fn assemble_meal<R: Rng + ?Sized>(
        &self,
        catalog: &[&FoodRecord],
        target: f64,
        rng: &mut R,
    ) -> Vec<MealFood> {
        let t = &self.tolerances;

        let mut shuffled: Vec<&FoodRecord> = catalog.to_vec();
        let window = t.scan_window.min(shuffled.len());
        let (candidates, _) = shuffled.partial_shuffle(rng, window);

        let num_foods = rng.gen_range(t.min_foods..=t.max_foods);
        let mut selected = Vec::with_capacity(num_foods);
        let mut meal_calories = 0.0;

        for food in candidates.iter() {
            let Some(calories) = food.usable_calories() else {
                continue;
            };

            if selected.len() < num_foods && meal_calories + calories <= target * t.overshoot {
                selected.push(MealFood::from_record(food, calories));
                meal_calories += calories;
            }

            if selected.len() >= num_foods && meal_calories >= target * t.undershoot {
                break;
            }
        }

        selected
    }
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self::with_default_tolerances()
    }
}

/// Weekly training template keyed by day index modulo 7
#[inline]
pub fn exercise_focus(day: usize) -> ExerciseFocus {
    match day % 7 {
        1 | 3 | 5 => ExerciseFocus::StrengthTraining,
        2 | 6 => ExerciseFocus::Cardio,
        4 => ExerciseFocus::FlexibilityMobility,
        _ => ExerciseFocus::RestRecovery,
    }
}

/// Display name of meal `ordinal` (1-based) in a day of `total` meals
pub fn meal_name(ordinal: usize, total: usize) -> String {
    match (total, ordinal) {
        (3, 1) | (5, 1) => "Breakfast".to_string(),
        (3, 2) | (5, 3) => "Lunch".to_string(),
        (3, 3) | (5, 5) => "Dinner".to_string(),
        (5, 2) => "Morning Snack".to_string(),
        (5, 4) => "Afternoon Snack".to_string(),
        (3, _) | (5, _) => format!("Meal {}", ordinal),
        _ => {
            let middle = total / 2 + 1;
            if ordinal == 1 {
                "Breakfast".to_string()
            } else if ordinal == total {
                "Dinner".to_string()
            } else if ordinal == middle {
                "Lunch".to_string()
            } else if ordinal < middle {
                format!("Morning Meal {}", ordinal)
            } else {
                format!("Afternoon Meal {}", ordinal)
            }
        }
    }
}
