use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fitness goal recognised inside a free-text goal description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss = 0,
    WeightGain = 1,
    MaintainWeight = 2,
    MuscleGain = 3,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::WeightGain,
        Goal::MaintainWeight,
        Goal::MuscleGain,
    ];

    /// Lowercase phrase searched for in goal text
    pub fn keyword(self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight loss",
            Goal::WeightGain => "weight gain",
            Goal::MaintainWeight => "maintain weight",
            Goal::MuscleGain => "muscle gain",
        }
    }
}

/// Set of goals mentioned in a free-text goal such as "Weight Loss" or
/// "muscle gain, then maintain weight".
///
/// Goal text is matched by case-insensitive substring. When several goals
/// are present, each computation picks one through its own priority table
/// with [`Goals::resolve`], so the first listed goal that was mentioned wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Goals {
    matched: [bool; 4],
}

impl Goals {
    pub fn parse(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut matched = [false; 4];
        for goal in Goal::ALL {
            matched[goal as usize] = lower.contains(goal.keyword());
        }
        Self { matched }
    }

    pub fn contains(&self, goal: Goal) -> bool {
        self.matched[goal as usize]
    }

    /// First goal of `priority` that was mentioned, if any
    pub fn resolve(&self, priority: &[Goal]) -> Option<Goal> {
        priority.iter().copied().find(|goal| self.contains(*goal))
    }
}

impl From<Goal> for Goals {
    fn from(goal: Goal) -> Self {
        let mut matched = [false; 4];
        matched[goal as usize] = true;
        Self { matched }
    }
}

/// Dietary restriction used to narrow the food catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    NonVegetarian,
    #[default]
    Both,
}

impl DietPreference {
    /// Case-insensitive parse; anything unrecognised means no restriction
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "vegetarian" => DietPreference::Vegetarian,
            "vegan" => DietPreference::Vegan,
            "non-vegetarian" | "non_vegetarian" | "non vegetarian" => DietPreference::NonVegetarian,
            _ => DietPreference::Both,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::Vegan => "vegan",
            DietPreference::NonVegetarian => "non-vegetarian",
            DietPreference::Both => "both",
        }
    }
}

impl From<String> for DietPreference {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DietPreference> for String {
    fn from(value: DietPreference) -> Self {
        value.as_str().to_string()
    }
}

/// Activity level scaling BMR into TDEE
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// Unknown levels fall back to moderately active
    pub fn parse(text: &str) -> Self {
        let normalized = text.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "very_active" => ActivityLevel::VeryActive,
            "extra_active" => ActivityLevel::ExtraActive,
            _ => ActivityLevel::ModeratelyActive,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.as_str().to_string()
    }
}

/// Selects the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// "male" in any case is male, everything else takes the female branch
    pub fn parse(text: &str) -> Self {
        if text.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => "male".to_string(),
            Gender::Female => "female".to_string(),
        }
    }
}

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Underweight => "Underweight",
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Overweight => "Overweight",
            HealthStatus::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// One weigh-in on the profile's progress history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    pub bmi: f64,
}

/// User profile as supplied by the user-management collaborator.
///
/// `bmi` and `health_status` are carried for the collaborator's benefit only;
/// the core always derives them again from `height_cm` and `weight_kg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(rename = "heightCm", alias = "height", alias = "height_cm", default = "default_height")]
    pub height_cm: f64,
    #[serde(rename = "weightKg", alias = "weight", alias = "weight_kg", default = "default_weight")]
    pub weight_kg: f64,
    #[serde(rename = "dietPreference", alias = "diet", alias = "diet_preference", default)]
    pub diet_preference: DietPreference,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(rename = "activityLevel", alias = "activity_level", default)]
    pub activity_level: ActivityLevel,
    #[serde(rename = "healthConditions", alias = "health_conditions", default)]
    pub health_conditions: String,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(rename = "healthStatus", alias = "health_status", default)]
    pub health_status: Option<HealthStatus>,
    #[serde(rename = "progressHistory", alias = "progress_history", default)]
    pub progress_history: Vec<ProgressEntry>,
}

impl Profile {
    pub fn goals(&self) -> Goals {
        Goals::parse(&self.goal)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            gender: Gender::default(),
            age: default_age(),
            height_cm: default_height(),
            weight_kg: default_weight(),
            diet_preference: DietPreference::default(),
            goal: default_goal(),
            activity_level: ActivityLevel::default(),
            health_conditions: String::new(),
            bmi: None,
            health_status: None,
            progress_history: Vec::new(),
        }
    }
}

fn default_name() -> String { "User".to_string() }
fn default_age() -> u32 { 30 }
fn default_height() -> f64 { 170.0 }
fn default_weight() -> f64 { 70.0 }
fn default_goal() -> String { "Maintain Weight".to_string() }

/// Accepts a missing or null nutrient as zero
fn nutrient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Food catalog entry.
///
/// Keys accept both snake_case names and the column titles used by the
/// nutrition dataset ("Food Name", "Total Fat", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    #[serde(alias = "Food Name")]
    pub name: String,
    #[serde(alias = "Calories", default)]
    pub calories: Option<f64>,
    #[serde(alias = "Protein", alias = "protein_g", default, deserialize_with = "nutrient")]
    pub protein_g: f64,
    #[serde(alias = "Carbs", alias = "carbs_g", default, deserialize_with = "nutrient")]
    pub carbs_g: f64,
    #[serde(alias = "Total Fat", alias = "fat_g", default, deserialize_with = "nutrient")]
    pub fat_g: f64,
    #[serde(alias = "Dietary Fiber", alias = "fiber_g", default, deserialize_with = "nutrient")]
    pub fiber_g: f64,
    #[serde(alias = "Sugar", alias = "sugar_g", default, deserialize_with = "nutrient")]
    pub sugar_g: f64,
    #[serde(alias = "Nutrition Density", alias = "nutrition_density", default, deserialize_with = "nutrient")]
    pub nutrition_density: f64,
}

impl FoodRecord {
    /// Calories when present, finite and positive
    pub fn usable_calories(&self) -> Option<f64> {
        self.calories.filter(|c| c.is_finite() && *c > 0.0)
    }
}

/// Exercise catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    #[serde(alias = "Exercise", default)]
    pub name: String,
    #[serde(alias = "Equipment Type", alias = "equipment_type", default)]
    pub equipment_type: String,
    #[serde(alias = "Main Muscle", alias = "main_muscle", default)]
    pub main_muscle: String,
    #[serde(alias = "Target Muscles", alias = "target_muscles", default)]
    pub target_muscles: String,
    #[serde(alias = "Synergist Muscles", alias = "synergist_muscles", default)]
    pub synergist_muscles: String,
    #[serde(alias = "Preparation", default)]
    pub preparation: String,
    #[serde(alias = "Execution", default)]
    pub execution: String,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Derived metrics for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    pub bmi: f64,
    pub health_status: HealthStatus,
    pub daily_calories: i64,
    pub macros: MacroTargets,
}

/// Fields the collaborator persists after a new weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub weight_kg: f64,
    pub bmi: f64,
    pub health_status: HealthStatus,
    pub entry: ProgressEntry,
}

/// Training emphasis attached to each plan day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseFocus {
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    #[serde(rename = "Cardio")]
    Cardio,
    #[serde(rename = "Flexibility & Mobility")]
    FlexibilityMobility,
    #[serde(rename = "Rest & Recovery")]
    RestRecovery,
}

impl fmt::Display for ExerciseFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExerciseFocus::StrengthTraining => "Strength Training",
            ExerciseFocus::Cardio => "Cardio",
            ExerciseFocus::FlexibilityMobility => "Flexibility & Mobility",
            ExerciseFocus::RestRecovery => "Rest & Recovery",
        };
        f.write_str(label)
    }
}

/// By-value copy of the catalog fields a meal uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealFood {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MealFood {
    pub fn from_record(record: &FoodRecord, calories: f64) -> Self {
        Self {
            name: record.name.clone(),
            calories,
            protein_g: record.protein_g,
            carbs_g: record.carbs_g,
            fat_g: record.fat_g,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub ordinal: usize,
    pub name: String,
    pub foods: Vec<MealFood>,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Meal {
    /// Builds a meal whose sub-totals are summed from `foods`
    pub fn new(ordinal: usize, name: String, foods: Vec<MealFood>) -> Self {
        let calories = foods.iter().map(|f| f.calories).sum();
        let protein_g = foods.iter().map(|f| f.protein_g).sum();
        let carbs_g = foods.iter().map(|f| f.carbs_g).sum();
        let fat_g = foods.iter().map(|f| f.fat_g).sum();

        Self {
            ordinal,
            name,
            foods,
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day: usize,
    pub exercise_focus: ExerciseFocus,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
}

impl Day {
    /// Builds a day whose totals are summed from the meal sub-totals
    pub fn new(day: usize, exercise_focus: ExerciseFocus, meals: Vec<Meal>) -> Self {
        let total_calories = meals.iter().map(|m| m.calories).sum();
        let total_protein_g = meals.iter().map(|m| m.protein_g).sum();
        let total_carbs_g = meals.iter().map(|m| m.carbs_g).sum();
        let total_fat_g = meals.iter().map(|m| m.fat_g).sum();

        Self {
            day,
            exercise_focus,
            meals,
            total_calories,
            total_protein_g,
            total_carbs_g,
            total_fat_g,
        }
    }
}

/// Multi-day meal plan returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub user: String,
    pub daily_calories: i64,
    pub macros: MacroTargets,
    pub days: Vec<Day>,
}

/// Ranked food recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendation {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 3] = [
        ExerciseCategory::Cardio,
        ExerciseCategory::Strength,
        ExerciseCategory::Flexibility,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSuggestion {
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub main_muscle: String,
    pub target_muscles: String,
    pub synergist_muscles: String,
    pub preparation: String,
    pub execution: String,
}

impl From<&ExerciseRecord> for ExerciseSuggestion {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            name: record.name.trim().to_string(),
            equipment_type: record.equipment_type.trim().to_string(),
            main_muscle: record.main_muscle.trim().to_string(),
            target_muscles: record.target_muscles.clone(),
            synergist_muscles: record.synergist_muscles.clone(),
            preparation: record.preparation.clone(),
            execution: record.execution.clone(),
        }
    }
}

/// Exercises bucketed by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecommendations {
    pub cardio: Vec<ExerciseSuggestion>,
    pub strength: Vec<ExerciseSuggestion>,
    pub flexibility: Vec<ExerciseSuggestion>,
    /// Advisory only: health status or conditions suggest low-intensity work
    pub low_intensity: bool,
}

impl ExerciseRecommendations {
    pub fn bucket(&self, category: ExerciseCategory) -> &[ExerciseSuggestion] {
        match category {
            ExerciseCategory::Cardio => &self.cardio,
            ExerciseCategory::Strength => &self.strength,
            ExerciseCategory::Flexibility => &self.flexibility,
        }
    }

    pub fn bucket_mut(&mut self, category: ExerciseCategory) -> &mut Vec<ExerciseSuggestion> {
        match category {
            ExerciseCategory::Cardio => &mut self.cardio,
            ExerciseCategory::Strength => &mut self.strength,
            ExerciseCategory::Flexibility => &mut self.flexibility,
        }
    }
}
