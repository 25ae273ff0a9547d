use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use crate::models::MealPlan;

/// Headline numbers of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub days: usize,
    pub daily_calorie_target: i64,
    pub average_daily_calories: f64,
    pub average_daily_protein_g: f64,
}

/// Summarize a plan; averages are zero for a plan without days
pub fn plan_summary(plan: &MealPlan) -> PlanSummary {
    let days = plan.days.len();
    let average = |total: f64| if days > 0 { total / days as f64 } else { 0.0 };

    PlanSummary {
        days,
        daily_calorie_target: plan.daily_calories,
        average_daily_calories: average(plan.days.iter().map(|d| d.total_calories).sum()),
        average_daily_protein_g: average(plan.days.iter().map(|d| d.total_protein_g).sum()),
    }
}

/// Grocery aisle used to group the shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    MeatSeafood,
    DairyEggs,
    GrainsBread,
    LegumesNuts,
    SnacksSweets,
    Beverages,
    OilsCondiments,
    Other,
}

impl FoodCategory {
    /// Categories in matching order; `Other` is the fallback
    const MATCH_ORDER: [FoodCategory; 9] = [
        FoodCategory::Fruits,
        FoodCategory::Vegetables,
        FoodCategory::MeatSeafood,
        FoodCategory::DairyEggs,
        FoodCategory::GrainsBread,
        FoodCategory::LegumesNuts,
        FoodCategory::SnacksSweets,
        FoodCategory::Beverages,
        FoodCategory::OilsCondiments,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            FoodCategory::Fruits => &["apple", "banana", "orange", "berries", "fruit", "pear", "peach", "grape"],
            FoodCategory::Vegetables => &[
                "broccoli", "spinach", "lettuce", "carrot", "tomato", "onion", "potato", "vegetable",
                "salad", "pepper", "cucumber",
            ],
            FoodCategory::MeatSeafood => &[
                "chicken", "beef", "pork", "fish", "salmon", "shrimp", "tuna", "meat", "turkey", "lamb",
            ],
            FoodCategory::DairyEggs => &["milk", "cheese", "yogurt", "cream", "butter", "egg"],
            FoodCategory::GrainsBread => &[
                "bread", "rice", "pasta", "oats", "cereal", "flour", "grain", "wheat", "barley", "quinoa",
            ],
            FoodCategory::LegumesNuts => &["beans", "lentils", "peanut", "almond", "cashew", "nut", "seed", "tofu"],
            FoodCategory::SnacksSweets => &["chocolate", "cookie", "cake", "snack", "chips", "candy", "dessert", "sweet"],
            FoodCategory::Beverages => &["water", "juice", "coffee", "tea", "drink", "beverage", "smoothie"],
            FoodCategory::OilsCondiments => &[
                "oil", "vinegar", "sauce", "dressing", "mayonnaise", "ketchup", "mustard", "honey", "syrup",
            ],
            FoodCategory::Other => &[],
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::MeatSeafood => "Meat & Seafood",
            FoodCategory::DairyEggs => "Dairy & Eggs",
            FoodCategory::GrainsBread => "Grains & Bread",
            FoodCategory::LegumesNuts => "Legumes & Nuts",
            FoodCategory::SnacksSweets => "Snacks & Sweets",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::OilsCondiments => "Oils & Condiments",
            FoodCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Place a food in the first category with a keyword in its name
pub fn categorize_food(name: &str) -> FoodCategory {
    let name = name.to_lowercase();

    FoodCategory::MATCH_ORDER
        .into_iter()
        .find(|category| category.keywords().iter().any(|k| name.contains(k)))
        .unwrap_or(FoodCategory::Other)
}

/// How often each food appears in a plan, grouped by category label.
/// Categories and items iterate alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub categories: BTreeMap<String, BTreeMap<String, usize>>,
}

impl ShoppingList {
    /// Number of distinct foods
    pub fn item_count(&self) -> usize {
        self.categories.values().map(|items| items.len()).sum()
    }
}

pub fn shopping_list(plan: &MealPlan) -> ShoppingList {
    let mut list = ShoppingList::default();

    for food in plan
        .days
        .iter()
        .flat_map(|day| &day.meals)
        .flat_map(|meal| &meal.foods)
    {
        *list
            .categories
            .entry(categorize_food(&food.name).to_string())
            .or_default()
            .entry(food.name.clone())
            .or_insert(0) += 1;
    }

    list
}

pub fn render_shopping_list(list: &ShoppingList) -> String {
    let mut lines = vec!["SHOPPING LIST".to_string(), "=".repeat(50), String::new()];

    for (category, items) in &list.categories {
        lines.push(format!("--- {} ---", category.to_uppercase()));
        for (item, count) in items {
            lines.push(format!("[ ] {} (x{})", item, count));
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    lines.push(
        "Note: This shopping list shows the number of times each item appears in your meal plan."
            .to_string(),
    );
    lines.push(
        "You may need to adjust quantities based on your specific recipes and portion sizes."
            .to_string(),
    );

    lines.join("\n") + "\n"
}

/// Plain-text rendering of a plan for download or printing
pub fn render_plan_text(plan: &MealPlan) -> String {
    let mut lines = vec![
        format!("MEAL PLAN FOR {}", plan.user.to_uppercase()),
        "=".repeat(50),
        String::new(),
        format!("Daily Calorie Target: {} kcal", plan.daily_calories),
        format!(
            "Protein: {}g, Carbs: {}g, Fat: {}g",
            plan.macros.protein_g, plan.macros.carbs_g, plan.macros.fat_g
        ),
        String::new(),
    ];

    for day in &plan.days {
        lines.push(format!("DAY {}", day.day));
        lines.push("-".repeat(30));
        lines.push(format!("Total Calories: {:.0} kcal", day.total_calories));
        lines.push(format!(
            "Protein: {:.1}g, Carbs: {:.1}g, Fat: {:.1}g",
            day.total_protein_g, day.total_carbs_g, day.total_fat_g
        ));
        lines.push(format!("Exercise Focus: {}", day.exercise_focus));
        lines.push(String::new());

        for meal in &day.meals {
            lines.push(meal.name.clone());
            for food in &meal.foods {
                lines.push(format!(
                    "  • {} - {:.0} kcal (P: {:.1}g, C: {:.1}g, F: {:.1}g)",
                    food.name, food.calories, food.protein_g, food.carbs_g, food.fat_g
                ));
            }
            lines.push(String::new());
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
