use crate::models::{DietPreference, FoodRecord};

/// Name fragments that mark a food as containing meat or fish
pub const MEAT_KEYWORDS: [&str; 19] = [
    "beef", "chicken", "pork", "lamb", "turkey", "duck", "veal", "ham", "bacon", "sausage",
    "salmon", "fish", "seafood", "shrimp", "crab", "lobster", "meatball", "meatloaf", "steak",
];

/// Additional fragments excluded for vegans (dairy, egg, honey and derivatives)
pub const ANIMAL_PRODUCT_KEYWORDS: [&str; 11] = [
    "cheese", "milk", "cream", "butter", "egg", "yogurt", "honey", "meat", "whey", "casein",
    "gelatin",
];

/// Check whether a food is allowed under a dietary preference
///
/// Matching is a case-insensitive substring test on the display name only.
/// It is a lightweight heuristic over names, not an allergen or ingredient
/// guarantee: "Almond Milk" is excluded for vegans, while a dish whose name
/// hides its animal ingredients passes.
#[inline]
pub fn matches_diet(food: &FoodRecord, preference: DietPreference) -> bool {
    let name = food.name.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    match preference {
        DietPreference::Vegetarian => !contains_any(&MEAT_KEYWORDS),
        DietPreference::Vegan => {
            !contains_any(&MEAT_KEYWORDS) && !contains_any(&ANIMAL_PRODUCT_KEYWORDS)
        }
        DietPreference::NonVegetarian | DietPreference::Both => true,
    }
}

/// Narrow a food catalog by dietary preference
///
/// Returns borrowed records in catalog order; the catalog itself is untouched.
/// Non-vegetarian and "both" return every record.
pub fn filter_by_diet(foods: &[FoodRecord], preference: DietPreference) -> Vec<&FoodRecord> {
    foods
        .iter()
        .filter(|food| matches_diet(food, preference))
        .collect()
}

/// Case-insensitive substring search on food names
pub fn search_foods<'a>(foods: &'a [FoodRecord], query: &str) -> Vec<&'a FoodRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            calories: Some(100.0),
            ..FoodRecord::default()
        }
    }

    fn create_test_catalog() -> Vec<FoodRecord> {
        vec![
            food("Grilled Chicken Breast"),
            food("Brown Rice"),
            food("Cheddar Cheese"),
            food("Scrambled Egg"),
            food("Lentil Soup"),
            food("Beef Steak"),
            food("Honey Oats"),
            food("Tofu Stir Fry"),
        ]
    }

    #[test]
    fn test_vegetarian_excludes_meat() {
        let catalog = create_test_catalog();
        let names: Vec<&str> = filter_by_diet(&catalog, DietPreference::Vegetarian)
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["Brown Rice", "Cheddar Cheese", "Scrambled Egg", "Lentil Soup", "Honey Oats", "Tofu Stir Fry"]
        );
    }

    #[test]
    fn test_vegan_excludes_animal_products() {
        let catalog = create_test_catalog();
        let names: Vec<&str> = filter_by_diet(&catalog, DietPreference::Vegan)
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        assert_eq!(names, vec!["Brown Rice", "Lentil Soup", "Tofu Stir Fry"]);
    }

    #[test]
    fn test_both_is_identity() {
        let catalog = create_test_catalog();
        assert_eq!(filter_by_diet(&catalog, DietPreference::Both).len(), catalog.len());
        assert_eq!(filter_by_diet(&catalog, DietPreference::NonVegetarian).len(), catalog.len());
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(!matches_diet(&food("SALMON FILLET"), DietPreference::Vegetarian));
        assert!(!matches_diet(&food("Greek yogurt"), DietPreference::Vegan));
    }

    #[test]
    fn test_search_foods() {
        let catalog = create_test_catalog();
        let found = search_foods(&catalog, "  rice ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Brown Rice");
        assert!(search_foods(&catalog, "   ").is_empty());
    }
}
