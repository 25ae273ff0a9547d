use crate::models::{DietPreference, FoodRecommendation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// In-memory cache for food recommendations
///
/// Recommendations are a pure function of the catalog, diet, goal text and
/// limit, so entries never need explicit invalidation while the catalog is
/// fixed. Entries expire after the configured TTL.
#[derive(Clone)]
pub struct RecommendationCache {
    foods: moka::future::Cache<String, Arc<Vec<FoodRecommendation>>>,
}

impl RecommendationCache {
    /// Create a new cache holding at most `capacity` entries
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let foods = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { foods }
    }

    pub async fn get_foods(&self, key: &str) -> Option<Arc<Vec<FoodRecommendation>>> {
        let hit = self.foods.get(key).await;
        if hit.is_some() {
            tracing::trace!("Cache hit: {}", key);
        } else {
            tracing::trace!("Cache miss: {}", key);
        }
        hit
    }

    pub async fn set_foods(&self, key: String, recommendations: Arc<Vec<FoodRecommendation>>) {
        tracing::trace!("Cache set: {}", key);
        self.foods.insert(key, recommendations).await;
    }

    pub async fn invalidate_all(&self) {
        self.foods.invalidate_all();
        self.foods.run_pending_tasks().await;
    }

    /// Get cache statistics once pending inserts and evictions are applied
    pub async fn stats(&self) -> CacheStats {
        self.foods.run_pending_tasks().await;
        CacheStats {
            entries: self.foods.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for food recommendations
    pub fn food_recommendations(diet: DietPreference, goal: &str, limit: usize) -> String {
        format!(
            "foods:{}:{}:{}",
            diet.as_str(),
            goal.trim().to_lowercase(),
            limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_recommendation(name: &str) -> FoodRecommendation {
        FoodRecommendation {
            name: name.to_string(),
            calories: 100.0,
            protein_g: 10.0,
            carbs_g: 5.0,
            fat_g: 1.0,
            score: 0.5,
        }
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = RecommendationCache::new(100, 60);
        let key = CacheKey::food_recommendations(DietPreference::Vegan, "Weight Loss", 5);

        assert!(cache.get_foods(&key).await.is_none());

        cache
            .set_foods(key.clone(), Arc::new(vec![create_recommendation("Tofu")]))
            .await;

        let hit = cache.get_foods(&key).await.unwrap();
        assert_eq!(hit[0].name, "Tofu");

        cache.invalidate_all().await;
        assert!(cache.get_foods(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_stats_count_entries() {
        let cache = RecommendationCache::new(100, 60);
        assert_eq!(cache.stats().await.entries, 0);

        for limit in [5, 10] {
            let key = CacheKey::food_recommendations(DietPreference::Both, "Muscle Gain", limit);
            cache.set_foods(key, Arc::new(vec![create_recommendation("Oats")])).await;
        }
        assert_eq!(cache.stats().await.entries, 2);

        cache.invalidate_all().await;
        assert_eq!(cache.stats().await.entries, 0);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(
            CacheKey::food_recommendations(DietPreference::Vegetarian, " Muscle Gain ", 10),
            "foods:vegetarian:muscle gain:10"
        );
        assert_ne!(
            CacheKey::food_recommendations(DietPreference::Both, "weight loss", 5),
            CacheKey::food_recommendations(DietPreference::Both, "weight loss", 6)
        );
    }
}
