// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheKey, CacheStats, RecommendationCache};
pub use catalog::{Catalog, CatalogError};
