use crate::models::{ExerciseRecord, FoodRecord};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog {0} contains no records")]
    Empty(String),
}

/// Food and exercise catalogs, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub foods: Vec<FoodRecord>,
    pub exercises: Vec<ExerciseRecord>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodRecord>, exercises: Vec<ExerciseRecord>) -> Self {
        Self { foods, exercises }
    }

    /// Load both catalogs from JSON arrays on disk
    pub fn load_from_files<P, Q>(foods_path: P, exercises_path: Q) -> Result<Self, CatalogError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let foods: Vec<FoodRecord> = read_records(foods_path.as_ref())?;
        let exercises: Vec<ExerciseRecord> = read_records(exercises_path.as_ref())?;

        tracing::info!(
            "Loaded catalogs: {} foods, {} exercises",
            foods.len(),
            exercises.len()
        );

        Ok(Self::new(foods, exercises))
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: display.clone(),
        source,
    })?;

    if records.is_empty() {
        return Err(CatalogError::Empty(display));
    }

    Ok(records)
}
