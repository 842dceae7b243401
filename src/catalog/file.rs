use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::CatalogGateway;
use crate::error::{PlanError, Result};
use crate::models::{Goal, Meal};

/// Catalog backed by a local JSON or CSV file, dispatched on extension.
///
/// The file is re-read on every fetch so edits show up without a restart.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate every meal in the file.
    pub fn load_all(&self) -> Result<Vec<Meal>> {
        let is_csv = self
            .path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let meals = if is_csv {
            load_csv(&self.path)?
        } else {
            load_json(&self.path)?
        };

        for meal in &meals {
            if !meal.is_valid() {
                return Err(PlanError::InvalidInput(format!(
                    "meal '{}' has negative macro values",
                    meal.id
                )));
            }
        }

        debug!(path = %self.path.display(), count = meals.len(), "loaded meal catalog");
        Ok(meals)
    }
}

fn load_json(path: &Path) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_csv(path: &Path) -> Result<Vec<Meal>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut meals = Vec::new();
    for record in reader.deserialize() {
        meals.push(record?);
    }
    Ok(meals)
}

#[async_trait]
impl CatalogGateway for FileCatalog {
    async fn fetch_meals(&self, goal: Goal) -> Result<Vec<Meal>> {
        let meals = self
            .load_all()
            .map_err(|e| PlanError::CatalogUnavailable(e.to_string()))?;

        Ok(meals
            .into_iter()
            .filter(|m| m.suitable_for.matches(goal))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const SAMPLE_JSON: &str = r#"[
        {"id": "m1", "name": "Oatmeal", "meal_type": "breakfast", "calories": 350,
         "protein": 12, "carbs": 60, "fats": 6, "description": "", "suitable_for": "all"},
        {"id": "m2", "name": "Salad", "meal_type": "lunch", "calories": 420,
         "protein": 18, "carbs": 25, "fats": 22, "description": "", "suitable_for": "weight_loss"}
    ]"#;

    const SAMPLE_CSV: &str = "\
id,name,meal_type,calories,protein,carbs,fats,description,suitable_for
m1,Oatmeal,breakfast,350,12,60,6,Porridge,all
m2,Steak,dinner,700,50,5,45,Sirloin,muscle_gain
";

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", SAMPLE_JSON);
        let catalog = FileCatalog::new(file.path());

        let meals = catalog.load_all().unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Oatmeal");
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp(".csv", SAMPLE_CSV);
        let catalog = FileCatalog::new(file.path());

        let meals = catalog.load_all().unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[1].name, "Steak");
        assert_eq!(meals[1].calories, 700.0);
    }

    #[test]
    fn test_negative_macros_rejected() {
        let json = r#"[
            {"id": "bad", "name": "Bad", "meal_type": "snack", "calories": -5,
             "protein": 1, "carbs": 1, "fats": 1, "description": "", "suitable_for": "all"}
        ]"#;
        let file = write_temp(".json", json);
        let catalog = FileCatalog::new(file.path());

        assert!(catalog.load_all().is_err());
    }

    #[tokio::test]
    async fn test_fetch_applies_goal_filter() {
        let file = write_temp(".json", SAMPLE_JSON);
        let catalog = FileCatalog::new(file.path());

        let meals = catalog.fetch_meals(Goal::MuscleGain).await.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "m1");
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let catalog = FileCatalog::new("/nonexistent/meals.json");
        let err = catalog.fetch_meals(Goal::Maintenance).await.unwrap_err();
        assert!(matches!(err, PlanError::CatalogUnavailable(_)));
    }
}
