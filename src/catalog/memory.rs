use async_trait::async_trait;

use crate::catalog::CatalogGateway;
use crate::error::Result;
use crate::models::{Goal, Meal};

/// In-memory catalog over a fixed list of meals.
///
/// Used as a test fixture and for offline demo data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    meals: Vec<Meal>,
}

impl MemoryCatalog {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[async_trait]
impl CatalogGateway for MemoryCatalog {
    async fn fetch_meals(&self, goal: Goal) -> Result<Vec<Meal>> {
        Ok(self
            .meals
            .iter()
            .filter(|m| m.suitable_for.matches(goal))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, Suitability};

    fn meal(id: &str, tag: Suitability) -> Meal {
        Meal {
            id: id.to_string(),
            name: id.to_string(),
            slot: MealSlot::Lunch,
            calories: 500.0,
            protein: 20.0,
            carbs: 40.0,
            fats: 15.0,
            description: String::new(),
            suitable_for: tag,
        }
    }

    #[tokio::test]
    async fn test_filters_by_suitability() {
        let catalog = MemoryCatalog::new(vec![
            meal("universal", Suitability::All),
            meal("cutting", Suitability::WeightLoss),
            meal("bulking", Suitability::MuscleGain),
        ]);
        assert_eq!(catalog.len(), 3);

        let meals = catalog.fetch_meals(Goal::WeightLoss).await.unwrap();
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["universal", "cutting"]);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let catalog = MemoryCatalog::default();
        assert!(catalog.is_empty());

        let meals = catalog.fetch_meals(Goal::Maintenance).await.unwrap();
        assert!(meals.is_empty());
    }
}
