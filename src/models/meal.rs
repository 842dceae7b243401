use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::Goal;

/// One of the four meal occasions in a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Catalog tag restricting a meal to a goal, or marking it universal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    WeightLoss,
    MuscleGain,
    Maintenance,
    All,
}

/// A meal record from the catalog.
///
/// Owned by the catalog and read-only to the planner. Field names follow the
/// catalog row shape (`meal_type`, `suitable_for`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,

    pub name: String,

    #[serde(rename = "meal_type")]
    pub slot: MealSlot,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fats: f64,

    #[serde(default)]
    pub description: String,

    pub suitable_for: Suitability,
}

impl Meal {
    /// Basic validation: all macro fields non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fats >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{}, for {}",
            self.name,
            self.slot,
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
            self.suitable_for
        )
    }
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl Suitability {
    /// Whether a meal with this tag is eligible for the given goal.
    pub fn matches(&self, goal: Goal) -> bool {
        matches!(
            (self, goal),
            (Suitability::All, _)
                | (Suitability::WeightLoss, Goal::WeightLoss)
                | (Suitability::MuscleGain, Goal::MuscleGain)
                | (Suitability::Maintenance, Goal::Maintenance)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::WeightLoss => "weight_loss",
            Suitability::MuscleGain => "muscle_gain",
            Suitability::Maintenance => "maintenance",
            Suitability::All => "all",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            other => Err(PlanError::InvalidInput(format!("unknown meal slot: {other}"))),
        }
    }
}

impl FromStr for Suitability {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Suitability::WeightLoss),
            "muscle_gain" => Ok(Suitability::MuscleGain),
            "maintenance" => Ok(Suitability::Maintenance),
            "all" => Ok(Suitability::All),
            other => Err(PlanError::InvalidInput(format!(
                "unknown suitability tag: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            id: "m1".to_string(),
            name: "Oatmeal".to_string(),
            slot: MealSlot::Breakfast,
            calories: 350.0,
            protein: 12.0,
            carbs: 60.0,
            fats: 6.0,
            description: "Rolled oats with milk".to_string(),
            suitable_for: Suitability::All,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let mut invalid = sample_meal();
        invalid.protein = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_suitability_matches() {
        assert!(Suitability::All.matches(Goal::WeightLoss));
        assert!(Suitability::All.matches(Goal::Maintenance));
        assert!(Suitability::WeightLoss.matches(Goal::WeightLoss));
        assert!(!Suitability::WeightLoss.matches(Goal::MuscleGain));
        assert!(!Suitability::Maintenance.matches(Goal::WeightLoss));
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "id": "m2",
            "name": "Grilled Chicken",
            "meal_type": "dinner",
            "calories": 520,
            "protein": 45,
            "carbs": 10,
            "fats": 30,
            "description": "",
            "suitable_for": "muscle_gain"
        }"#;

        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.slot, MealSlot::Dinner);
        assert_eq!(meal.suitable_for, Suitability::MuscleGain);
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let json = r#"{
            "id": "m3",
            "name": "Brunch Special",
            "meal_type": "brunch",
            "calories": 400,
            "protein": 20,
            "carbs": 30,
            "fats": 15,
            "suitable_for": "all"
        }"#;

        assert!(serde_json::from_str::<Meal>(json).is_err());
    }
}
