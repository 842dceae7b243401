use serde::Serialize;

use crate::models::{Meal, MealSlot};

/// A complete single-day plan: one meal per slot plus macro totals.
///
/// Built only through [`DietPlan::new`], which derives the totals from the
/// four meals, so the totals always equal the sum of the constituents.
#[derive(Debug, Clone, Serialize)]
pub struct DietPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snack: Meal,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

impl DietPlan {
    pub fn new(breakfast: Meal, lunch: Meal, dinner: Meal, snack: Meal) -> Self {
        let meals = [&breakfast, &lunch, &dinner, &snack];
        let total_calories = meals.iter().map(|m| m.calories).sum();
        let total_protein = meals.iter().map(|m| m.protein).sum();
        let total_carbs = meals.iter().map(|m| m.carbs).sum();
        let total_fats = meals.iter().map(|m| m.fats).sum();

        Self {
            breakfast,
            lunch,
            dinner,
            snack,
            total_calories,
            total_protein,
            total_carbs,
            total_fats,
        }
    }

    /// The four meals in slot order, paired with their slot.
    pub fn meals(&self) -> [(MealSlot, &Meal); 4] {
        [
            (MealSlot::Breakfast, &self.breakfast),
            (MealSlot::Lunch, &self.lunch),
            (MealSlot::Dinner, &self.dinner),
            (MealSlot::Snack, &self.snack),
        ]
    }
}
