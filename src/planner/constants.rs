use crate::models::{ActivityLevel, Goal, MealSlot};

/// Mifflin-St Jeor sex offset: +5 for male, -161 for female.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Daily calorie deficit applied for a weight-loss goal.
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Daily calorie surplus applied for a muscle-gain goal.
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

impl ActivityLevel {
    /// TDEE multiplier for this activity level.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.90,
        }
    }
}

impl Goal {
    /// Calorie adjustment applied after the activity multiplier.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::WeightLoss => -WEIGHT_LOSS_DEFICIT,
            Goal::MuscleGain => MUSCLE_GAIN_SURPLUS,
            Goal::Maintenance => 0.0,
        }
    }
}

impl MealSlot {
    /// Fraction of the daily target assigned to this slot.
    ///
    /// The four shares sum to exactly 1.0.
    pub fn calorie_share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }
}
