use crate::models::{Sex, UserProfile};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor), in kcal/day.
///
/// male:   10·weight + 6.25·height − 5·age + 5
/// female: 10·weight + 6.25·height − 5·age − 161
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let offset = match profile.sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };

    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64 + offset
}

/// Daily calorie target: BMR scaled by activity, shifted by goal, rounded
/// half-away-from-zero.
///
/// Inputs are assumed pre-validated by the caller; no error conditions.
pub fn calculate_daily_calories(profile: &UserProfile) -> i64 {
    let tdee = basal_metabolic_rate(profile) * profile.activity.factor();
    (tdee + profile.goal.calorie_adjustment()).round() as i64
}
