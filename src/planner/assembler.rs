use tracing::debug;

use crate::catalog::CatalogGateway;
use crate::error::{PlanError, Result};
use crate::models::{DietPlan, Meal, MealSlot, UserProfile};
use crate::planner::calculations::calculate_daily_calories;
use crate::planner::selection::select_best_meal;

/// Select the nearest-calorie meal for one slot from the fetched candidates.
fn select_for_slot(meals: &[Meal], slot: MealSlot, daily_target: i64) -> Result<Meal> {
    let partition: Vec<Meal> = meals.iter().filter(|m| m.slot == slot).cloned().collect();
    let sub_target = daily_target as f64 * slot.calorie_share();

    debug!(
        %slot,
        sub_target,
        candidates = partition.len(),
        "selecting meal for slot"
    );

    select_best_meal(&partition, sub_target)
        .map(Meal::clone)
        .map_err(|_| PlanError::EmptySlot(slot))
}

/// Generate a single-day plan for a profile.
///
/// One awaited catalog fetch, then pure selection per slot. A failed or empty
/// fetch surfaces as `CatalogUnavailable`; an empty slot partition surfaces
/// as `EmptySlot`. No partial plan is ever returned.
pub async fn generate_diet_plan<G>(catalog: &G, profile: &UserProfile) -> Result<DietPlan>
where
    G: CatalogGateway + ?Sized,
{
    let target = calculate_daily_calories(profile);
    debug!(target, goal = %profile.goal, "computed daily calorie target");

    let meals = catalog.fetch_meals(profile.goal).await?;
    if meals.is_empty() {
        return Err(PlanError::CatalogUnavailable(
            "catalog returned no meals".to_string(),
        ));
    }
    debug!(candidates = meals.len(), "fetched candidate meals");

    let breakfast = select_for_slot(&meals, MealSlot::Breakfast, target)?;
    let lunch = select_for_slot(&meals, MealSlot::Lunch, target)?;
    let dinner = select_for_slot(&meals, MealSlot::Dinner, target)?;
    let snack = select_for_slot(&meals, MealSlot::Snack, target)?;

    Ok(DietPlan::new(breakfast, lunch, dinner, snack))
}
