mod meal;
mod plan;
mod profile;

pub use meal::{Meal, MealSlot, Suitability};
pub use plan::DietPlan;
pub use profile::{ActivityLevel, Goal, Sex, UserProfile};
