pub mod assembler;
pub mod calculations;
pub mod constants;
pub mod selection;

pub use assembler::generate_diet_plan;
pub use calculations::{basal_metabolic_rate, calculate_daily_calories};
pub use constants::*;
pub use selection::select_best_meal;
