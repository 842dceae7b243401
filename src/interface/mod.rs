pub mod prompts;
pub mod render;

pub use prompts::{collect_user_profile, prompt_yes_no};
pub use render::{display_diet_plan, display_meal_list};
