use clap::{Args, Parser, Subcommand};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// DietPlanner - computes a daily calorie target and picks one catalog meal
/// per slot (breakfast, lunch, dinner, snack) to approximate it.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a local meal catalog file (JSON or CSV).
    #[arg(short, long, default_value = "meals.json")]
    pub file: String,

    /// Base URL of a remote PostgREST meal catalog. Overrides --file.
    #[arg(long)]
    pub url: Option<String>,

    /// API key for the remote catalog.
    #[arg(long, requires = "url")]
    pub api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a diet plan (interactive form unless all profile flags given).
    Plan(ProfileArgs),

    /// List the meals in the catalog.
    Meals,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(ProfileArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Sex: male or female.
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Goal: weight_loss, muscle_gain, or maintenance.
    #[arg(long)]
    pub goal: Option<Goal>,

    /// Activity level: sedentary, light, moderate, active, or very_active.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,
}

impl ProfileArgs {
    /// Build a profile if every field was supplied on the command line.
    ///
    /// Returns `Ok(None)` when fields are missing (the interactive form
    /// takes over) and `InvalidInput` when the supplied values fail the
    /// same positivity checks the form enforces.
    pub fn to_profile(&self) -> Result<Option<UserProfile>> {
        let (Some(age), Some(weight), Some(height), Some(sex), Some(goal), Some(activity)) = (
            self.age,
            self.weight,
            self.height,
            self.sex,
            self.goal,
            self.activity,
        ) else {
            return Ok(None);
        };

        let profile = UserProfile {
            age,
            weight_kg: weight,
            height_cm: height,
            sex,
            goal,
            activity,
        };

        if !profile.is_valid() {
            return Err(PlanError::InvalidInput(
                "weight and height must be positive".to_string(),
            ));
        }

        Ok(Some(profile))
    }
}
