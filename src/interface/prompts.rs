use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid weight".to_string()))?;

    if weight <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for height in centimeters.
pub fn prompt_height() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .interact_text()?;

    let height: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid height".to_string()))?;

    if height <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Height must be positive".to_string(),
        ));
    }

    Ok(height)
}

/// Prompt for sex.
pub fn prompt_sex() -> Result<Sex> {
    let options: Vec<&str> = Sex::ALL.iter().map(Sex::as_str).collect();

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Sex::ALL[selection])
}

/// Prompt for the dietary goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = vec![
        "weight_loss (eat 500 kcal under maintenance)",
        "muscle_gain (eat 300 kcal over maintenance)",
        "maintenance",
    ];

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for the activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options = vec![
        "sedentary (little or no exercise)",
        "light (1-3 days/week)",
        "moderate (3-5 days/week)",
        "active (6-7 days/week)",
        "very_active (hard daily exercise)",
    ];

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a complete user profile from the interactive form.
pub fn collect_user_profile() -> Result<UserProfile> {
    let age = prompt_age()?;
    let weight_kg = prompt_weight()?;
    let height_cm = prompt_height()?;
    let sex = prompt_sex()?;
    let goal = prompt_goal()?;
    let activity = prompt_activity()?;

    Ok(UserProfile {
        age,
        weight_kg,
        height_cm,
        sex,
        goal,
        activity,
    })
}
