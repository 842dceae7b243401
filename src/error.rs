use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Meal catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("No candidate meals to select from")]
    EmptyCandidates,

    #[error("No candidate meals for the {0} slot")]
    EmptySlot(MealSlot),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
