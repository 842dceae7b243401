mod file;
mod memory;
mod rest;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Goal, Meal};

pub use file::FileCatalog;
pub use memory::MemoryCatalog;
pub use rest::RestCatalog;

/// Queryable meal store. Injected into plan generation so tests can swap in
/// an in-memory fixture.
///
/// Implementations apply the `suitable_for == goal OR all` filter themselves;
/// the planner never sees meals tagged for a different goal.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch_meals(&self, goal: Goal) -> Result<Vec<Meal>>;
}
