use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::catalog::CatalogGateway;
use crate::error::{PlanError, Result};
use crate::models::{Goal, Meal};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client with connection pooling for catalog requests.
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Catalog backed by a PostgREST-style remote store.
///
/// Query shape: `GET {base}/rest/v1/meals?select=*&or=(suitable_for.eq.<goal>,suitable_for.eq.all)`
/// with `apikey` and bearer headers. Transport, status, and decode failures
/// all surface as `CatalogUnavailable`.
pub struct RestCatalog {
    base_url: String,
    api_key: String,
}

impl RestCatalog {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CatalogGateway for RestCatalog {
    async fn fetch_meals(&self, goal: Goal) -> Result<Vec<Meal>> {
        let url = format!("{}/rest/v1/meals", self.base_url);
        let filter = format!("(suitable_for.eq.{goal},suitable_for.eq.all)");

        debug!(%url, %filter, "fetching meals from remote catalog");

        let response = shared_client()
            .get(&url)
            .query(&[("select", "*"), ("or", filter.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| PlanError::CatalogUnavailable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| PlanError::CatalogUnavailable(e.to_string()))?;

        let meals: Vec<Meal> = response
            .json()
            .await
            .map_err(|e| PlanError::CatalogUnavailable(e.to_string()))?;

        Ok(meals)
    }
}
