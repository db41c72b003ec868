//! HTTP client for the Brasil API holiday endpoint.

use async_trait::async_trait;

use feriados_core::holiday::Holiday;

use crate::error::ApiError;

/// Default provider host.
pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

/// Fetches the holiday list for a single year from the remote provider.
///
/// One request per call, no retries; retry policy, if any, belongs to the
/// caller.
#[async_trait]
pub trait FetchHolidays: Send + Sync {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, ApiError>;
}

/// HTTP client for the Brasil API.
#[derive(Debug, Clone)]
pub struct BrasilApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BrasilApiClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (FERIADOS_API_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FERIADOS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the per-year endpoint URL.
    fn url(&self, year: i32) -> String {
        format!("{}/api/feriados/v1/{year}", self.base_url)
    }
}

impl Default for BrasilApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl FetchHolidays for BrasilApiClient {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        tracing::debug!(year, "Fetching holidays from provider");
        let response = self.client.get(self.url(year)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
