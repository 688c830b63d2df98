use crate::api::api_url;
use crate::api::utils::authenticated_get;
use crate::config::Config;
use async_trait::async_trait;
use gcdl_shared::{decode_dashboard_response, DashboardStats, Result, SharedError};
use log::debug;

/// Read access to the analytics service.
#[async_trait(?Send)]
pub trait AnalyticsApi {
    async fn dashboard(&self) -> Result<DashboardStats>;
}

/// Talks to the backend over `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAnalyticsClient;

#[async_trait(?Send)]
impl AnalyticsApi for HttpAnalyticsClient {
    async fn dashboard(&self) -> Result<DashboardStats> {
        let url = api_url(Config::DASHBOARD_ENDPOINT);
        debug!("Fetching dashboard analytics from {}", url);

        let response = authenticated_get(&url)
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to send dashboard request: {}", e)))?;

        if !response.ok() {
            return Err(SharedError::HttpStatus {
                status: response.status(),
                message: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                SharedError::Network(format!("Failed to read dashboard response: {}", e))
            })?;

        let stats = decode_dashboard_response(&body)?;
        debug!(
            "Dashboard analytics loaded: {} sales, {} purchase orders",
            stats.sales_count, stats.procurement_count
        );
        Ok(stats)
    }
}
