use crate::de::{amount, count};
use crate::error::Result;
use serde::Deserialize;

/// Aggregate business figures returned by `GET /analytics/dashboard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "amount")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_procurement: f64,
    #[serde(default, deserialize_with = "amount")]
    pub profit: f64,
    #[serde(default, deserialize_with = "count")]
    pub low_stock_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub sales_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub procurement_count: u64,
}

impl DashboardStats {
    /// Shown whenever the analytics read fails.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// Response envelope of the analytics service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardResponse {
    pub data: DashboardStats,
}

/// Decodes a raw analytics response body into typed figures.
pub fn decode_dashboard_response(body: &str) -> Result<DashboardStats> {
    let response: DashboardResponse = serde_json::from_str(body)?;
    Ok(response.data)
}
