//! Wire types for subscription usage.

use serde::{Deserialize, Serialize};

/// Quota snapshot for one resource category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageBucket {
    pub count: i64,
    pub limit: i64,
    pub percentage: f64,
    pub available: i64,
}

/// Usage snapshot across all resource categories, for a given date or the
/// current period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUsage {
    pub link: UsageBucket,
    pub model: UsageBucket,
    pub query: UsageBucket,
    pub keyword: UsageBucket,
}
