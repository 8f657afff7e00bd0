//! Subscription sub-client — usage snapshots.

use crate::client::KimolaClient;
use crate::domain::subscription::wire::SubscriptionUsage;
use crate::error::SdkError;

use chrono::{DateTime, Utc};

/// Sub-client for subscription operations.
pub struct Subscription<'a> {
    pub(crate) client: &'a KimolaClient,
}

impl Subscription<'_> {
    /// Usage snapshot for the period containing `date`, or the current
    /// period when `date` is `None`.
    pub async fn usage(&self, date: Option<DateTime<Utc>>) -> Result<SubscriptionUsage, SdkError> {
        Ok(self.client.http.get_subscription_usage(date).await?)
    }
}
