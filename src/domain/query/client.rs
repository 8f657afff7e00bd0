//! Queries sub-client — consumption history and aggregated statistics.

use crate::client::KimolaClient;
use crate::domain::query::wire::{QueryItem, QueryStat};
use crate::error::SdkError;

use chrono::{DateTime, Utc};

/// Sub-client for query-history operations.
pub struct Queries<'a> {
    pub(crate) client: &'a KimolaClient,
}

impl Queries<'_> {
    /// One page of the consumption history, newest first, optionally
    /// bounded by a UTC date range.
    pub async fn list(
        &self,
        page_index: u32,
        page_size: u32,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<QueryItem>, SdkError> {
        Ok(self
            .client
            .http
            .get_queries(page_index, page_size, start_date, end_date)
            .await?)
    }

    /// Aggregated consumption per category, optionally bounded by a UTC
    /// date range.
    pub async fn statistics(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<QueryStat>, SdkError> {
        Ok(self
            .client
            .http
            .get_query_statistics(start_date, end_date)
            .await?)
    }
}
