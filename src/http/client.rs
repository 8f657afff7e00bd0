//! Low-level HTTP client — `KimolaHttp`.
//!
//! One method per API endpoint. Attaches the Bearer header, assembles query
//! strings, maps non-2xx responses to typed errors, and decodes JSON bodies.
//! Internal to the SDK — the sub-clients in `domain/` wrap this.

use crate::domain::preset::wire::{PredictionResult, Preset, PresetLabel};
use crate::domain::preset::{PresetCategory, PresetType};
use crate::domain::query::wire::{QueryItem, QueryStat};
use crate::domain::subscription::wire::SubscriptionUsage;
use crate::error::HttpError;
use crate::shared::{time, Paged, QueryBuilder};

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Kimola REST API.
#[derive(Clone, Debug)]
pub struct KimolaHttp {
    base_url: String,
    api_key: String,
    client: Client,
}

impl KimolaHttp {
    /// Builds the transport unless the caller supplied one. A supplied
    /// client is a shared handle; the SDK never tears it down.
    pub fn new(
        base_url: &str,
        api_key: &str,
        client: Option<Client>,
    ) -> Result<Self, HttpError> {
        let client = match client {
            Some(c) => c,
            None => Client::builder()
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10)
                .build()?,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    // ── Presets ──────────────────────────────────────────────────────────

    pub async fn get_presets(
        &self,
        page_size: u32,
        page_index: u32,
        preset_type: Option<PresetType>,
        category: Option<PresetCategory>,
    ) -> Result<Paged<Preset>, HttpError> {
        let qs = QueryBuilder::new()
            .add("pageSize", page_size)
            .add("pageIndex", page_index)
            .add_if_not_empty("type", preset_type.map(|t| t.as_str()))
            .add_if_not_empty("category", category.map(|c| c.as_str()))
            .build();
        let url = format!("{}/presets{}", self.base_url, qs);
        self.get(&url).await
    }

    pub async fn get_preset(&self, key: &str) -> Result<Preset, HttpError> {
        let url = format!("{}/presets/{}", self.base_url, urlencoding::encode(key));
        self.get(&url).await
    }

    pub async fn get_preset_labels(
        &self,
        key: &str,
    ) -> Result<Option<Vec<PresetLabel>>, HttpError> {
        let url = format!(
            "{}/presets/{}/labels",
            self.base_url,
            urlencoding::encode(key)
        );
        self.get(&url).await
    }

    pub async fn predict(
        &self,
        key: &str,
        text: &str,
        language: Option<&str>,
        aspect_based: bool,
    ) -> Result<Vec<PredictionResult>, HttpError> {
        let qs = QueryBuilder::new()
            .add_if_not_empty("language", language)
            .add("aspectBased", aspect_based)
            .build();
        let url = format!(
            "{}/presets/{}/predictions{}",
            self.base_url,
            urlencoding::encode(key),
            qs
        );
        // The API takes the raw JSON-encoded text string as the body, not
        // an object wrapper.
        self.post(&url, text).await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub async fn get_queries(
        &self,
        page_index: u32,
        page_size: u32,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<QueryItem>, HttpError> {
        let qs = QueryBuilder::new()
            .add("pageIndex", page_index)
            .add("pageSize", page_size)
            .add_if_not_empty(
                "startDate",
                start_date.map(|d| time::format_utc(&d)).as_deref(),
            )
            .add_if_not_empty("endDate", end_date.map(|d| time::format_utc(&d)).as_deref())
            .build();
        let url = format!("{}/queries{}", self.base_url, qs);
        self.get(&url).await
    }

    pub async fn get_query_statistics(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<QueryStat>, HttpError> {
        let qs = QueryBuilder::new()
            .add_if_not_empty(
                "startDate",
                start_date.map(|d| time::format_utc(&d)).as_deref(),
            )
            .add_if_not_empty("endDate", end_date.map(|d| time::format_utc(&d)).as_deref())
            .build();
        let url = format!("{}/queries/statistics{}", self.base_url, qs);
        self.get(&url).await
    }

    // ── Subscription ─────────────────────────────────────────────────────

    pub async fn get_subscription_usage(
        &self,
        date: Option<DateTime<Utc>>,
    ) -> Result<SubscriptionUsage, HttpError> {
        let qs = QueryBuilder::new()
            .add_if_not_empty("date", date.map(|d| time::format_utc(&d)).as_deref())
            .build();
        let url = format!("{}/subscription/usage{}", self.base_url, qs);
        self.get(&url).await
    }

    // ── Internal request plumbing ────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, url, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, url, "sending API request");

        let mut req = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json");
        if let Some(b) = body {
            // Also sets `Content-Type: application/json`.
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            // The body is error context only; a failed read must not mask
            // the HTTP error itself.
            let body = resp.text().await.ok().filter(|t| !t.trim().is_empty());
            tracing::debug!(status = status.as_u16(), url, "API request failed");
            return Err(HttpError::from_status(status.as_u16(), body));
        }

        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Err(HttpError::EmptyBody);
        }
        serde_json::from_str(&text).map_err(HttpError::Decode)
    }
}
