//! # Kimola SDK
//!
//! A typed Rust client for the Kimola REST API: the preset catalog, query
//! consumption history, and subscription usage.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — wire types per resource, shared helpers, error types
//! 2. **HTTP API** — `KimolaHttp`, one method per endpoint
//! 3. **High-Level Client** — `KimolaClient` with nested sub-clients
//!
//! Every call is a single stateless request/response pair: the SDK never
//! retries, caches, or coordinates across requests. Dropping a call's
//! future aborts the pending request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures_util::TryStreamExt;
//! use kimola_sdk::prelude::*;
//!
//! let client = KimolaClient::builder()
//!     .api_key("YOUR_API_KEY")
//!     .build()?;
//!
//! let page = client.presets().list(10, 0, None, None).await?;
//! let results = client
//!     .presets()
//!     .predict("a1b2c3d4", "Great battery, terrible screen.", Some("en"), true)
//!     .await?;
//!
//! // Or walk the whole catalog lazily:
//! let all: Vec<Preset> = client
//!     .presets()
//!     .iterate(10, None, None, 100)
//!     .try_collect()
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers used across all domain modules.
pub mod shared;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client, one method per endpoint.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KimolaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — presets
    pub use crate::domain::preset::{
        PredictionResult, Preset, PresetCategory, PresetLabel, PresetType,
    };

    // Domain types — queries
    pub use crate::domain::query::{QueryItem, QueryReport, QueryStat, QueryTarget};

    // Domain types — subscription
    pub use crate::domain::subscription::{SubscriptionUsage, UsageBucket};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Shared
    pub use crate::shared::Paged;

    // Client + sub-clients
    pub use crate::client::{
        KimolaClient, KimolaClientBuilder, PresetsClient, QueriesClient, SubscriptionClient,
    };
}
