//! Network URL constants for the Kimola SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.kimola.com/v1";
