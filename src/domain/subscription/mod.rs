//! Subscription domain — usage quotas for the current plan.

pub mod client;
pub mod wire;

pub use wire::{SubscriptionUsage, UsageBucket};
