//! HTTP client layer — `KimolaHttp`.

pub mod client;

pub use client::KimolaHttp;
