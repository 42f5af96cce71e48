//! HTTP networking module
//!
//! Provides the HTTP client used to reach the search and summary providers.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{HttpMethod, ProviderRequest, ProviderResponse};
