//! HTTP client building for the consent flow.

mod client;

pub use client::{HttpClientBuilder, HttpClientConfig, AUTHORIZE_PATH};
