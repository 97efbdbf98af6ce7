//! Remote catalog API infrastructure

mod client;

pub use client::{ApiClient, HttpApiClient};

#[cfg(test)]
pub use client::mock::MockApiClient;
