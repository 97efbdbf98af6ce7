//! Bearer-token collaborator boundary

mod provider;

pub use provider::{StaticTokenProvider, TokenProvider};

#[cfg(test)]
pub use provider::mock::MockTokenProvider;
