//! Infrastructure layer - concrete implementations of the domain boundaries

pub mod api;
pub mod cache;
pub mod logging;
pub mod services;
pub mod storage;
