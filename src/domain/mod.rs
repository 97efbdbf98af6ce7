//! Domain layer - traits, entities and pure logic

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod clock;
pub mod storage;
pub mod tags;

mod error;

pub use clock::{Clock, SystemClock};
pub use error::DomainError;
