//! Cache infrastructure - the shared expiring data cache

mod data_cache;

pub use data_cache::DataCache;
