//! Cache domain types - keys, entries and namespace expiry defaults

mod entry;
mod key;
mod namespace;

pub use entry::CacheEntry;
pub use key::{CacheParams, build_key};
pub use namespace::{
    GLOBAL_DEFAULT_EXPIRY, NS_BOOKMARKS, NS_CATEGORIES, NS_PROFILE, NS_RESOURCES, NS_TAGS,
    NS_USERS, expiry_for,
};
