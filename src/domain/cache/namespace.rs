//! Default expiry durations per logical namespace

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;

/// Namespace for category listings
pub const NS_CATEGORIES: &str = "categories";
/// Namespace for the tag corpus
pub const NS_TAGS: &str = "tags";
/// Namespace for user listings
pub const NS_USERS: &str = "users";
/// Namespace for resource listings and detail pages
pub const NS_RESOURCES: &str = "resources";
/// Namespace for the current user's bookmarks
pub const NS_BOOKMARKS: &str = "bookmarks";
/// Namespace for the current user's profile
pub const NS_PROFILE: &str = "profile";

/// Fallback expiry for namespaces without a table entry
pub const GLOBAL_DEFAULT_EXPIRY: Duration = Duration::from_secs(5 * 60);

static NAMESPACE_EXPIRY: Lazy<HashMap<&'static str, Duration>> = Lazy::new(|| {
    HashMap::from([
        (NS_CATEGORIES, Duration::from_secs(60 * 60)),
        (NS_TAGS, Duration::from_secs(30 * 60)),
        (NS_USERS, Duration::from_secs(15 * 60)),
        (NS_RESOURCES, Duration::from_secs(5 * 60)),
        (NS_BOOKMARKS, Duration::from_secs(5 * 60)),
        (NS_PROFILE, Duration::from_secs(10 * 60)),
    ])
});

/// Returns the default expiry for a namespace, falling back to the global
/// default for unlisted namespaces
pub fn expiry_for(namespace: &str) -> Duration {
    NAMESPACE_EXPIRY
        .get(namespace)
        .copied()
        .unwrap_or(GLOBAL_DEFAULT_EXPIRY)
}
