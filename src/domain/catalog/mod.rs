//! Catalog entities - the JSON shapes exchanged with the remote API

mod entity;

pub use entity::{Bookmark, Category, Resource, Tag, UserProfile};
