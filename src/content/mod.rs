//! Content platform access: wire types, soft-failing fetch client, and the
//! optional injectable reference cache.

pub mod cache;
pub mod client;
pub mod types;

pub use cache::EntryCache;
pub use client::ContentClient;
pub use types::{CmsEntry, CmsListResponse, ResolvedAsset, link_target_id};
