//! Clients for the two remote services: the curated algorithm catalog and the
//! gist host backing scratch papers.

use time::OffsetDateTime;

mod http_client;

mod types;
pub use self::types::*;

mod catalog;
pub use self::catalog::{CatalogApi, CatalogClient};

mod gists;
pub use self::gists::{GIST_MARKER_FILE, GistApi, GistClient, refine_gist};

/// Millisecond timestamp attached to gist requests to defeat response caching.
pub fn cache_bust() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
