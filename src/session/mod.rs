pub mod aggregate;
pub mod entities;
pub mod jsonl_store;
pub mod store;

use thiserror::Error;

/// Everything that can go wrong between a period request and a decoded batch
/// of sessions. Nothing here is retried; the caller decides how to surface it.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested granularity is not one of day/week/month/year. Raised
    /// during [entities::Period] construction, before any fetch happens.
    #[error("invalid period: {0}")]
    InvalidPeriod(u8),
    /// The store could not produce records at all (timeout, connectivity,
    /// storage fault). Propagated unchanged.
    #[error("failed to fetch sessions")]
    Fetch(#[source] anyhow::Error),
    /// A fetched record did not parse into a session. The whole batch is
    /// discarded, partial aggregates are never returned.
    #[error("failed to decode session record")]
    Decode(#[source] serde_json::Error),
}
