use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::{
    aggregate::CodingSessions,
    entities::{CodingSession, Period},
    SessionError,
};

/// The storage boundary for pre-aggregated session batches. Each operation
/// returns the raw documents for one granularity; decoding into
/// [CodingSession] happens on this side of the boundary so a storage backend
/// only has to hand over documents.
///
/// Implementations are expected to honor their own timeouts and report
/// expiry as an error. Nothing here retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn fetch_daily(&self) -> Result<Vec<Value>>;

    async fn fetch_weekly(&self) -> Result<Vec<Value>>;

    async fn fetch_monthly(&self) -> Result<Vec<Value>>;

    async fn fetch_yearly(&self) -> Result<Vec<Value>>;
}

/// Fetches and decodes the session batch for `period`. Store failures come
/// back as [SessionError::Fetch]; the first document that does not parse
/// aborts the whole call with [SessionError::Decode], so the caller never
/// sees a partial batch.
pub async fn sessions_for_period<S: SessionStore + ?Sized>(
    store: &S,
    period: Period,
) -> Result<CodingSessions, SessionError> {
    let raw = match period {
        Period::Day => store.fetch_daily().await,
        Period::Week => store.fetch_weekly().await,
        Period::Month => store.fetch_monthly().await,
        Period::Year => store.fetch_yearly().await,
    }
    .map_err(SessionError::Fetch)?;

    decode_sessions(raw)
}

fn decode_sessions(raw: Vec<Value>) -> Result<CodingSessions, SessionError> {
    let mut sessions = Vec::with_capacity(raw.len());
    for document in raw {
        let session =
            serde_json::from_value::<CodingSession>(document).map_err(SessionError::Decode)?;
        sessions.push(session);
    }

    Ok(CodingSessions::new(sessions))
}
