//! Database handle abstraction.
//!
//! A [`StoreClient`] wraps an externally constructed, pooled, concurrency-safe
//! connection source. The crate never opens or closes the underlying handle;
//! it only sends single request-response round trips through it. Cancellation
//! and deadlines are the caller's: dropping an operation's future cancels the
//! round trip, and a deadline is `tokio::time::timeout` around the call.

use crate::dialect::Dialect;
use crate::error::StoreResult;
use crate::row::Row;
use crate::value::Value;

/// A dialect-tagged database handle.
///
/// Adapters decide their dialect when they are configured; the store asks for
/// it on every call instead of caching it.
pub trait StoreClient: Send + Sync {
    /// The SQL dialect this handle speaks.
    fn dialect(&self) -> Dialect;

    /// Execute a query and return all rows.
    ///
    /// Implementations must fully drain and release the backend cursor before
    /// returning, on every exit path, so pooled connections never go back in
    /// a half-read state.
    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = StoreResult<Vec<Row>>> + Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = StoreResult<u64>> + Send;
}

impl<C: StoreClient> StoreClient for &C {
    fn dialect(&self) -> Dialect {
        (*self).dialect()
    }

    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = StoreResult<Vec<Row>>> + Send {
        (*self).query(sql, params)
    }

    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = StoreResult<u64>> + Send {
        (*self).execute(sql, params)
    }
}
