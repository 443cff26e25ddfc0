//! The passcode store: save, load, and delete one-time passcodes.

use crate::client::StoreClient;
use crate::dialect::Dialect;
use crate::error::StoreResult;
use crate::statement::StatementBuilder;
use crate::table::TableSpec;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// The result of loading a passcode by subject identifier.
///
/// "Not found" is a valid outcome, not an error: [`Passcode::missing`] carries
/// an empty code and a sentinel expiry strictly in the past, so a caller that
/// only checks expiry still rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct Passcode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub found: bool,
}

impl Passcode {
    /// The negative result: no record for the subject.
    pub fn missing() -> Self {
        Self {
            code: String::new(),
            expires_at: Utc::now() - Duration::hours(24),
            found: false,
        }
    }

    /// Whether the passcode has expired (a missing passcode always has).
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// `Some((code, expires_at))` if found.
    pub fn into_option(self) -> Option<(String, DateTime<Utc>)> {
        if self.found {
            Some((self.code, self.expires_at))
        } else {
            None
        }
    }
}

/// Persists one-time passcodes in a relational table, masking dialect
/// differences behind [`StatementBuilder`].
///
/// The store holds no state between calls beyond its configuration, so one
/// instance can be shared freely across tasks; the handle is expected to be a
/// pooled, concurrency-safe connection source. Each operation is a single
/// round trip and nothing is retried internally.
pub struct PasscodeStore<C> {
    client: C,
    table: TableSpec,
}

impl<C: StoreClient> PasscodeStore<C> {
    /// Create a store over a configured table layout.
    pub fn new(client: C, table: TableSpec) -> Self {
        Self { client, table }
    }

    /// Create a store over `table_name` with the default column names.
    pub fn open(client: C, table_name: &str) -> StoreResult<Self> {
        Ok(Self::new(client, TableSpec::new(table_name)?))
    }

    pub fn table(&self) -> &TableSpec {
        &self.table
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn statements(&self, dialect: Dialect) -> StatementBuilder<'_> {
        StatementBuilder::new(&self.table, dialect)
    }

    /// Insert or replace the passcode for `id`, returning the number of rows
    /// the database reports as affected.
    ///
    /// At most one live record exists per subject; the upsert enforces that,
    /// not application logic. Fails before any round trip when the handle's
    /// dialect is unsupported.
    pub async fn save(
        &self,
        id: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> StoreResult<u64> {
        let dialect = self.client.dialect();
        let stmt = self.statements(dialect).upsert(id, code, expires_at)?;
        stmt.validate()?;

        debug!(table = %self.table.table(), %dialect, "saving passcode");
        self.client.execute(&stmt.to_sql(), stmt.params()).await
    }

    /// Load the passcode for `id`.
    ///
    /// Zero matching rows yields [`Passcode::missing`], never an error. The
    /// expiry is advisory metadata for the caller; nothing is swept here.
    pub async fn load(&self, id: &str) -> StoreResult<Passcode> {
        let dialect = self.client.dialect();
        let stmt = self.statements(dialect).select(id);

        debug!(table = %self.table.table(), %dialect, "loading passcode");
        let rows = self.client.query(&stmt.to_sql(), stmt.params()).await?;

        let Some(row) = rows.first() else {
            return Ok(Passcode::missing());
        };

        let code = row.text(self.table.code(), dialect)?;
        let expires_at = row.timestamp(self.table.expires_at(), dialect)?;
        Ok(Passcode {
            code,
            expires_at,
            found: true,
        })
    }

    /// Delete the passcode for `id`, returning rows affected (zero when no
    /// record existed).
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        let dialect = self.client.dialect();
        let stmt = self.statements(dialect).delete(id);

        debug!(table = %self.table.table(), %dialect, "deleting passcode");
        self.client.execute(&stmt.to_sql(), stmt.params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;
    use crate::value::Value;

    /// A handle that must never be reached.
    struct UnreachableDb;

    impl StoreClient for UnreachableDb {
        fn dialect(&self) -> Dialect {
            Dialect::Unsupported
        }

        async fn query(&self, _sql: &str, _params: &[Value]) -> StoreResult<Vec<Row>> {
            unreachable!("save must fail before contacting the database");
        }

        async fn execute(&self, _sql: &str, _params: &[Value]) -> StoreResult<u64> {
            unreachable!("save must fail before contacting the database");
        }
    }

    #[tokio::test]
    async fn save_fails_fast_on_unsupported_dialect() {
        let store = PasscodeStore::open(UnreachableDb, "otp").unwrap();
        let err = store
            .save("user-42", "839201", Utc::now())
            .await
            .unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported database dialect: unsupported");
    }

    #[test]
    fn missing_passcode_is_already_expired() {
        let missing = Passcode::missing();
        assert!(!missing.found);
        assert!(missing.code.is_empty());
        assert!(missing.expires_at < Utc::now());
        assert!(missing.is_expired());
        assert_eq!(missing.into_option(), None);
    }

    #[test]
    fn found_passcode_converts_to_option() {
        let expires_at = Utc::now() + Duration::minutes(5);
        let passcode = Passcode {
            code: "839201".into(),
            expires_at,
            found: true,
        };
        assert!(!passcode.is_expired());
        assert_eq!(
            passcode.into_option(),
            Some(("839201".to_string(), expires_at))
        );
    }
}
