//! SQL dialect tags and positional placeholder tokens.
//!
//! Every database handle adapter reports one of these tags via
//! [`StoreClient::dialect`](crate::client::StoreClient::dialect); it is chosen
//! when the adapter is configured, never sniffed from the driver at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The SQL syntax variant of a database product.
///
/// `Unsupported` is what an adapter reports when it wraps a backend this crate
/// cannot generate upsert statements for. Statements that only need `?`
/// placeholders still render, but [`upsert`](crate::StatementBuilder::upsert)
/// refuses to produce anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Mysql,
    Mssql,
    Oracle,
    Unsupported,
}

impl Dialect {
    /// All dialects upsert statements can be generated for.
    pub const SUPPORTED: [Dialect; 4] = [
        Dialect::Postgres,
        Dialect::Mysql,
        Dialect::Mssql,
        Dialect::Oracle,
    ];

    /// Whether upsert statements can be generated for this dialect.
    pub fn supported(self) -> bool {
        !matches!(self, Dialect::Unsupported)
    }

    /// Render the bound-parameter token for the 1-based positional `index`.
    ///
    /// Within one statement, indices must advance monotonically so bound
    /// values stay aligned with their tokens; reuse across statements is fine.
    pub fn param(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Oracle => format!(":val{index}"),
            Dialect::Mysql | Dialect::Mssql | Dialect::Unsupported => "?".to_string(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Mssql => "mssql",
            Dialect::Oracle => "oracle",
            Dialect::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}
