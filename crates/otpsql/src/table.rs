//! Store configuration: which table and columns hold the passcode records.

use crate::error::StoreResult;
use crate::ident::{Ident, IntoIdent};
use serde::{Deserialize, Serialize};

const DEFAULT_ID: &str = "id";
const DEFAULT_CODE: &str = "passcode";
const DEFAULT_EXPIRY: &str = "expiredat";

/// Validated table/column layout for a passcode store.
///
/// All names are normalized to lowercase at construction and immutable
/// afterwards. The target table must already exist with at least these three
/// columns; no DDL is ever issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    table: Ident,
    id: Ident,
    code: Ident,
    expires_at: Ident,
}

impl TableSpec {
    /// Configure a table with the default column names
    /// (`id`, `passcode`, `expiredat`).
    pub fn new(table: impl IntoIdent) -> StoreResult<Self> {
        Self::with_columns(table, DEFAULT_ID, DEFAULT_CODE, DEFAULT_EXPIRY)
    }

    /// Configure a table with explicit column names.
    pub fn with_columns(
        table: impl IntoIdent,
        id: impl IntoIdent,
        code: impl IntoIdent,
        expires_at: impl IntoIdent,
    ) -> StoreResult<Self> {
        Ok(Self {
            table: table.into_ident()?,
            id: id.into_ident()?,
            code: code.into_ident()?,
            expires_at: expires_at.into_ident()?,
        })
    }

    /// Validate a deserialized [`TableConfig`].
    pub fn from_config(config: &TableConfig) -> StoreResult<Self> {
        Self::with_columns(
            config.table.as_str(),
            config.id_column.as_str(),
            config.code_column.as_str(),
            config.expiry_column.as_str(),
        )
    }

    pub fn table(&self) -> &Ident {
        &self.table
    }

    pub fn id(&self) -> &Ident {
        &self.id
    }

    pub fn code(&self) -> &Ident {
        &self.code
    }

    pub fn expires_at(&self) -> &Ident {
        &self.expires_at
    }
}

/// Unvalidated table layout as it appears in an application config file.
///
/// Column names fall back to the same defaults as [`TableSpec::new`];
/// [`TableSpec::from_config`] validates and normalizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub table: String,
    #[serde(default = "default_id_column")]
    pub id_column: String,
    #[serde(default = "default_code_column")]
    pub code_column: String,
    #[serde(default = "default_expiry_column")]
    pub expiry_column: String,
}

fn default_id_column() -> String {
    DEFAULT_ID.to_string()
}

fn default_code_column() -> String {
    DEFAULT_CODE.to_string()
}

fn default_expiry_column() -> String {
    DEFAULT_EXPIRY.to_string()
}
