//! Column-name-keyed result rows and dialect-aware decoding.
//!
//! Per-backend representation quirks live here, behind one interface:
//! Oracle folds result column names to uppercase regardless of how they were
//! declared, and several drivers return text columns as raw byte sequences.
//! Store logic stays backend-agnostic by decoding through these helpers.

use crate::dialect::Dialect;
use crate::error::{StoreError, StoreResult};
use crate::ident::Ident;
use crate::value::Value;
use chrono::{DateTime, Utc};

/// A single decoded result row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from parallel column/value vectors.
    pub fn from_parts(columns: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Append a column as reported by the backend, casing untouched.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push(column.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a value by the exact column name the backend reported.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Look up a configured column, folding its case the way `dialect`
    /// reports result columns.
    pub fn get_for(&self, column: &Ident, dialect: Dialect) -> Option<&Value> {
        match dialect {
            Dialect::Oracle => self.get(&column.upper()),
            _ => self.get(column.as_str()),
        }
    }

    /// Decode a text column, accepting the raw byte-sequence representation
    /// some drivers use for text.
    pub fn text(&self, column: &Ident, dialect: Dialect) -> StoreResult<String> {
        match self.get_for(column, dialect) {
            Some(Value::Text(s)) => Ok(s.clone()),
            Some(Value::Bytes(b)) => String::from_utf8(b.clone())
                .map_err(|_| StoreError::decode(column.as_str(), "byte value is not valid UTF-8")),
            Some(other) => Err(StoreError::decode(
                column.as_str(),
                format!("expected text, got {}", other.kind()),
            )),
            None => Err(StoreError::decode(
                column.as_str(),
                "column missing from result row",
            )),
        }
    }

    /// Decode a timestamp column.
    pub fn timestamp(&self, column: &Ident, dialect: Dialect) -> StoreResult<DateTime<Utc>> {
        match self.get_for(column, dialect) {
            Some(Value::Timestamp(t)) => Ok(*t),
            Some(other) => Err(StoreError::decode(
                column.as_str(),
                format!("expected timestamp, got {}", other.kind()),
            )),
            None => Err(StoreError::decode(
                column.as_str(),
                "column missing from result row",
            )),
        }
    }
}
