//! Dialect-correct statement assembly for the passcode table.
//!
//! One builder per (table, dialect) pair produces the three statements the
//! store needs. Statements come back with their values already bound, so the
//! placeholder counter and the parameter list can never drift apart.

use crate::dialect::Dialect;
use crate::error::{StoreError, StoreResult};
use crate::ident::Ident;
use crate::sql::{Sql, sql};
use crate::table::TableSpec;
use crate::value::Value;
use chrono::{DateTime, Utc};

/// Builds upsert/select/delete statements for one table and dialect.
#[derive(Debug, Clone, Copy)]
pub struct StatementBuilder<'a> {
    table: &'a TableSpec,
    dialect: Dialect,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(table: &'a TableSpec, dialect: Dialect) -> Self {
        Self { table, dialect }
    }

    /// The insert-or-replace statement for one passcode record.
    ///
    /// The record triple is bound twice, insert list first and update/merge
    /// list second, matching the order the generated placeholders expect.
    /// For an unsupported dialect this fails without generating anything.
    pub fn upsert(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> StoreResult<Sql> {
        match self.dialect {
            Dialect::Postgres | Dialect::Mysql => Ok(self.insert_on_conflict(id, code, expires_at)),
            Dialect::Mssql => Ok(self.merge_with_values(id, code, expires_at)),
            Dialect::Oracle => Ok(self.merge_from_dual(id, code, expires_at)),
            Dialect::Unsupported => Err(StoreError::Unsupported(self.dialect)),
        }
    }

    /// `SELECT * FROM t WHERE id = <param 1>`
    pub fn select(&self, id: &str) -> Sql {
        let mut q = sql(self.dialect);
        q.push("SELECT * FROM ")
            .push_ident(self.table.table())
            .push(" WHERE ")
            .push_ident(self.table.id())
            .push(" = ")
            .push_bind(id);
        q
    }

    /// `DELETE FROM t WHERE id = <param 1>`
    pub fn delete(&self, id: &str) -> Sql {
        let mut q = sql(self.dialect);
        q.push("DELETE FROM ")
            .push_ident(self.table.table())
            .push(" WHERE ")
            .push_ident(self.table.id())
            .push(" = ")
            .push_bind(id);
        q
    }

    // Column order is fixed: id, code, expiry.
    fn columns(&self) -> [&'a Ident; 3] {
        [self.table.id(), self.table.code(), self.table.expires_at()]
    }

    fn record(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> [(&'a Ident, Value); 3] {
        [
            (self.table.id(), Value::from(id)),
            (self.table.code(), Value::from(code)),
            (self.table.expires_at(), Value::from(expires_at)),
        ]
    }

    fn push_column_list(&self, q: &mut Sql) {
        for (i, col) in self.columns().iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_ident(col);
        }
    }

    fn push_value_binds(&self, q: &mut Sql, id: &str, code: &str, expires_at: DateTime<Utc>) {
        for (i, (_, value)) in self.record(id, code, expires_at).into_iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_bind(value);
        }
    }

    // `t.id = temp.id`
    fn push_merge_on(&self, q: &mut Sql) {
        q.push_ident(self.table.table())
            .push(".")
            .push_ident(self.table.id())
            .push(" = temp.")
            .push_ident(self.table.id());
    }

    /// postgres: `INSERT ... ON CONFLICT (id) DO UPDATE SET col = $n, ...`
    /// mysql: `INSERT ... ON DUPLICATE KEY UPDATE col = ?, ...`
    fn insert_on_conflict(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> Sql {
        let mut q = sql(self.dialect);
        q.push("INSERT INTO ").push_ident(self.table.table()).push(" (");
        self.push_column_list(&mut q);
        q.push(") VALUES (");
        self.push_value_binds(&mut q, id, code, expires_at);
        q.push(")");

        if self.dialect == Dialect::Postgres {
            q.push(" ON CONFLICT (")
                .push_ident(self.table.id())
                .push(") DO UPDATE SET ");
        } else {
            q.push(" ON DUPLICATE KEY UPDATE ");
        }

        for (i, (col, value)) in self.record(id, code, expires_at).into_iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_ident(col).push(" = ").push_bind(value);
        }
        q
    }

    /// mssql: `MERGE INTO t USING (VALUES (...)) AS temp (...) ON ... ;`
    ///
    /// MERGE statements require a terminating semicolon on SQL Server.
    fn merge_with_values(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> Sql {
        let mut q = sql(self.dialect);
        q.push("MERGE INTO ")
            .push_ident(self.table.table())
            .push(" USING (VALUES (");
        self.push_value_binds(&mut q, id, code, expires_at);
        q.push(")) AS temp (");
        self.push_column_list(&mut q);
        q.push(") ON ");
        self.push_merge_on(&mut q);

        q.push(" WHEN MATCHED THEN UPDATE SET ");
        for (i, col) in self.columns().iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_ident(col).push(" = temp.").push_ident(col);
        }

        q.push(" WHEN NOT MATCHED THEN INSERT (");
        self.push_column_list(&mut q);
        q.push(") VALUES (");
        self.push_value_binds(&mut q, id, code, expires_at);
        q.push(");");
        q
    }

    /// oracle: `MERGE INTO t USING (SELECT :val1 AS id, ... FROM dual) temp ...`
    ///
    /// The matched UPDATE SET list excludes the id column; Oracle rejects
    /// updating a column named in the ON clause.
    fn merge_from_dual(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> Sql {
        let mut q = sql(self.dialect);
        q.push("MERGE INTO ")
            .push_ident(self.table.table())
            .push(" USING (SELECT ");
        for (i, (col, value)) in self.record(id, code, expires_at).into_iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_bind(value).push(" AS ").push_ident(col);
        }
        q.push(" FROM dual) temp ON (");
        self.push_merge_on(&mut q);
        q.push(")");

        q.push(" WHEN MATCHED THEN UPDATE SET ");
        let mut first = true;
        for col in self.columns() {
            if col == self.table.id() {
                continue;
            }
            if !first {
                q.push(", ");
            }
            first = false;
            q.push_ident(col).push(" = temp.").push_ident(col);
        }

        q.push(" WHEN NOT MATCHED THEN INSERT (");
        self.push_column_list(&mut q);
        q.push(") VALUES (");
        self.push_value_binds(&mut q, id, code, expires_at);
        q.push(")");
        q
    }
}
