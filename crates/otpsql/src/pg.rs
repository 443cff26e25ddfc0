//! tokio-postgres adapter.
//!
//! Implements [`StoreClient`] for `tokio_postgres` clients and transactions
//! (and pooled `deadpool_postgres` clients behind the `pool` feature), and
//! bridges [`Value`] to the wire via `ToSql`/`FromSql`. Driver errors are
//! carried into [`StoreError::Query`] with their source intact.

use crate::client::StoreClient;
use crate::dialect::Dialect;
use crate::error::{StoreError, StoreResult};
use crate::row::Row;
use crate::value::Value;
use bytes::BytesMut;
use chrono::{DateTime, NaiveDateTime, Utc};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type};

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Int(v) => v.to_sql(ty, out),
            Value::Float(v) => v.to_sql(ty, out),
            Value::Text(v) => v.to_sql(ty, out),
            Value::Bytes(v) => v.to_sql(ty, out),
            Value::Timestamp(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        <bool as ToSql>::accepts(ty)
            || <i64 as ToSql>::accepts(ty)
            || <f64 as ToSql>::accepts(ty)
            || <String as ToSql>::accepts(ty)
            || <Vec<u8> as ToSql>::accepts(ty)
            || <DateTime<Utc> as ToSql>::accepts(ty)
    }

    tokio_postgres::types::to_sql_checked!();
}

impl<'a> FromSql<'a> for Value {
    fn from_sql(
        ty: &Type,
        raw: &'a [u8],
    ) -> Result<Value, Box<dyn std::error::Error + Sync + Send>> {
        if <DateTime<Utc> as FromSql>::accepts(ty) {
            return Ok(Value::Timestamp(DateTime::<Utc>::from_sql(ty, raw)?));
        }
        if <NaiveDateTime as FromSql>::accepts(ty) {
            return Ok(Value::Timestamp(NaiveDateTime::from_sql(ty, raw)?.and_utc()));
        }
        if <bool as FromSql>::accepts(ty) {
            return Ok(Value::Bool(bool::from_sql(ty, raw)?));
        }
        if <i64 as FromSql>::accepts(ty) {
            return Ok(Value::Int(i64::from_sql(ty, raw)?));
        }
        if <i32 as FromSql>::accepts(ty) {
            return Ok(Value::Int(i32::from_sql(ty, raw)?.into()));
        }
        if <i16 as FromSql>::accepts(ty) {
            return Ok(Value::Int(i16::from_sql(ty, raw)?.into()));
        }
        if <f64 as FromSql>::accepts(ty) {
            return Ok(Value::Float(f64::from_sql(ty, raw)?));
        }
        if <f32 as FromSql>::accepts(ty) {
            return Ok(Value::Float(f32::from_sql(ty, raw)?.into()));
        }
        if <Vec<u8> as FromSql>::accepts(ty) {
            return Ok(Value::Bytes(<Vec<u8>>::from_sql(ty, raw)?));
        }
        if <String as FromSql>::accepts(ty) {
            return Ok(Value::Text(String::from_sql(ty, raw)?));
        }
        Err(format!("cannot represent postgres type {ty}").into())
    }

    fn from_sql_null(_ty: &Type) -> Result<Value, Box<dyn std::error::Error + Sync + Send>> {
        Ok(Value::Null)
    }

    fn accepts(ty: &Type) -> bool {
        <DateTime<Utc> as FromSql>::accepts(ty)
            || <NaiveDateTime as FromSql>::accepts(ty)
            || <bool as FromSql>::accepts(ty)
            || <i64 as FromSql>::accepts(ty)
            || <i32 as FromSql>::accepts(ty)
            || <i16 as FromSql>::accepts(ty)
            || <f64 as FromSql>::accepts(ty)
            || <f32 as FromSql>::accepts(ty)
            || <Vec<u8> as FromSql>::accepts(ty)
            || <String as FromSql>::accepts(ty)
    }
}

fn params_ref(params: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
}

fn decode_row(row: &tokio_postgres::Row) -> StoreResult<Row> {
    let mut out = Row::new();
    for (idx, col) in row.columns().iter().enumerate() {
        let value: Value = row
            .try_get(idx)
            .map_err(|e| StoreError::decode(col.name(), e.to_string()))?;
        out.push(col.name(), value);
    }
    Ok(out)
}

impl StoreClient for tokio_postgres::Client {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn query(&self, sql: &str, params: &[Value]) -> StoreResult<Vec<Row>> {
        let params = params_ref(params);
        let rows = tokio_postgres::Client::query(self, sql, &params)
            .await
            .map_err(StoreError::query)?;
        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> StoreResult<u64> {
        let params = params_ref(params);
        tokio_postgres::Client::execute(self, sql, &params)
            .await
            .map_err(StoreError::query)
    }
}

impl StoreClient for tokio_postgres::Transaction<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn query(&self, sql: &str, params: &[Value]) -> StoreResult<Vec<Row>> {
        let params = params_ref(params);
        let rows = tokio_postgres::Transaction::query(self, sql, &params)
            .await
            .map_err(StoreError::query)?;
        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> StoreResult<u64> {
        let params = params_ref(params);
        tokio_postgres::Transaction::execute(self, sql, &params)
            .await
            .map_err(StoreError::query)
    }
}

#[cfg(feature = "pool")]
impl StoreClient for deadpool_postgres::ClientWrapper {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn query(&self, sql: &str, params: &[Value]) -> StoreResult<Vec<Row>> {
        StoreClient::query(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> StoreResult<u64> {
        StoreClient::execute(&**self, sql, params).await
    }
}

#[cfg(feature = "pool")]
impl StoreClient for deadpool_postgres::Client {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn query(&self, sql: &str, params: &[Value]) -> StoreResult<Vec<Row>> {
        StoreClient::query(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> StoreResult<u64> {
        StoreClient::execute(&**self, sql, params).await
    }
}
