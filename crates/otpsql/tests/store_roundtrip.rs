//! Store behavior against faithfully emulated backends, one per dialect.
//!
//! The emulator applies upsert/select/delete semantics to an in-memory table
//! and reproduces each backend's result representation: byte-sequence text
//! for mysql/mssql and uppercase result column names for oracle.

use chrono::{DateTime, TimeZone, Utc};
use otpsql::{
    Dialect, PasscodeStore, Row, StoreClient, StoreError, StoreResult, TableSpec, Value,
};
use std::collections::HashMap;
use std::sync::Mutex;

struct EmulatedDb {
    dialect: Dialect,
    rows: Mutex<HashMap<String, (String, DateTime<Utc>)>>,
    last_sql: Mutex<String>,
}

impl EmulatedDb {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            rows: Mutex::new(HashMap::new()),
            last_sql: Mutex::new(String::new()),
        }
    }

    fn last_sql(&self) -> String {
        self.last_sql.lock().unwrap().clone()
    }

    fn record_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn result_row(&self, id: &str, code: &str, expires_at: DateTime<Utc>) -> Row {
        let mut row = Row::new();
        match self.dialect {
            // Oracle folds result column names to uppercase.
            Dialect::Oracle => {
                row.push("ID", Value::Text(id.into()));
                row.push("PASSCODE", Value::Text(code.into()));
                row.push("EXPIREDAT", Value::Timestamp(expires_at));
            }
            // These drivers hand text columns back as raw byte sequences.
            Dialect::Mysql | Dialect::Mssql => {
                row.push("id", Value::Bytes(id.as_bytes().to_vec()));
                row.push("passcode", Value::Bytes(code.as_bytes().to_vec()));
                row.push("expiredat", Value::Timestamp(expires_at));
            }
            _ => {
                row.push("id", Value::Text(id.into()));
                row.push("passcode", Value::Text(code.into()));
                row.push("expiredat", Value::Timestamp(expires_at));
            }
        }
        row
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        other => panic!("expected text parameter, got {other:?}"),
    }
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    match value {
        Value::Timestamp(t) => *t,
        other => panic!("expected timestamp parameter, got {other:?}"),
    }
}

impl StoreClient for EmulatedDb {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn query(&self, sql: &str, params: &[Value]) -> StoreResult<Vec<Row>> {
        *self.last_sql.lock().unwrap() = sql.to_string();
        assert!(sql.starts_with("SELECT"), "unexpected query: {sql}");
        assert_eq!(params.len(), 1);

        let id = text(&params[0]);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&id)
            .map(|(code, expires_at)| self.result_row(&id, code, *expires_at))
            .into_iter()
            .collect())
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> StoreResult<u64> {
        *self.last_sql.lock().unwrap() = sql.to_string();
        let verb = sql.split_whitespace().next().unwrap_or_default();
        match verb {
            "INSERT" | "MERGE" => {
                assert_eq!(params.len(), 6, "record triple must be bound twice");
                let id = text(&params[0]);
                let code = text(&params[1]);
                let expires_at = timestamp(&params[2]);
                // Insert list and update/merge list carry the same triple.
                assert_eq!(text(&params[3]), id);
                assert_eq!(text(&params[4]), code);
                assert_eq!(timestamp(&params[5]), expires_at);

                self.rows.lock().unwrap().insert(id, (code, expires_at));
                Ok(1)
            }
            "DELETE" => {
                assert_eq!(params.len(), 1);
                let id = text(&params[0]);
                Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
            }
            other => Err(StoreError::validation(format!(
                "unexpected statement verb: {other}"
            ))),
        }
    }
}

fn store_for(dialect: Dialect) -> PasscodeStore<EmulatedDb> {
    PasscodeStore::new(EmulatedDb::new(dialect), TableSpec::new("otp").unwrap())
}

fn expiry() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn save_then_load_round_trips_on_every_dialect() {
    for dialect in Dialect::SUPPORTED {
        let store = store_for(dialect);
        let affected = store.save("user-42", "839201", expiry()).await.unwrap();
        assert_eq!(affected, 1, "{dialect}");

        let loaded = store.load("user-42").await.unwrap();
        assert!(loaded.found, "{dialect}");
        assert_eq!(loaded.code, "839201", "{dialect}");
        assert_eq!(loaded.expires_at, expiry(), "{dialect}");
    }
}

#[tokio::test]
async fn saving_twice_keeps_one_record_with_the_latest_values() {
    let later = expiry() + chrono::Duration::minutes(10);
    for dialect in Dialect::SUPPORTED {
        let store = store_for(dialect);
        store.save("user-42", "111111", expiry()).await.unwrap();
        store.save("user-42", "222222", later).await.unwrap();

        assert_eq!(store.client().record_count(), 1, "{dialect}");
        let loaded = store.load("user-42").await.unwrap();
        assert_eq!(loaded.code, "222222", "{dialect}");
        assert_eq!(loaded.expires_at, later, "{dialect}");
    }
}

#[tokio::test]
async fn loading_an_absent_id_is_not_an_error() {
    for dialect in Dialect::SUPPORTED {
        let store = store_for(dialect);
        let loaded = store.load("nobody").await.unwrap();
        assert!(!loaded.found, "{dialect}");
        assert!(loaded.code.is_empty(), "{dialect}");
        assert!(loaded.expires_at < Utc::now(), "{dialect}");
    }
}

#[tokio::test]
async fn delete_reports_affected_rows() {
    for dialect in Dialect::SUPPORTED {
        let store = store_for(dialect);
        assert_eq!(store.delete("user-42").await.unwrap(), 0, "{dialect}");

        store.save("user-42", "839201", expiry()).await.unwrap();
        assert_eq!(store.delete("user-42").await.unwrap(), 1, "{dialect}");
        assert!(!store.load("user-42").await.unwrap().found, "{dialect}");
    }
}

#[tokio::test]
async fn save_sends_the_dialect_specific_upsert() {
    let store = store_for(Dialect::Mysql);
    store.save("user-42", "839201", expiry()).await.unwrap();
    assert_eq!(
        store.client().last_sql(),
        "INSERT INTO otp (id, passcode, expiredat) VALUES (?, ?, ?) \
         ON DUPLICATE KEY UPDATE id = ?, passcode = ?, expiredat = ?"
    );

    let store = store_for(Dialect::Postgres);
    store.save("user-42", "839201", expiry()).await.unwrap();
    assert!(store.client().last_sql().contains("ON CONFLICT (id) DO UPDATE SET"));

    let store = store_for(Dialect::Oracle);
    store.save("user-42", "839201", expiry()).await.unwrap();
    let sql = store.client().last_sql();
    assert!(sql.contains("FROM dual"), "{sql}");
    assert!(sql.contains(":val6"), "{sql}");
}
