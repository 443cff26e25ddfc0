use super::*;
use crate::dialect::Dialect;
use crate::ident::Ident;
use crate::value::Value;

#[test]
fn builds_postgres_placeholders_in_order() {
    let mut q = sql(Dialect::Postgres);
    q.push("SELECT * FROM otp WHERE a = ")
        .push_bind("x")
        .push(" AND b = ")
        .push_bind("y");

    assert_eq!(q.to_sql(), "SELECT * FROM otp WHERE a = $1 AND b = $2");
    assert_eq!(q.params().len(), 2);
}

#[test]
fn builds_oracle_placeholders_in_order() {
    let mut q = sql(Dialect::Oracle);
    q.push("SELECT * FROM otp WHERE a = ")
        .push_bind("x")
        .push(" AND b = ")
        .push_bind("y");

    assert_eq!(q.to_sql(), "SELECT * FROM otp WHERE a = :val1 AND b = :val2");
}

#[test]
fn question_mark_dialects_repeat_the_token() {
    for dialect in [Dialect::Mysql, Dialect::Mssql] {
        let mut q = sql(dialect);
        q.push("DELETE FROM otp WHERE a = ")
            .push_bind("x")
            .push(" AND b = ")
            .push_bind("y");
        assert_eq!(q.to_sql(), "DELETE FROM otp WHERE a = ? AND b = ?");
    }
}

#[test]
fn params_keep_bind_order() {
    let mut q = sql(Dialect::Postgres);
    q.push_bind("user-42").push(", ").push_bind(7_i64);

    assert_eq!(
        q.params(),
        &[Value::Text("user-42".into()), Value::Int(7)]
    );
}

#[test]
fn push_merges_adjacent_raw_fragments() {
    let mut q = sql(Dialect::Postgres);
    q.push("SELECT * ").push("FROM otp");
    assert_eq!(q.to_sql(), "SELECT * FROM otp");
}

#[test]
fn push_ident_splices_normalized_name() {
    let ident = Ident::parse("ExpiredAt").unwrap();
    let mut q = sql(Dialect::Mysql);
    q.push("SELECT ").push_ident(&ident).push(" FROM otp");
    assert_eq!(q.to_sql(), "SELECT expiredat FROM otp");
}

#[test]
fn validate_accepts_aligned_statements() {
    let mut q = sql(Dialect::Postgres);
    q.push("SELECT * FROM otp WHERE id = ").push_bind("user-42");
    assert!(q.validate().is_ok());
}

#[test]
fn validate_rejects_placeholder_param_mismatch() {
    let mut q = sql(Dialect::Postgres);
    q.push("SELECT * FROM otp WHERE id = ").push_unbound_param();

    let err = q.validate().unwrap_err();
    assert!(matches!(err, crate::error::StoreError::Validation(_)));
}
