//! # otpsql
//!
//! Dialect-aware persistence for short-lived one-time passcodes.
//!
//! ## Features
//!
//! - **One statement per operation**: save is a single insert-or-replace
//!   round trip (upsert), load and delete are single keyed statements
//! - **Dialect masking**: placeholder tokens, upsert clause syntax, and
//!   result column casing for postgres, mysql, mssql, and oracle are hidden
//!   behind [`StatementBuilder`] and [`Row`]
//! - **Explicit dialect tags**: a handle adapter reports its [`Dialect`] at
//!   configuration time; nothing is sniffed from driver internals
//! - **Not-found is not an error**: loading an absent subject returns a
//!   [`Passcode`] with `found = false` and an expiry already in the past
//! - **Safe defaults**: identifiers are validated and lowercased before they
//!   touch statement text; values only ever travel as bound parameters
//!
//! ## Example
//!
//! ```ignore
//! use otpsql::{PasscodeStore, TableSpec};
//!
//! let pool = otpsql::create_pool("postgres://localhost/auth")?;
//! let store = PasscodeStore::new(pool.get().await?, TableSpec::new("otp")?);
//!
//! store.save("user-42", "839201", expires_at).await?;
//! let passcode = store.load("user-42").await?;
//! if passcode.found && !passcode.is_expired() {
//!     // compare against what the user typed...
//! }
//! store.delete("user-42").await?;
//! ```
//!
//! The target table must already exist with the configured columns; this
//! crate issues no DDL and never opens or closes the database handle it is
//! given.

pub mod client;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod pg;
pub mod prelude;
pub mod row;
pub mod sender;
pub mod sql;
pub mod statement;
pub mod store;
pub mod table;
pub mod value;

pub use client::StoreClient;
pub use dialect::Dialect;
pub use error::{StoreError, StoreResult};
pub use ident::{Ident, IntoIdent};
pub use row::Row;
pub use sender::PasscodeSender;
pub use sql::{Sql, sql};
pub use statement::StatementBuilder;
pub use store::{Passcode, PasscodeStore};
pub use table::{TableConfig, TableSpec};
pub use value::Value;

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};
