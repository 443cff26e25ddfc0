//! Convenient imports for typical `otpsql` usage.
//!
//! ```ignore
//! use otpsql::prelude::*;
//! ```

pub use crate::{
    Dialect, Ident, IntoIdent, Passcode, PasscodeSender, PasscodeStore, Row, Sql, StoreClient,
    StoreError, StoreResult, TableConfig, TableSpec, Value, sql,
};

#[cfg(feature = "pool")]
pub use crate::{create_pool, create_pool_with_config};
