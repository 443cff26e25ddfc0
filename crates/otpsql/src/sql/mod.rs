//! Dialect-aware SQL builder.
//!
//! `Sql` stores statement fragments and bound values separately and renders
//! the placeholder tokens for its target dialect only when the final text is
//! produced. Composing a statement never involves tracking placeholder
//! indices by hand.
//!
//! # Example
//!
//! ```ignore
//! use otpsql::{Dialect, sql};
//!
//! let mut q = sql(Dialect::Postgres);
//! q.push("SELECT * FROM otp WHERE id = ").push_bind("user-42");
//! assert_eq!(q.to_sql(), "SELECT * FROM otp WHERE id = $1");
//! ```

mod builder;
mod parts;

#[cfg(test)]
mod tests;

pub use builder::Sql;

/// Start building a SQL statement for `dialect`.
pub fn sql(dialect: crate::dialect::Dialect) -> Sql {
    Sql::new(dialect)
}
