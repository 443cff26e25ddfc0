use super::parts::SqlPart;
use crate::dialect::Dialect;
use crate::error::{StoreError, StoreResult};
use crate::ident::Ident;
use crate::value::Value;

/// A parameter-safe SQL builder targeting one dialect.
///
/// `Sql` stores SQL pieces and bound values separately; placeholder tokens
/// (`$1`, `:val1`, `?`) are generated in [`Sql::to_sql`] with a single
/// monotonically advancing counter, so bound values always line up with the
/// tokens the dialect expects.
#[must_use]
#[derive(Debug)]
pub struct Sql {
    dialect: Dialect,
    parts: Vec<SqlPart>,
    params: Vec<Value>,
}

impl Sql {
    /// Create an empty builder for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            parts: Vec::new(),
            params: Vec::new(),
        }
    }

    /// The dialect this statement renders for.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.parts.last_mut() {
            Some(SqlPart::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(SqlPart::Raw(sql.to_string())),
        }
        self
    }

    /// Append a placeholder and bind its value.
    pub fn push_bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parts.push(SqlPart::Param);
        self.params.push(value.into());
        self
    }

    /// Append a pre-validated identifier.
    ///
    /// Identifiers cannot be parameterized, so this splices text; [`Ident`]
    /// guarantees the text is a safe, normalized name.
    pub fn push_ident(&mut self, ident: &Ident) -> &mut Self {
        self.push(ident.as_str())
    }

    /// Render the statement text with this dialect's placeholder tokens.
    pub fn to_sql(&self) -> String {
        let mut cap = 0;
        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => cap += s.len(),
                SqlPart::Param => cap += 6, // ":valNN" upper bound for small statements
            }
        }

        let mut out = String::with_capacity(cap);
        let mut idx = 0;
        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => out.push_str(s),
                SqlPart::Param => {
                    idx += 1;
                    out.push_str(&self.dialect.param(idx));
                }
            }
        }
        out
    }

    /// The bound values, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Check that every placeholder has exactly one bound value.
    pub fn validate(&self) -> StoreResult<()> {
        let placeholder_count = self
            .parts
            .iter()
            .filter(|p| matches!(p, SqlPart::Param))
            .count();

        if placeholder_count != self.params.len() {
            let params_len = self.params.len();
            return Err(StoreError::validation(format!(
                "Sql: placeholders({placeholder_count}) != params({params_len})"
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn push_unbound_param(&mut self) -> &mut Self {
        self.parts.push(SqlPart::Param);
        self
    }
}
