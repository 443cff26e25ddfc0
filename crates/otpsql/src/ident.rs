//! Safe SQL identifier handling.
//!
//! [`Ident`] is a validated table or column name. Identifiers are the only
//! strings ever spliced into statement text, so they are checked against
//! `[A-Za-z_][A-Za-z0-9_$]*` (dotted notation allowed for schema-qualified
//! tables) and normalized to lowercase at construction. Values never go
//! through this path; they are always bound as parameters.

use crate::error::{StoreError, StoreResult};
use std::fmt;

/// A validated, lowercase SQL identifier (table or column name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// Parse and normalize an identifier, supporting dotted notation
    /// (e.g. `auth.otp`).
    pub fn parse(s: &str) -> StoreResult<Self> {
        if s.is_empty() {
            return Err(StoreError::validation("identifier cannot be empty"));
        }

        for segment in s.split('.') {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
                Some(c) => {
                    return Err(StoreError::validation(format!(
                        "invalid identifier start character: '{c}'"
                    )));
                }
                None => {
                    return Err(StoreError::validation("empty identifier segment"));
                }
            }
            for c in chars {
                if c != '_' && c != '$' && !c.is_ascii_alphanumeric() {
                    return Err(StoreError::validation(format!(
                        "invalid character in identifier: '{c}'"
                    )));
                }
            }
        }

        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The normalized (lowercase) identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form, for backends that fold result column names to
    /// uppercase (Oracle).
    pub fn upper(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Convert an input into an [`Ident`].
///
/// This is mainly for ergonomics in configuration APIs.
pub trait IntoIdent {
    fn into_ident(self) -> StoreResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> StoreResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> StoreResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> StoreResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> StoreResult<Ident> {
        Ident::parse(&self)
    }
}
