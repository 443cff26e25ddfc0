/// A fragment of a SQL statement.
#[derive(Debug, Clone)]
pub(crate) enum SqlPart {
    /// Raw SQL text.
    Raw(String),
    /// A positional placeholder; the token is rendered per dialect at
    /// `to_sql` time.
    Param,
}
