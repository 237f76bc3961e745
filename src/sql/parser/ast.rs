use crate::storage::Row;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// A parsed statement, dispatched on its leading keyword.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select {
        columns: Projection,
        table: String,
        filter: Option<Condition>,
    },
    Insert {
        table: String,
        columns: Vec<String>,
        values: Vec<Literal>,
    },
    /// Recognized but intentionally inert: the tutorial only teaches
    /// SELECT and INSERT, so UPDATE and DELETE are acknowledged and never
    /// applied. The statement body is not interpreted.
    Update,
    Delete,
    /// Recognized and acknowledged; the single fixed table already exists.
    CreateTable,
}

/// The column list of a SELECT statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    All,
    Columns(Vec<String>),
}

/// A literal value in an INSERT statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Integer(i64),
    String(String),
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Integer(integer) => Value::Integer(integer),
            Literal::String(string) => Value::String(string),
        }
    }
}

/// A restricted WHERE condition: a single equality or greater-than
/// comparison. Anything else downgrades to Unsupported, which matches no
/// rows: unsupported conditions yield an empty result set rather than an
/// error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Matches when the stringified row value equals the comparand,
    /// ignoring case. A row without the column never matches.
    Equal { column: String, value: String },
    /// Numeric comparison. Row values that fail integer coercion are
    /// excluded.
    GreaterThan { column: String, value: i64 },
    /// Any other operator, a mixed/chained comparison, or an
    /// uninterpretable clause.
    Unsupported,
}

impl Condition {
    /// Evaluates the condition as a predicate over a row.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Self::Equal { column, value } => match row.get(column) {
                Some(field) => field.to_string().to_lowercase() == value.to_lowercase(),
                None => false,
            },
            Self::GreaterThan { column, value } => {
                match row.get(column).and_then(Value::as_int) {
                    Some(field) => field > *value,
                    None => false,
                }
            }
            Self::Unsupported => false,
        }
    }
}
