use serde::{Deserialize, Serialize};

/// A single cell value. Rows are dynamically shaped, so each value
/// carries its own kind; the tutor's data model has strings, integers,
/// and NULL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    String(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(integer) => integer.fmt(f),
            Self::String(string) => f.write_str(string),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl Value {
    /// Attempts numeric coercion: integers pass through and numeric
    /// strings parse. Values that fail coercion are excluded from
    /// numeric comparisons.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            Self::String(string) => string.trim().parse().ok(),
            Self::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_displays_as_the_literal_token() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::from("Ana Smith").to_string(), "Ana Smith");
    }

    #[test]
    fn as_int_coerces_integers_and_numeric_strings() {
        assert_eq!(Value::Integer(23).as_int(), Some(23));
        assert_eq!(Value::from("23").as_int(), Some(23));
        assert_eq!(Value::from(" 23 ").as_int(), Some(23));
        assert_eq!(Value::from("twenty").as_int(), None);
        assert_eq!(Value::Null.as_int(), None);
    }
}
