use crate::types::Value;
use serde::{Deserialize, Serialize};

/// A single table row: an ordered column-to-value mapping.
///
/// Rows keep insertion order (which is display order) and may carry
/// different column sets after projection, so no static schema is
/// attached; a projected row is just a narrower view of the full row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl From<Vec<(String, Value)>> for Row {
    fn from(entries: Vec<(String, Value)>) -> Self {
        let mut row = Row::new();
        for (column, value) in entries {
            row.push(column, value);
        }
        row
    }
}

impl Row {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Binds a column to a value, replacing any existing binding.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// The row's column names, in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects the row onto the given columns, in the requested order.
    /// Columns the row does not have are silently omitted.
    pub fn project(&self, columns: &[String]) -> Row {
        let mut row = Row::new();
        for column in columns {
            if let Some(value) = self.get(column) {
                row.push(column.clone(), value.clone());
            }
        }
        row
    }

    /// The row's display values for the given column list, with NULL for
    /// both null values and columns the row does not have.
    pub fn display_values(&self, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|column| match self.get(column) {
                Some(value) => value.to_string(),
                None => Value::Null.to_string(),
            })
            .collect()
    }
}
