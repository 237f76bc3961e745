use crate::common::Result;
use crate::storage::Row;
use crate::types::Value;
use crate::{errinput, errmalformed};
use once_cell::sync::Lazy;

/// The single table every statement runs against.
pub const TABLE_NAME: &str = "students";

/// The auto-assigned primary key column.
const ID_COLUMN: &str = "id";
/// The one column whose values are coerced to integers at insert time.
const AGE_COLUMN: &str = "age";

/// The fixed seed data set, restored on startup and on every reset.
static SEED_ROWS: Lazy<Vec<Row>> = Lazy::new(|| {
    vec![
        seed_row(1, "Ana Smith", "ana.smith@email.com", 20),
        seed_row(2, "Beatriz Costa", "bia.costa@email.com", 22),
        seed_row(3, "John Mendes", "john.mendes@email.com", 19),
    ]
});

fn seed_row(id: i64, name: &str, email: &str, age: i64) -> Row {
    Row::from(vec![
        (ID_COLUMN.to_string(), Value::Integer(id)),
        ("name".to_string(), Value::from(name)),
        ("email".to_string(), Value::from(email)),
        (AGE_COLUMN.to_string(), Value::Integer(age)),
    ])
}

/// The in-memory table store: the ordered row set and the auto-increment
/// id counter. Ids are unique, monotonically increasing, never reused,
/// and never user-settable.
pub struct TableStore {
    name: String,
    rows: Vec<Row>,
    next_id: i64,
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStore {
    pub fn new() -> Self {
        let mut store = Self {
            name: TABLE_NAME.to_string(),
            rows: Vec::new(),
            next_id: 0,
        };
        store.reset();
        store
    }

    /// Atomically replaces the rows with a deep copy of the seed data set
    /// and the id counter with one past the highest seed id.
    pub fn reset(&mut self) {
        self.rows = SEED_ROWS.clone();
        self.next_id = self
            .rows
            .iter()
            .filter_map(|row| row.get(ID_COLUMN).and_then(Value::as_int))
            .max()
            .unwrap_or(0)
            + 1;
        log::debug!("table {} reset to {} seed rows", self.name, self.rows.len());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current ordered row set, for scans.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Appends a row binding the given columns to the given values, with
    /// a fresh auto-assigned id. The column literally named `age` is
    /// coerced to an integer; every other value is stored as text (NULL
    /// literals stay null). Columns not supplied are absent from the row.
    /// Fails without mutating the table if the column and value counts
    /// differ, if the caller supplies the id column, or if an age value
    /// fails integer coercion.
    pub fn insert(&mut self, columns: &[String], values: Vec<Value>) -> Result<u64> {
        if columns.len() != values.len() {
            return errmalformed!("Invalid INSERT. Column count does not match value count.");
        }
        if columns.iter().any(|column| column == ID_COLUMN) {
            return errinput!("the {ID_COLUMN} column is assigned automatically");
        }

        let mut row = Row::new();
        row.push(ID_COLUMN, Value::Integer(self.next_id));
        for (column, value) in columns.iter().zip(values) {
            let value = if column == AGE_COLUMN {
                match value.as_int() {
                    Some(age) => Value::Integer(age),
                    None => {
                        return errinput!("invalid integer value '{value}' for column {AGE_COLUMN}")
                    }
                }
            } else {
                match value {
                    Value::Null => Value::Null,
                    Value::Integer(integer) => Value::String(integer.to_string()),
                    Value::String(string) => Value::String(string),
                }
            };
            row.push(column.clone(), value);
        }

        log::debug!("inserted row id={} into {}", self.next_id, self.name);
        self.rows.push(row);
        self.next_id += 1;
        Ok(1)
    }
}
