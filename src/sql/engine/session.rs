use crate::common::Result;
use crate::sql::execution;
use crate::sql::parser::Parser;
use crate::storage::{Row, TableStore};
use serde::{Deserialize, Serialize};

/// A SQL session, which executes raw statement text against the table
/// store it owns. The session is the single mutation point for the
/// table; hosts that want independent sandboxes create one session each.
pub struct Session {
    store: TableStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new session over a freshly seeded table store.
    pub fn new() -> Self {
        Self {
            store: TableStore::new(),
        }
    }

    /// Executes a raw statement.
    pub fn execute(&mut self, statement: &str) -> Result<StatementResult> {
        log::debug!("executing statement: {statement}");
        execution::execute(Parser::new(statement).parse()?, &mut self.store)
    }

    /// Resets the table store to its seed snapshot.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }
}

/// A session statement result, handed to the output layer for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatementResult {
    /// Acknowledged; no schema change is performed.
    CreateTable,
    /// Acknowledged but never applied.
    Delete,
    Insert {
        count: u64,
    },
    /// Acknowledged but never applied.
    Update,
    Select {
        columns: Vec<String>,
        rows: Vec<Row>,
    },
}
