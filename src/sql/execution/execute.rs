use crate::common::Result;
use crate::errmalformed;
use crate::sql::engine::StatementResult;
use crate::sql::parser::ast::{Condition, Literal, Projection, Statement};
use crate::storage::{Row, TableStore};
use crate::types::Value;

/// Executes a parsed statement against the table store.
pub fn execute(statement: Statement, store: &mut TableStore) -> Result<StatementResult> {
    match statement {
        Statement::Select {
            columns,
            table,
            filter,
        } => select(store, &columns, &table, filter.as_ref()),
        Statement::Insert {
            table,
            columns,
            values,
        } => insert(store, &table, &columns, values),
        Statement::Update => Ok(StatementResult::Update),
        Statement::Delete => Ok(StatementResult::Delete),
        Statement::CreateTable => Ok(StatementResult::CreateTable),
    }
}

/// Scans the store, filtering and then projecting. Rows are dynamically
/// shaped, so the result header is the first result row's column set.
fn select(
    store: &TableStore,
    columns: &Projection,
    table: &str,
    filter: Option<&Condition>,
) -> Result<StatementResult> {
    if table != store.name() {
        return errmalformed!("Invalid syntax. Expected 'FROM {}'.", store.name());
    }
    let scan = store
        .rows()
        .iter()
        .filter(|row| filter.map_or(true, |condition| condition.matches(row)));
    let rows: Vec<Row> = match columns {
        Projection::All => scan.cloned().collect(),
        Projection::Columns(columns) => scan.map(|row| row.project(columns)).collect(),
    };
    let columns = rows
        .first()
        .map(|row| row.columns().map(String::from).collect())
        .unwrap_or_default();
    Ok(StatementResult::Select { columns, rows })
}

fn insert(
    store: &mut TableStore,
    table: &str,
    columns: &[String],
    values: Vec<Literal>,
) -> Result<StatementResult> {
    if table != store.name() {
        return errmalformed!("Invalid INSERT syntax.");
    }
    let values = values.into_iter().map(Value::from).collect();
    let count = store.insert(columns, values)?;
    Ok(StatementResult::Insert { count })
}
