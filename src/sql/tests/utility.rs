use crate::sql::engine::{Session, StatementResult};
use itertools::Itertools;

/// The SQL test runner.
///
/// Holds an engine session, which executes the SQL statements provided
/// to it.
pub struct SqlRunner {
    session: Session,
}

impl SqlRunner {
    pub(crate) fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Resets the session's table store to the seed snapshot.
    pub(crate) fn reset(&mut self) -> &mut Self {
        self.session.reset();
        self
    }

    /// Executes the input as a SQL statement, e.g. INSERT INTO students (...),
    /// expecting it to succeed.
    pub(crate) fn execute(&mut self, input: &str) -> &mut Self {
        self.session.execute(input).unwrap();
        self
    }

    /// Executes the input, expecting it to fail with the given message.
    pub(crate) fn execute_expect_err(&mut self, input: &str, message: &str) -> &mut Self {
        let err = self.session.execute(input).unwrap_err();
        assert_eq!(err.to_string(), message);
        self
    }

    /// Executes a SQL SELECT statement and verifies that its return value
    /// matches the given expected output.
    ///
    /// The expected output of a SELECT statement should be formatted as follows:
    /// - Lines are separated by a semicolon and elements of each line are
    ///   separated by a comma.
    /// - The first line is the expected column names in order, e.g. name, email
    /// - Each subsequent line is the next expected row in the output.
    pub(crate) fn select_expect(&mut self, input: &str, expected: &str) -> &mut Self {
        handle(self.session.execute(input).unwrap(), expected);
        self
    }

    /// Executes a SQL SELECT statement and verifies that it returns no rows.
    pub(crate) fn select_expect_empty(&mut self, input: &str) -> &mut Self {
        match self.session.execute(input).unwrap() {
            StatementResult::Select { rows, .. } => assert!(rows.is_empty(), "for {input}"),
            _ => panic!("Input should be a SELECT statement."),
        }
        self
    }
}

pub fn handle(result: StatementResult, expected: &str) {
    match result {
        StatementResult::Select { columns, rows } => {
            let lines = expected.split(';').map(str::trim).collect::<Vec<&str>>();
            let (expected_columns, expected_rows) = lines.split_at(1);
            let expected_rows: Vec<&str> = expected_rows
                .iter()
                .copied()
                .filter(|line| !line.is_empty())
                .collect();

            // Check that the output has the expected column names and ordering.
            assert_eq!(
                columns.iter().join(", ").trim(),
                expected_columns.iter().join(", ").trim()
            );
            // Check that the output rows match the expected rows.
            assert_eq!(rows.len(), expected_rows.len());
            rows.iter()
                .zip(expected_rows.iter())
                .for_each(|(row, expected_row)| {
                    assert_eq!(
                        row.values().map(|value| value.to_string()).join(", "),
                        expected_row.split(',').map(str::trim).join(", ")
                    )
                });
        }
        _ => {
            panic!("Input should be a SELECT statement.")
        }
    }
}
