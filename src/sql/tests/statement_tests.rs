use crate::sql::engine::StatementResult;
use crate::sql::tests::utility::SqlRunner;
use crate::types::Value;

// ================================ Seed Table ================================
const SEED_TABLE: &str = "id, name, email, age ; \
    1, Ana Smith, ana.smith@email.com, 20 ; \
    2, Beatriz Costa, bia.costa@email.com, 22 ; \
    3, John Mendes, john.mendes@email.com, 19";

const CARLOS_INSERT: &str = "INSERT INTO students (name, email, age) \
    VALUES ('Carlos Lima', 'carlos@email.com', 23);";
// ============================================================================

#[test]
fn select_star_returns_all_rows_in_table_order() {
    SqlRunner::new().select_expect("SELECT * FROM students;", SEED_TABLE);
}

#[test]
fn select_columns_projects_exactly_those_keys_in_order() {
    SqlRunner::new().select_expect(
        "SELECT name, email FROM students;",
        "name, email ; \
            Ana Smith, ana.smith@email.com ; \
            Beatriz Costa, bia.costa@email.com ; \
            John Mendes, john.mendes@email.com",
    );
}

#[test]
fn projection_order_follows_the_statement_not_the_table() {
    SqlRunner::new().select_expect(
        "SELECT age, name FROM students WHERE id > 2;",
        "age, name ; 19, John Mendes",
    );
}

#[test]
fn unknown_projection_columns_are_silently_omitted() {
    SqlRunner::new().select_expect(
        "SELECT name, gpa FROM students WHERE age > 20;",
        "name ; Beatriz Costa",
    );
}

#[test]
fn where_greater_than_filters_numerically() {
    SqlRunner::new().select_expect(
        "SELECT * FROM students WHERE age > 20;",
        "id, name, email, age ; 2, Beatriz Costa, bia.costa@email.com, 22",
    );
}

#[test]
fn where_equality_matches_case_insensitively() {
    SqlRunner::new()
        .select_expect(
            "SELECT * FROM students WHERE name = 'Ana Smith';",
            "id, name, email, age ; 1, Ana Smith, ana.smith@email.com, 20",
        )
        .select_expect(
            "select * from students where name = 'ana smith';",
            "id, name, email, age ; 1, Ana Smith, ana.smith@email.com, 20",
        );
}

#[test]
fn where_equality_works_on_integer_columns() {
    SqlRunner::new().select_expect(
        "SELECT name FROM students WHERE id = 2;",
        "name ; Beatriz Costa",
    );
}

#[test]
fn unsupported_conditions_yield_an_empty_result_set() {
    SqlRunner::new()
        .select_expect_empty("SELECT * FROM students WHERE age >= 19;")
        .select_expect_empty("SELECT * FROM students WHERE age < 99;")
        .select_expect_empty("SELECT * FROM students WHERE age > 18 AND id = 1;")
        .select_expect_empty("SELECT * FROM students WHERE name = 'a' = 'b';")
        .select_expect_empty("SELECT * FROM students WHERE age > 'twenty';");
}

#[test]
fn insert_appends_a_row_with_id_four_and_an_integer_age() {
    let mut runner = SqlRunner::new();
    runner.execute(CARLOS_INSERT).select_expect(
        "SELECT * FROM students;",
        &format!("{SEED_TABLE} ; 4, Carlos Lima, carlos@email.com, 23"),
    );

    let row = runner.session().store().rows().last().unwrap();
    assert_eq!(row.get("id"), Some(&Value::Integer(4)));
    assert_eq!(row.get("age"), Some(&Value::Integer(23)));
}

#[test]
fn inserted_null_values_render_as_null() {
    SqlRunner::new()
        .execute("INSERT INTO students (name, email, age) VALUES ('Zed', NULL, 30);")
        .select_expect(
            "SELECT * FROM students WHERE id > 3;",
            "id, name, email, age ; 4, Zed, NULL, 30",
        );
}

#[test]
fn insert_count_mismatch_fails_and_leaves_the_table_unchanged() {
    SqlRunner::new()
        .execute_expect_err(
            "INSERT INTO students (name, email) VALUES ('X');",
            "Invalid INSERT. Column count does not match value count.",
        )
        .select_expect("SELECT * FROM students;", SEED_TABLE);
}

#[test]
fn insert_into_another_table_is_malformed() {
    SqlRunner::new()
        .execute_expect_err(
            "INSERT INTO teachers (name) VALUES ('X');",
            "Invalid INSERT syntax.",
        )
        .select_expect("SELECT * FROM students;", SEED_TABLE);
}

#[test]
fn update_and_delete_never_change_row_count_or_content() {
    SqlRunner::new()
        .execute("UPDATE students SET age = 99;")
        .execute("DELETE FROM students WHERE id = 1;")
        .select_expect("SELECT * FROM students;", SEED_TABLE);
}

#[test]
fn create_table_is_acknowledged_without_a_schema_change() {
    let mut runner = SqlRunner::new();
    let result = runner
        .session_mut()
        .execute("CREATE TABLE teachers (id INT, name STRING);")
        .unwrap();
    assert_eq!(result, StatementResult::CreateTable);
    runner.select_expect("SELECT * FROM students;", SEED_TABLE);
}

#[test]
fn select_from_another_table_is_malformed() {
    SqlRunner::new().execute_expect_err(
        "SELECT * FROM teachers;",
        "Invalid syntax. Expected 'FROM students'.",
    );
}

#[test]
fn reset_restores_the_seed_rows_and_the_id_counter() {
    SqlRunner::new()
        .execute(CARLOS_INSERT)
        .reset()
        .select_expect("SELECT * FROM students;", SEED_TABLE)
        // The next insert picks up id 4 again, one past the highest seed id.
        .execute("INSERT INTO students (name, age) VALUES ('Dana', 31);")
        .select_expect(
            "SELECT * FROM students WHERE age > 30;",
            "id, name, age ; 4, Dana, 31",
        );
}
