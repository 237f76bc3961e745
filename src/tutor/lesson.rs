/// A single tutorial lesson. Lessons are immutable; the sequence is
/// fixed and ordered, and the final lesson has no expected command,
/// which makes it terminal (free practice, no further advancement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub explanation: &'static str,
    pub task: &'static str,
    pub expected_command: Option<&'static str>,
    pub success_message: Option<&'static str>,
}

/// Normalizes learner input for matching against an expected command:
/// trim, case-fold, strip one optional trailing semicolon.
pub fn normalize(line: &str) -> String {
    let line = line.trim().to_lowercase();
    line.strip_suffix(';').unwrap_or(&line).to_string()
}

/// The guided lesson sequence.
pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Lesson 1: Viewing All Data",
        explanation: "Welcome to the SQL tutorial! Let's start with the most basic command: \
            `SELECT`. To see everything (*) from a table, we use `SELECT * FROM table_name;`. \
            Our table is called `students`.",
        task: "Your task: Type `SELECT * FROM students;` and press Enter.",
        expected_command: Some("select * from students;"),
        success_message: Some(
            "Excellent! You've fetched all the data from the `students` table. See the result \
            above. Let's move to the next lesson.",
        ),
    },
    Lesson {
        title: "Lesson 2: Selecting Specific Columns",
        explanation: "Often, we don't want all the columns. To select specific columns, just \
            list them instead of using `*`.",
        task: "Your task: Select only the `name` and `email` from the students.",
        expected_command: Some("select name, email from students;"),
        success_message: Some(
            "Perfect! Now you know how to select specific columns. This is very useful for \
            creating clean reports.",
        ),
    },
    Lesson {
        title: "Lesson 3: Filtering Data with `WHERE`",
        explanation: "The `WHERE` clause is used to filter records. It works like an `if` \
            statement. Let's find only the students who are older than 20.",
        task: "Your task: Type `SELECT * FROM students WHERE age > 20;`",
        expected_command: Some("select * from students where age > 20;"),
        success_message: Some(
            "Great! You've successfully filtered the data. The `WHERE` clause is one of the \
            most powerful tools in SQL.",
        ),
    },
    Lesson {
        title: "Lesson 4: Using `=` in `WHERE`",
        explanation: "We can use the equals sign (`=`) to find exact values. Remember to put \
            text (strings) in single quotes ''.",
        task: "Your task: Find the student whose name is 'Ana Smith'.",
        expected_command: Some("select * from students where name = 'ana smith';"),
        success_message: Some("That's right! Finding specific records is a very common task."),
    },
    Lesson {
        title: "Lesson 5: Inserting New Data with `INSERT INTO`",
        explanation: "Now let's add data! We use `INSERT INTO table_name (column1, column2) \
            VALUES (value1, value2);`.",
        task: "Your task: Insert a new student named 'Carlos Lima', with email \
            'carlos@email.com' and age 23.",
        expected_command: Some(
            "insert into students (name, email, age) values ('carlos lima', 'carlos@email.com', 23);",
        ),
        success_message: Some(
            "Fantastic! You've added a new student. To confirm, you can run `SELECT * FROM \
            students;` again (but it's not necessary to advance).",
        ),
    },
    Lesson {
        title: "End of Tutorial",
        explanation: "Congratulations! You have completed the basic SQL tutorial. You've \
            learned how to select, filter, and insert data. You now have a solid foundation to \
            continue exploring the world of SQL!",
        task: "Type `reset` to start over or continue practicing the commands freely.",
        expected_command: None,
        success_message: None,
    },
];
