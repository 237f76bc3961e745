use super::lesson::{normalize, Lesson, LESSONS};
use super::sink::{RenderOp, Sink, Style};
use crate::common::Error;
use crate::sql::engine::{Session, StatementResult};

const HELP_TEXT: &str =
    "Tutorial commands: `reset` (restarts the tutorial), `help` (shows this list).";
const PROGRESSION_HINT: &str = "This command might be correct, but to advance the lesson, \
    please use the exact command from the task.";
const NO_RESULTS_NOTICE: &str = "Query executed successfully. No results found.";
const UPDATE_NOTICE: &str =
    "The UPDATE command is valid, but it is not part of the guided tutorial.";
const DELETE_NOTICE: &str =
    "The DELETE command is valid, but it is not part of the guided tutorial.";
const CREATE_TABLE_NOTICE: &str =
    "Command 'CREATE TABLE' received. In a real system, the table would have been created.";
const UNRECOGNIZED_NOTICE: &str =
    "SQL command not recognized or not supported in this simulation.";

/// The lesson-progression state machine.
///
/// Owns the session state: the SQL session (and through it the table
/// store) plus the lesson cursor. One state per lesson index, plus the
/// terminal free-practice state once the final lesson's match has
/// succeeded or a lesson with no expected command is loaded. Processes
/// one input line to completion; every error is rendered to the sink and
/// none escape.
pub struct Tutor {
    session: Session,
    lessons: &'static [Lesson],
    cursor: usize,
}

impl Default for Tutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Tutor {
    pub fn new() -> Self {
        Self::with_lessons(LESSONS)
    }

    pub fn with_lessons(lessons: &'static [Lesson]) -> Self {
        Self {
            session: Session::new(),
            lessons,
            cursor: 0,
        }
    }

    /// Displays the current lesson. Called once by the host at startup.
    pub fn start(&mut self, sink: &mut dyn Sink) {
        self.load_lesson(sink);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handles one learner input line to completion.
    ///
    /// Meta-commands take precedence over lesson matching and are
    /// available in every state. A line matching the current lesson's
    /// expected command executes that command's own text and advances the
    /// cursor by one; any other line is executed as-is (progression is
    /// not blocked), preceded by a soft hint while a task is pending.
    pub fn handle_line(&mut self, line: &str, sink: &mut dyn Sink) {
        let normalized = normalize(line);
        match normalized.as_str() {
            "reset" => return self.reset(sink),
            "help" => return text(sink, HELP_TEXT, Style::Guide),
            _ => {}
        }

        let lesson = self.lessons.get(self.cursor).copied();
        if let Some(expected) = lesson.and_then(|lesson| lesson.expected_command) {
            if normalized == normalize(expected) {
                // Execute the lesson's own command text, not the raw
                // input, so the canonical result is shown.
                self.run_statement(expected, sink);
                if let Some(message) = lesson.and_then(|lesson| lesson.success_message) {
                    text(sink, message, Style::Guide);
                }
                self.advance(sink);
                return;
            }
            error(sink, PROGRESSION_HINT);
        }
        // The raw line, not the normalized one: INSERT values keep their
        // literal case.
        self.run_statement(line, sink);
    }

    /// Reinitializes the table store and the lesson cursor, clears the
    /// output, and loads the first lesson.
    fn reset(&mut self, sink: &mut dyn Sink) {
        sink.render(RenderOp::Clear);
        self.session.reset();
        self.cursor = 0;
        self.load_lesson(sink);
    }

    fn advance(&mut self, sink: &mut dyn Sink) {
        self.cursor += 1;
        log::debug!("lesson cursor advanced to {}", self.cursor);
        if self.cursor < self.lessons.len() {
            self.load_lesson(sink);
        }
    }

    fn load_lesson(&mut self, sink: &mut dyn Sink) {
        let Some(lesson) = self.lessons.get(self.cursor) else {
            return;
        };
        text(sink, &format!("--- {} ---", lesson.title), Style::Lesson);
        text(sink, lesson.explanation, Style::Lesson);
        text(sink, lesson.task, Style::Task);
    }

    fn run_statement(&mut self, statement: &str, sink: &mut dyn Sink) {
        match self.session.execute(statement) {
            Ok(result) => render_result(&result, sink),
            Err(err) => render_error(&err, sink),
        }
    }
}

fn text(sink: &mut dyn Sink, content: &str, style: Style) {
    sink.render(RenderOp::Text {
        content: content.to_string(),
        style,
    });
}

fn error(sink: &mut dyn Sink, message: &str) {
    text(sink, &format!("Error: {message}"), Style::Error);
}

fn render_result(result: &StatementResult, sink: &mut dyn Sink) {
    match result {
        StatementResult::Select { columns, rows } => {
            if rows.is_empty() {
                return text(sink, NO_RESULTS_NOTICE, Style::Notice);
            }
            sink.render(RenderOp::Table {
                columns: columns.clone(),
                rows: rows.iter().map(|row| row.display_values(columns)).collect(),
            });
        }
        StatementResult::Insert { count } => {
            text(sink, &format!("{count} row inserted successfully."), Style::Success);
        }
        StatementResult::Update => text(sink, UPDATE_NOTICE, Style::Notice),
        StatementResult::Delete => text(sink, DELETE_NOTICE, Style::Notice),
        StatementResult::CreateTable => text(sink, CREATE_TABLE_NOTICE, Style::Success),
    }
}

/// All errors resolve to a sink message here; none escape the tutor.
fn render_error(err: &Error, sink: &mut dyn Sink) {
    let message = match err {
        Error::Malformed(message) => message.clone(),
        Error::Unrecognized(_) => UNRECOGNIZED_NOTICE.to_string(),
        err => format!("An error occurred while processing your query: {err}. Check the syntax."),
    };
    error(sink, &message);
}
