use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sqltutor::common::Result;
use sqltutor::config::TutorConfig;
use sqltutor::tutor::{Panel, RenderOp, Sink, Style, TabDisplay, Tutor};

fn main() -> Result<()> {
    let settings = TutorConfig::load().unwrap_or_default();
    let mut terminal = Terminal::new(settings.color);
    let mut reference = ReferenceTabs;
    let mut tutor = Tutor::new();
    tutor.start(&mut terminal);

    let mut editor = DefaultEditor::new()?;
    if let Some(path) = &settings.history_file {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(&settings.prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                // Tab switching is a front-end affair; `tab <name>` lines
                // never reach the tutor.
                if let Some(panel) = parse_tab_command(&line) {
                    reference.select(panel);
                    continue;
                }
                tutor.handle_line(&line, &mut terminal);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &settings.history_file {
        let _ = editor.save_history(path);
    }
    Ok(())
}

fn parse_tab_command(line: &str) -> Option<Panel> {
    let name = line.to_lowercase().strip_prefix("tab ")?.trim().to_string();
    Panel::from_name(&name)
}

/// An ANSI terminal sink. Appends render instructions to stdout.
struct Terminal {
    color: bool,
}

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

impl Terminal {
    fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: Style) -> &'static str {
        if !self.color {
            return "";
        }
        match style {
            Style::Plain => "",
            Style::Lesson => "\x1b[36m",
            Style::Task => "\x1b[1m",
            Style::Guide => "\x1b[34m",
            Style::Success => "\x1b[32m",
            Style::Notice => "\x1b[33m",
            Style::Error => "\x1b[31m",
        }
    }

    fn print_table(columns: &[String], rows: &[Vec<String>]) {
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| row.get(i).map_or(0, String::len))
                    .chain([column.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:width$}"))
                .join(" | ")
        };
        println!("  {}", line(columns));
        println!("  {}", widths.iter().map(|width| "-".repeat(*width)).join("-+-"));
        for row in rows {
            println!("  {}", line(row));
        }
    }
}

impl Sink for Terminal {
    fn render(&mut self, op: RenderOp) {
        match op {
            RenderOp::Clear => {
                if self.color {
                    print!("{ANSI_CLEAR}");
                } else {
                    println!();
                }
            }
            RenderOp::Text { content, style } => {
                let paint = self.paint(style);
                let reset = if paint.is_empty() { "" } else { ANSI_RESET };
                println!("{paint}{content}{reset}");
            }
            RenderOp::Table { columns, rows } => Self::print_table(&columns, &rows),
        }
    }
}

/// Prints a static reference card for the selected panel. Stateless: the
/// cards never touch the tutor.
struct ReferenceTabs;

impl TabDisplay for ReferenceTabs {
    fn select(&mut self, panel: Panel) {
        println!("{}", reference_card(panel));
    }
}

fn reference_card(panel: Panel) -> &'static str {
    match panel {
        Panel::Concepts => {
            "[Concepts] A database holds tables; a table holds rows of columns. \
             Every statement here runs against the single `students` table."
        }
        Panel::Select => {
            "[SELECT] `SELECT * FROM students;` shows every column; \
             `SELECT name, email FROM students;` shows just those columns."
        }
        Panel::Where => {
            "[WHERE] Filter rows with `WHERE column = value` or `WHERE column > number`, \
             e.g. `SELECT * FROM students WHERE age > 20;`."
        }
        Panel::Dml => {
            "[DML] `INSERT INTO students (name, email, age) VALUES ('Ana', 'a@b.com', 20);` \
             adds a row. UPDATE and DELETE are acknowledged but not applied here."
        }
        Panel::Ddl => {
            "[DDL] `CREATE TABLE` is acknowledged for practice; the `students` table \
             already exists and is the only one."
        }
    }
}
