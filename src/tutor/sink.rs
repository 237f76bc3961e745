use serde::{Deserialize, Serialize};

/// A terminal render instruction. The sink is append-only, except that
/// `reset` issues a Clear before redisplaying the first lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderOp {
    Clear,
    Text {
        content: String,
        style: Style,
    },
    /// A tabular result: ordered column names plus display values per
    /// row, with null already rendered as the literal token NULL.
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Text styling classes, mirroring the lesson/task/feedback distinctions
/// of the tutorial terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Plain,
    /// Lesson titles and explanations.
    Lesson,
    /// The lesson's task line.
    Task,
    /// Meta-command output and success messages.
    Guide,
    Success,
    Notice,
    Error,
}

/// The terminal output sink the tutor writes to. The tutor never reads
/// back from it.
pub trait Sink {
    fn render(&mut self, op: RenderOp);
}

/// A reference panel. Selecting one is an orthogonal, stateless signal:
/// it never touches the table store or the lesson cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Concepts,
    Select,
    Where,
    Dml,
    Ddl,
}

impl Panel {
    pub const ALL: &'static [Panel] = &[
        Panel::Concepts,
        Panel::Select,
        Panel::Where,
        Panel::Dml,
        Panel::Ddl,
    ];

    /// Case-insensitive panel lookup by name.
    pub fn from_name(name: &str) -> Option<Panel> {
        Panel::ALL
            .iter()
            .find(|panel| panel.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Panel::Concepts => "concepts",
            Panel::Select => "select",
            Panel::Where => "where",
            Panel::Dml => "dml",
            Panel::Ddl => "ddl",
        }
    }
}

/// The tab display the panel selection signal is delivered to.
pub trait TabDisplay {
    fn select(&mut self, panel: Panel);
}
