use std::io::{self, IsTerminal, Write};

use todo_model::{AppState, Summary, ViewFilter};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            color: cfg.color() && io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, state))]
    pub fn print_state(&self, state: &AppState) -> anyhow::Result<()> {
        let out = io::stdout().lock();
        self.write_state(out, state)
    }

    /// Visible tasks as a table followed by the footer line.
    pub fn write_state<W: Write>(&self, mut out: W, state: &AppState) -> anyhow::Result<()> {
        let summary = state.summary();
        if !summary.show_footer() {
            writeln!(out, "No tasks.")?;
            return Ok(());
        }

        if summary.show_main() {
            let rows = state
                .visible_tasks()
                .into_iter()
                .map(|task| {
                    let mark = if task.completed {
                        self.paint("[x]", "32")
                    } else {
                        "[ ]".to_string()
                    };
                    let id = self.paint(short_id(task.id.as_str()), "33");
                    vec![mark, id, task.title.clone()]
                })
                .collect();
            write_table(&mut out, rows)?;
        } else {
            writeln!(out, "Nothing to show.")?;
        }

        writeln!(out, "{}", self.footer(&summary))?;
        Ok(())
    }

    fn footer(&self, summary: &Summary) -> String {
        let links = ViewFilter::ALL
            .into_iter()
            .map(|filter| {
                if summary.route.selects(filter) {
                    self.paint(&format!("[{}]", filter.as_str()), "1")
                } else {
                    filter.as_str().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut line = format!("{} | {}", summary.items_left(), links);
        if summary.show_clear_completed() {
            line.push_str(&format!(" | {} completed", summary.completed));
        }
        line
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

fn write_table<W: Write>(mut writer: W, rows: Vec<Vec<String>>) -> anyhow::Result<()> {
    let column_count = rows.first().map(Vec::len).unwrap_or_default();
    let mut widths = vec![0usize; column_count];

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for row in rows {
        let last = row.len().saturating_sub(1);
        for (idx, cell) in row.iter().enumerate() {
            if idx == last {
                write!(writer, "{cell}")?;
            } else {
                let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
                let padding = widths[idx].saturating_sub(visible_width);
                write!(writer, "{}{}  ", cell, " ".repeat(padding))?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
