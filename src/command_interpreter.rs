//! Executes one line of user input against a loaded table
//!
//! Commands return their text instead of printing it, so the same interpreter
//! drives the interactive prompt, `--command` mode and the tests.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as DisplayTable};
use tracing::debug;

use crate::data::datatable::{Row, Table};
use crate::data::query_dispatcher::QueryDispatcher;
use crate::error::QueryError;
use crate::query_parser::{is_query_command, parse_query};
use crate::utils::logging::LogRingBuffer;

const DEFAULT_LOG_LINES: usize = 20;

pub const HELP_TEXT: &str = r#"Commands:
  query("Column" "value")   rows where Column equals value
  query("Column" 123)       bare values work for numbers and booleans
  describe                  column names and inferred types
  logs [N]                  last N diagnostic log lines (default 20)
  help                      this text
  quit | exit               leave the session"#;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Normal output for stdout
    Output(String),
    /// Something the user should fix (unknown column, bad syntax, ...)
    Diagnostic(String),
    Quit,
}

pub struct CommandInterpreter {
    table: Table,
    log_buffer: Option<LogRingBuffer>,
}

impl CommandInterpreter {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            log_buffer: None,
        }
    }

    pub fn with_log_buffer(mut self, log_buffer: LogRingBuffer) -> Self {
        self.log_buffer = Some(log_buffer);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn execute(&self, line: &str) -> CommandOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandOutcome::Output(String::new());
        }

        if is_query_command(trimmed) {
            return self.do_query(trimmed);
        }

        let mut words = trimmed.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        debug!("Executing command '{}'", command);

        match command.as_str() {
            "describe" => CommandOutcome::Output(render_describe(&self.table)),
            "help" | "\\help" | "?" => CommandOutcome::Output(HELP_TEXT.to_string()),
            "logs" => match words.next().map(str::parse::<usize>) {
                None => self.do_logs(DEFAULT_LOG_LINES),
                Some(Ok(count)) => self.do_logs(count),
                Some(Err(_)) => CommandOutcome::Diagnostic("Usage: logs [N]".to_string()),
            },
            "quit" | "exit" | "\\q" => CommandOutcome::Quit,
            _ => CommandOutcome::Diagnostic(format!(
                "Unknown command \"{}\". Use \"help\" to list the commands.",
                command
            )),
        }
    }

    fn do_query(&self, line: &str) -> CommandOutcome {
        let spec = match parse_query(line) {
            Ok(spec) => spec,
            Err(e) => {
                return CommandOutcome::Diagnostic(format!(
                    "{}\nExpected query(\"Column\" \"value\") or query(\"Column\" 123).",
                    e
                ))
            }
        };

        match QueryDispatcher::query(&self.table, &spec.column, &spec.value) {
            Ok(rows) => CommandOutcome::Output(render_rows(&self.table, &rows)),
            Err(e @ QueryError::UnknownColumn(_)) => CommandOutcome::Diagnostic(format!(
                "{}\nUse the \"describe\" command to see the column names and types.\n0 rows found",
                e
            )),
            Err(e @ QueryError::UnsupportedColumnType { .. }) => {
                CommandOutcome::Diagnostic(format!("{}\n0 rows found", e))
            }
        }
    }

    fn do_logs(&self, count: usize) -> CommandOutcome {
        let Some(buffer) = &self.log_buffer else {
            return CommandOutcome::Diagnostic("Logging is not initialised.".to_string());
        };

        let entries = buffer.get_recent(count);
        if entries.is_empty() {
            return CommandOutcome::Output("No log entries.".to_string());
        }

        CommandOutcome::Output(
            entries
                .iter()
                .map(|e| e.format_for_display())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Header names, one line per matching row, then the count
pub fn render_rows(table: &Table, rows: &[&Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(table.column_names().join(","));
    lines.extend(rows.iter().map(|row| row.to_string()));
    lines.push(format!("{} rows found", rows.len()));
    lines.join("\n")
}

/// Column names and inferred types as a table
pub fn render_describe(table: &Table) -> String {
    let mut display = DisplayTable::new();
    display.set_content_arrangement(ContentArrangement::Dynamic);
    display.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
    ]);

    for (idx, field) in table.header().iter().enumerate() {
        display.add_row(vec![
            (idx + 1).to_string(),
            field.name.clone(),
            field.data_type.to_string(),
        ]);
    }

    format!(
        "{display}\n{} rows, {} columns",
        table.row_count(),
        table.column_count()
    )
}
