/// CSV text/file to Table loader
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::data::datatable::{Table, TableBuilder};

const UTF8_BOM: char = '\u{feff}';

pub struct CsvLoader;

impl CsvLoader {
    /// Read a whole file into memory and build a typed table from it
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        info!("Loading CSV file {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let table = Self::load_str(&contents)
            .with_context(|| format!("Failed to build table from {}", path.display()))?;

        info!(
            "Loaded {}: {} rows, {} columns",
            path.display(),
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    /// Split text into lines and build a typed table.
    ///
    /// Accepts `\n` and `\r\n` endings and skips a leading UTF-8 byte order
    /// mark. Trailing blank lines are dropped; a blank line in the middle of
    /// the data is kept and fails as a short row.
    pub fn load_str(contents: &str) -> Result<Table> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let lines = Self::split_lines(contents);
        Ok(TableBuilder::build(lines)?)
    }

    pub fn split_lines(contents: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = contents.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        lines
    }
}
