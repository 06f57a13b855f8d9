use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

use crate::data::cell_type::SemanticCellType;
use crate::data::row_parser::{DataField, HeaderField, RowParser};
use crate::error::{QueryError, TableError};

/// A row of data in the table, one field per header column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<DataField>,
}

impl Row {
    pub fn new(fields: Vec<DataField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[DataField] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&DataField> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Comma-joined field text, as the row is printed in query results
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(&field.text)?;
        }
        Ok(())
    }
}

/// Immutable typed table.
///
/// Only [`TableBuilder`] can create one, and nothing hands out mutable access
/// afterwards, so the header types always equal the join of their column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<HeaderField>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from raw lines; see [`TableBuilder::build`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TableBuilder::build(lines)
    }

    pub fn header(&self) -> &[HeaderField] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.header.iter().map(|h| h.name.as_str()).collect()
    }

    pub fn index_for_column_name(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.name == name)
    }

    pub fn column_type(&self, name: &str) -> Result<SemanticCellType, QueryError> {
        self.index_for_column_name(name)
            .map(|idx| self.header[idx].data_type)
            .ok_or_else(|| QueryError::UnknownColumn(name.to_string()))
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Mutable accumulator used while a table is being parsed.
///
/// Consumed by [`TableBuilder::finish`]; header types are attached there and
/// never touched again.
#[derive(Debug)]
pub struct TableBuilder {
    header: Vec<HeaderField>,
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Parse the header line and start an empty table.
    pub fn from_header(line: &str) -> Result<Self, TableError> {
        let header =
            RowParser::parse_header(line).map_err(|e| TableError::malformed(1, e.to_string()))?;

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(header.len());
        for (idx, field) in header.iter().enumerate() {
            if let Some(first) = seen.insert(field.name.as_str(), idx) {
                return Err(TableError::DuplicateColumnName {
                    name: field.name.clone(),
                    first: first + 1,
                    second: idx + 1,
                });
            }
        }

        Ok(Self {
            header,
            rows: Vec::new(),
        })
    }

    /// Parse one data line. `line_number` is 1-based and counts the header.
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Result<(), TableError> {
        let fields = RowParser::parse_data_row(line)
            .map_err(|e| TableError::malformed(line_number, e.to_string()))?;

        if fields.len() != self.header.len() {
            return Err(TableError::malformed(
                line_number,
                format!(
                    "row has {} fields but the header has {} columns",
                    fields.len(),
                    self.header.len()
                ),
            ));
        }

        self.rows.push(Row::new(fields));
        Ok(())
    }

    /// Unify every column over all rows and freeze the table.
    pub fn finish(mut self) -> Table {
        for (col_idx, header_field) in self.header.iter_mut().enumerate() {
            header_field.data_type = SemanticCellType::join_all(
                self.rows.iter().map(|row| row.fields[col_idx].data_type),
            );
            debug!(
                "Column '{}' inferred as {}",
                header_field.name, header_field.data_type
            );
        }

        Table {
            header: self.header,
            rows: self.rows,
        }
    }

    /// Build a table: line 0 is the header, the rest are data rows.
    ///
    /// Fails on zero lines, a malformed row or duplicate column names. A
    /// header-only input gives a table with no rows and all columns
    /// `Undetermined`.
    pub fn build<I, S>(lines: I) -> Result<Table, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let header_line = lines.next().ok_or(TableError::EmptyInput)?;
        let mut builder = Self::from_header(header_line.as_ref())?;

        for (idx, line) in lines.enumerate() {
            // +2: 1-based, and the header is line 1
            builder.push_line(idx + 2, line.as_ref())?;
        }

        if builder.rows.is_empty() {
            info!(
                "Header-only input: {} columns, no data rows",
                builder.header.len()
            );
        }

        let table = builder.finish();
        debug!(
            "Built table with {} rows and {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }
}
