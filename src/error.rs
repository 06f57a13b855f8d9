use thiserror::Error;

use crate::data::cell_type::SemanticCellType;

/// Errors raised while building a table. All of them abort construction,
/// no partial table is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("no input lines: a header line is required")]
    EmptyInput,

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("duplicate column name '{name}' at positions {first} and {second}")]
    DuplicateColumnName {
        name: String,
        first: usize,
        second: usize,
    },
}

impl TableError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TableError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a single query. These never invalidate the table; the
/// caller reports them and shows zero rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Column \"{0}\" is not in this file.")]
    UnknownColumn(String),

    #[error("Column \"{column}\" has type {data_type}, which cannot be queried by equality.")]
    UnsupportedColumnType {
        column: String,
        data_type: SemanticCellType,
    },
}

/// Raised when a line field splitter hits an invalid quote.
///
/// The row parser attaches the line number and turns this into
/// [`TableError::MalformedRow`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("quoted field starting at column {0} is never closed")]
    UnterminatedQuote(usize),

    #[error("unexpected character '{found}' after closing quote at column {column}")]
    TrailingAfterQuote { column: usize, found: char },
}

/// The free-form query text did not have the `query("Column" value)` shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("could not parse query \"{0}\"")]
    BadFormat(String),
}
