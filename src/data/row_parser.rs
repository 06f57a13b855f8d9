//! Splits header and data lines into typed fields
//!
//! Splitting is quote-aware: a field that starts with `"` runs until the
//! matching closing quote, so embedded commas stay part of the field. Inside
//! quotes `""` stands for a single literal quote.

use std::iter::Peekable;
use std::str::Chars;

use crate::data::cell_type::SemanticCellType;
use crate::data::type_inference::TypeInference;
use crate::error::SplitError;

pub const FIELD_DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// One column of the header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub data_type: SemanticCellType,
}

impl HeaderField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: SemanticCellType::Undetermined,
        }
    }
}

/// One field of a data line: the unquoted text plus the per-row type guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    pub text: String,
    pub data_type: SemanticCellType,
}

impl DataField {
    /// Build a field and classify its text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let data_type = TypeInference::classify(&text);
        Self { text, data_type }
    }
}

pub struct RowParser;

impl RowParser {
    pub fn parse_header(line: &str) -> Result<Vec<HeaderField>, SplitError> {
        Ok(Self::split_fields(line)?
            .into_iter()
            .map(HeaderField::new)
            .collect())
    }

    pub fn parse_data_row(line: &str) -> Result<Vec<DataField>, SplitError> {
        Ok(Self::split_fields(line)?
            .into_iter()
            .map(DataField::new)
            .collect())
    }

    /// Split a line on the field delimiter, honouring quotes.
    ///
    /// Always yields at least one field; an empty line is a single empty field.
    pub fn split_fields(line: &str) -> Result<Vec<String>, SplitError> {
        let mut fields = Vec::new();
        let mut chars = line.chars().peekable();
        // 1-based column of the next character to read
        let mut column = 1;

        loop {
            let field = if chars.peek() == Some(&QUOTE) {
                Self::read_quoted(&mut chars, &mut column)?
            } else {
                Self::read_unquoted(&mut chars, &mut column)
            };
            fields.push(field);

            match chars.next() {
                None => break,
                Some(FIELD_DELIMITER) => column += 1,
                Some(found) => {
                    return Err(SplitError::TrailingAfterQuote { column, found });
                }
            }
        }

        Ok(fields)
    }

    /// Reads up to (not including) the next delimiter or end of line.
    fn read_unquoted(chars: &mut Peekable<Chars<'_>>, column: &mut usize) -> String {
        let mut field = String::new();
        while let Some(&c) = chars.peek() {
            if c == FIELD_DELIMITER {
                break;
            }
            field.push(c);
            chars.next();
            *column += 1;
        }
        field
    }

    /// Reads a quoted field, leaving the iterator just past the closing quote.
    fn read_quoted(
        chars: &mut Peekable<Chars<'_>>,
        column: &mut usize,
    ) -> Result<String, SplitError> {
        let start = *column;
        let mut field = String::new();

        // Opening quote
        chars.next();
        *column += 1;

        loop {
            match chars.next() {
                None => return Err(SplitError::UnterminatedQuote(start)),
                Some(QUOTE) => {
                    *column += 1;
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        *column += 1;
                        field.push(QUOTE);
                    } else {
                        return Ok(field);
                    }
                }
                Some(c) => {
                    *column += 1;
                    field.push(c);
                }
            }
        }
    }
}
