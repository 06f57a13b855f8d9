//! Parser for the textual `query("Column" value)` command
//!
//! Only extracts the column name and the raw value string. Type conversion of
//! the value happens later, against the column's inferred type.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::QueryParseError;

/// Matches `query("Column" "value")` and `query("Column" 123)`.
/// Group 1 is the column, group 2 a quoted value, group 3 a bare value.
static QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\s*query\s*\(\s*"([^"]+)"\s+(?:"([^"]*)"|([^\s()"]+))\s*\)\s*$"#).unwrap()
});

/// A single-column equality query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub column: String,
    pub value: String,
}

impl QuerySpec {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Does the line look like it is meant to be a query command?
pub fn is_query_command(line: &str) -> bool {
    line.trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("query"))
}

pub fn parse_query(line: &str) -> Result<QuerySpec, QueryParseError> {
    let caps = QUERY_PATTERN
        .captures(line)
        .ok_or_else(|| QueryParseError::BadFormat(line.to_string()))?;

    let column = caps[1].to_string();
    let value = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Ok(QuerySpec { column, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_value() {
        assert_eq!(
            parse_query(r#"query("Filename" "Iceland.png")"#),
            Ok(QuerySpec::new("Filename", "Iceland.png"))
        );
        assert_eq!(
            parse_query(r#"  QUERY ( "Type"   "png" ) "#),
            Ok(QuerySpec::new("Type", "png"))
        );
    }

    #[test]
    fn test_bare_values() {
        assert_eq!(
            parse_query(r#"query("Image X" 600)"#),
            Ok(QuerySpec::new("Image X", "600"))
        );
        assert_eq!(
            parse_query(r#"query("Temp" -1.5)"#),
            Ok(QuerySpec::new("Temp", "-1.5"))
        );
        assert_eq!(
            parse_query(r#"query("Active" yes)"#),
            Ok(QuerySpec::new("Active", "yes"))
        );
    }

    #[test]
    fn test_quoted_values_keep_spaces_and_commas() {
        assert_eq!(
            parse_query(r#"query("Loc" "51.5, -0.12")"#),
            Ok(QuerySpec::new("Loc", "51.5, -0.12"))
        );
        assert_eq!(
            parse_query(r#"query("Name" "")"#),
            Ok(QuerySpec::new("Name", ""))
        );
    }

    #[test]
    fn test_bad_format() {
        for line in [
            "query",
            r#"query("Age")"#,
            r#"query(Age 30)"#,
            r#"query("Age" 30"#,
            r#"query("Age" 30 40)"#,
            r#"select("Age" 30)"#,
        ] {
            assert_eq!(
                parse_query(line),
                Err(QueryParseError::BadFormat(line.to_string())),
                "line: {}",
                line
            );
        }
    }

    #[test]
    fn test_is_query_command() {
        assert!(is_query_command("  Query(\"a\" 1)"));
        assert!(is_query_command("query"));
        assert!(!is_query_command("describe"));
        assert!(!is_query_command("q"));
    }
}
