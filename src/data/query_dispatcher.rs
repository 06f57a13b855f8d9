use tracing::debug;

use crate::data::cell_type::SemanticCellType;
use crate::data::cell_value::CellValue;
use crate::data::datatable::{Row, Table};
use crate::error::QueryError;

/// Single-column equality query dispatcher
pub struct QueryDispatcher;

impl QueryDispatcher {
    /// Return the rows whose `column_name` field equals `raw_value`.
    ///
    /// The query value is converted to the column's inferred type first. A
    /// value that cannot be converted simply matches nothing. Unknown columns
    /// and `Tags` columns are reported as errors and no matching is done.
    pub fn query<'t>(
        table: &'t Table,
        column_name: &str,
        raw_value: &str,
    ) -> Result<Vec<&'t Row>, QueryError> {
        let col_idx = table
            .index_for_column_name(column_name)
            .ok_or_else(|| QueryError::UnknownColumn(column_name.to_string()))?;
        let column_type = table.header()[col_idx].data_type;

        if column_type == SemanticCellType::Tags {
            return Err(QueryError::UnsupportedColumnType {
                column: column_name.to_string(),
                data_type: column_type,
            });
        }

        let Some(target) = CellValue::convert(raw_value, column_type) else {
            debug!(
                "Query value '{}' cannot be read as {} for column '{}'; no rows match",
                raw_value, column_type, column_name
            );
            return Ok(Vec::new());
        };

        let matches: Vec<&Row> = table
            .rows()
            .iter()
            .filter(|row| {
                row.get(col_idx)
                    .and_then(|field| CellValue::convert(&field.text, column_type))
                    .is_some_and(|value| value == target)
            })
            .collect();

        debug!(
            "Query {} = '{}' ({}) matched {} of {} rows",
            column_name,
            raw_value,
            column_type,
            matches.len(),
            table.row_count()
        );

        Ok(matches)
    }
}
