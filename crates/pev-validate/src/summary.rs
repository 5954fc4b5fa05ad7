//! Column-level null and type summary.

use polars::prelude::DataFrame;

/// Null count and inferred type of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
}

/// Summarizes every column of `df` in order.
pub fn column_summary(df: &DataFrame) -> Vec<ColumnSummary> {
    df.get_columns()
        .iter()
        .map(|col| {
            let nulls = col.null_count();
            ColumnSummary {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                non_null: col.len() - nulls,
                nulls,
            }
        })
        .collect()
}
