//! Date shape and identifier checks.

use std::collections::HashSet;
use std::sync::LazyLock;

use polars::prelude::{BooleanChunked, Column, DataFrame, DataType, NewChunkedArray};
use regex::Regex;

use crate::error::{Result, ValidateError};

/// `YYYY-MM-DD` anywhere in the value.
///
/// Shape only: `2020-13-40` matches.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Invalid date shape regex"));

/// Returns true when the value contains a `YYYY-MM-DD` shaped substring.
pub fn has_date_shape(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

fn string_column(df: &DataFrame, column: &str) -> Result<Column> {
    let col = df
        .column(column)
        .map_err(|_| ValidateError::MissingColumn {
            column: column.to_string(),
        })?;
    Ok(col.cast(&DataType::String)?)
}

/// Rows whose `column` is null or lacks a date-shaped value.
pub fn malformed_dates(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let values = string_column(df, column)?;
    let keep: Vec<bool> = values
        .str()?
        .iter()
        .map(|value| !value.is_some_and(has_date_shape))
        .collect();
    let mask = BooleanChunked::from_slice("malformed".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Distinct values of `column`, null counted as one value.
pub fn distinct_count(df: &DataFrame, column: &str) -> Result<usize> {
    Ok(string_column(df, column)?.n_unique()?)
}

/// Distinct values of `key` among rows where `required` is not null.
pub fn distinct_where_present(df: &DataFrame, key: &str, required: &str) -> Result<usize> {
    let keys = string_column(df, key)?;
    let required = string_column(df, required)?;
    let distinct: HashSet<Option<&str>> = keys
        .str()?
        .iter()
        .zip(required.str()?.iter())
        .filter(|(_, value)| value.is_some())
        .map(|(key, _)| key)
        .collect();
    Ok(distinct.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_date_shape_is_not_calendar_validation() {
        assert!(has_date_shape("2020-01-31"));
        assert!(has_date_shape("2020-13-40"));
        assert!(has_date_shape("on 2020-01-31"));
        assert!(!has_date_shape("01/31/2020"));
        assert!(!has_date_shape("2020-1-31"));
        assert!(!has_date_shape(""));
    }

    #[test]
    fn test_malformed_dates_keeps_nulls_and_bad_shapes() {
        let df = test_df(vec![
            ("patient_id", vec![Some("1"), Some("2"), Some("3"), Some("4")]),
            (
                "date",
                vec![Some("2020-01-01"), Some("2020-13-40"), None, Some("1/1/2020")],
            ),
        ]);
        let malformed = malformed_dates(&df, "date").unwrap();
        let ids: Vec<Option<&str>> = malformed
            .column("patient_id")
            .unwrap()
            .str()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(ids, vec![Some("3"), Some("4")]);
    }

    #[test]
    fn test_distinct_where_present() {
        let df = test_df(vec![
            ("patient_id", vec![Some("1"), Some("1"), Some("2"), Some("3")]),
            ("icd_code", vec![Some("I10"), None, Some("E11.9"), None]),
        ]);
        assert_eq!(distinct_count(&df, "patient_id").unwrap(), 3);
        assert_eq!(distinct_where_present(&df, "patient_id", "icd_code").unwrap(), 2);
    }

    #[test]
    fn test_missing_column() {
        let df = test_df(vec![("patient_id", vec![Some("1")])]);
        assert!(matches!(
            malformed_dates(&df, "birth_date"),
            Err(ValidateError::MissingColumn { .. })
        ));
    }
}
