//! Shared utilities for the cleaning pipeline.

use polars::prelude::*;

use crate::error::{CleaningError, Result};

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Fetch a column as a `Float64` chunked array.
///
/// Integer columns are cast; a missing column maps to
/// [`CleaningError::ColumnNotFound`] instead of a raw polars error.
pub fn column_f64(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| CleaningError::ColumnNotFound(name.to_string()))?;
    let series = column.as_materialized_series();
    let cast = series.cast(&DataType::Float64)?;
    Ok(cast.f64()?.clone())
}

/// Names of all numeric columns in the dataframe, in schema order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| is_numeric_dtype(c.dtype()))
        .map(|c| c.name().to_string())
        .collect()
}
