//! Duplicate-row removal.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Removes exact-duplicate rows from a dataset.
pub struct DataCleaner;

impl DataCleaner {
    /// Remove duplicate rows, comparing all columns for exact equality.
    ///
    /// The first occurrence of each distinct row is kept and the relative
    /// order of first occurrences is preserved. An empty input yields an
    /// empty output.
    pub fn remove_duplicates(
        df: DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<(DataFrame, usize)> {
        if df.height() == 0 {
            debug!("Empty table, nothing to deduplicate");
            return Ok((df, 0));
        }

        let before = df.height();
        let df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let duplicates_removed = before - df.height();

        if duplicates_removed > 0 {
            let pct = (duplicates_removed as f64 / before as f64) * 100.0;
            processing_steps.push(format!(
                "Removed {} duplicate rows ({:.1}%)",
                duplicates_removed, pct
            ));
            debug!("Removed {} duplicate rows", duplicates_removed);
        } else {
            debug!("No duplicate rows found");
        }

        Ok((df, duplicates_removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        let df = df![
            "id" => [1i32, 2, 1, 3],
            "v" => [10.0f64, 20.0, 10.0, 30.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let (out, removed) = DataCleaner::remove_duplicates(df, &mut steps).unwrap();

        assert_eq!(out.height(), 3);
        assert_eq!(removed, 1);
        let ids = out.column("id").unwrap();
        assert_eq!(ids.get(0).unwrap().try_extract::<i32>().unwrap(), 1);
        assert_eq!(ids.get(1).unwrap().try_extract::<i32>().unwrap(), 2);
        assert_eq!(ids.get(2).unwrap().try_extract::<i32>().unwrap(), 3);
    }

    #[test]
    fn test_remove_duplicates_compares_all_columns() {
        // Same id, different value: not a duplicate
        let df = df![
            "id" => [1i32, 1],
            "v" => [10.0f64, 11.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let (out, removed) = DataCleaner::remove_duplicates(df, &mut steps).unwrap();

        assert_eq!(out.height(), 2);
        assert_eq!(removed, 0);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_remove_duplicates_all_identical_rows() {
        let df = df![
            "id" => [7i32, 7, 7, 7],
            "v" => [1.0f64, 1.0, 1.0, 1.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let (out, removed) = DataCleaner::remove_duplicates(df, &mut steps).unwrap();

        assert_eq!(out.height(), 1);
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_remove_duplicates_empty_table() {
        let df = DataFrame::empty();
        let mut steps = Vec::new();

        let (out, removed) = DataCleaner::remove_duplicates(df, &mut steps).unwrap();

        assert_eq!(out.height(), 0);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_remove_duplicates_idempotent() {
        let df = df![
            "id" => [1i32, 2, 1, 2],
            "v" => [1.0f64, 2.0, 1.0, 2.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let (once, _) = DataCleaner::remove_duplicates(df, &mut steps).unwrap();
        let (twice, removed) = DataCleaner::remove_duplicates(once.clone(), &mut steps).unwrap();

        assert_eq!(removed, 0);
        assert!(once.equals(&twice));
    }
}
