//! Binary label row/table model
//!
//! The common output unit of both corpus readers: an audio path plus one
//! 0/1 indicator per emotion column. The table owns the column list; every
//! row holds exactly one value per column, in column order.

use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One audio clip with its indicator vector, aligned to the owning table's
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    /// Path of the audio file this row describes
    pub path: PathBuf,
    /// One 0/1 indicator per table column, in column order
    pub values: Vec<u8>,
}

/// Ordered rows under a fixed, deterministic column schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelTable {
    columns: Vec<String>,
    rows: Vec<LabelRow>,
}

impl LabelTable {
    /// Create an empty table over the given label columns.
    ///
    /// Columns are sorted lexicographically for a reproducible schema.
    /// Duplicate column names are a schema error.
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Result<Self> {
        let mut columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        columns.sort();
        let unique: BTreeSet<&String> = columns.iter().collect();
        if unique.len() != columns.len() {
            return Err(Error::Schema(format!(
                "Duplicate label column in {:?}",
                columns
            )));
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Label column names, sorted, excluding the path column.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row. The value vector must match the column count.
    pub fn push_row(&mut self, path: PathBuf, values: Vec<u8>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::Data(format!(
                "Row for {} has {} values, table has {} columns",
                path.display(),
                values.len(),
                self.columns.len()
            )));
        }
        self.rows.push(LabelRow { path, values });
        Ok(())
    }

    /// Indicator value for a row index and column name, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<u8> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| r.values[col])
    }

    /// Row for a given audio path, if present.
    pub fn row_for_path(&self, path: &std::path::Path) -> Option<&LabelRow> {
        self.rows.iter().find(|r| r.path == path)
    }

    /// Verify every row is column-aligned and every indicator is 0 or 1.
    pub fn validate(&self) -> Result<()> {
        for row in &self.rows {
            if row.values.len() != self.columns.len() {
                return Err(Error::Data(format!(
                    "Row for {} has {} values, table has {} columns",
                    row.path.display(),
                    row.values.len(),
                    self.columns.len()
                )));
            }
            if let Some(bad) = row.values.iter().find(|v| **v > 1) {
                return Err(Error::Data(format!(
                    "Non-binary indicator {} in row for {}",
                    bad,
                    row.path.display()
                )));
            }
        }
        Ok(())
    }

    /// Decompose into (columns, rows) for schema-rewriting operations.
    pub fn into_parts(self) -> (Vec<String>, Vec<LabelRow>) {
        (self.columns, self.rows)
    }

    /// Reassemble from parts produced by a schema-rewriting operation.
    ///
    /// Caller guarantees rows are aligned to `columns`; alignment is still
    /// checked by `validate`.
    pub fn from_parts(columns: Vec<String>, rows: Vec<LabelRow>) -> Result<Self> {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row.path, row.values)?;
        }
        Ok(table)
    }
}
