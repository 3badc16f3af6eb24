//! Label-schema reconciler
//!
//! The two corpus readers emit tables over independently named label
//! vocabularies. Reconciliation renames the IEMOCAP short codes to full
//! names, computes the union of both column sets, zero-fills each table's
//! missing columns, and concatenates IEMOCAP rows ahead of CREMA-D rows.
//! All operations are pure: they consume a table and return a new one.

use emoset_common::{Error, LabelTable, Result};
use std::collections::BTreeSet;

/// Fixed rename table from IEMOCAP emotion codes to shared full names.
///
/// Every code in `iemocap::VALID_CODES` has an entry; renaming an
/// out-of-table column is a schema error.
pub fn iemocap_rename_map() -> &'static [(&'static str, &'static str)] {
    &[
        ("ang", "angry"),
        ("exc", "excitement"),
        ("fru", "frustration"),
        ("hap", "happy"),
        ("neu", "neutral"),
        ("sad", "sad"),
    ]
}

/// Rename every label column through the mapping table.
///
/// Row values are re-aligned to the renamed columns' sort order. A column
/// with no map entry, or two columns mapping to one name, is a schema
/// error.
pub fn rename_columns(table: LabelTable, map: &[(&str, &str)]) -> Result<LabelTable> {
    let (columns, rows) = table.into_parts();

    // (new name, index into the old value vector)
    let mut renamed: Vec<(String, usize)> = Vec::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        let target = map
            .iter()
            .find(|(from, _)| from == column)
            .map(|(_, to)| (*to).to_string())
            .ok_or_else(|| Error::Schema(format!("No rename entry for label '{}'", column)))?;
        renamed.push((target, idx));
    }
    renamed.sort();

    let mut out = LabelTable::new(renamed.iter().map(|(name, _)| name.clone()).collect::<Vec<_>>())?;
    for row in rows {
        let values = renamed.iter().map(|(_, idx)| row.values[*idx]).collect();
        out.push_row(row.path, values)?;
    }
    Ok(out)
}

/// Sorted union of both tables' label columns.
pub fn shared_vocabulary(a: &LabelTable, b: &LabelTable) -> Vec<String> {
    let union: BTreeSet<&String> = a.columns().iter().chain(b.columns().iter()).collect();
    union.into_iter().cloned().collect()
}

/// Re-project a table onto a vocabulary, zero-filling absent columns.
///
/// The vocabulary must cover every existing column.
pub fn align_columns(table: LabelTable, vocabulary: &[String]) -> Result<LabelTable> {
    let (columns, rows) = table.into_parts();

    if let Some(missing) = columns.iter().find(|c| !vocabulary.contains(c)) {
        return Err(Error::Schema(format!(
            "Label '{}' is not in the shared vocabulary",
            missing
        )));
    }

    // For each vocabulary column: the source value index, or zero-fill.
    let sources: Vec<Option<usize>> = vocabulary
        .iter()
        .map(|label| columns.iter().position(|c| c == label))
        .collect();

    let mut out = LabelTable::new(vocabulary.to_vec())?;
    for row in rows {
        let values = sources
            .iter()
            .map(|source| source.map_or(0, |idx| row.values[idx]))
            .collect();
        out.push_row(row.path, values)?;
    }
    Ok(out)
}

/// Concatenate two column-aligned tables, `a` rows first.
pub fn concat(a: LabelTable, b: LabelTable) -> Result<LabelTable> {
    if a.columns() != b.columns() {
        return Err(Error::Schema(format!(
            "Cannot concatenate tables with different columns: {:?} vs {:?}",
            a.columns(),
            b.columns()
        )));
    }
    let (columns, mut rows) = a.into_parts();
    let (_, b_rows) = b.into_parts();
    rows.extend(b_rows);
    LabelTable::from_parts(columns, rows)
}

/// Full reconciliation: vocabulary union, zero-fill both sides, concat,
/// validate every indicator is binary.
///
/// `a` is expected to be already renamed (see [`rename_columns`]).
pub fn reconcile(a: LabelTable, b: LabelTable) -> Result<LabelTable> {
    let vocabulary = shared_vocabulary(&a, &b);
    let a = align_columns(a, &vocabulary)?;
    let b = align_columns(b, &vocabulary)?;
    let table = concat(a, b)?;
    table.validate()?;
    Ok(table)
}
