//! Dataset builder
//!
//! Composes the pipeline end to end: extract IEMOCAP, aggregate CREMA-D,
//! rename the IEMOCAP codes to full names, reconcile into one table. The
//! two corpus readers share no state and fail independently.

use emoset_common::{IngestOptions, LabelTable, Result};
use std::path::Path;

use super::cremad::CremadAggregator;
use super::iemocap::IemocapExtractor;
use super::reconciler::{iemocap_rename_map, reconcile, rename_columns};
use super::statistics::DatasetStats;

/// Final build output: the unified table plus all phase counters.
#[derive(Debug, Clone)]
pub struct DatasetBuild {
    pub table: LabelTable,
    pub stats: DatasetStats,
}

/// End-to-end corpus unification
pub struct DatasetBuilder {
    options: IngestOptions,
}

impl DatasetBuilder {
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Build the unified multi-label table from both corpora.
    ///
    /// # Arguments
    /// * `iemocap_root` - IEMOCAP corpus root (holds `Session1..Session5`)
    /// * `cremad_root` - CREMA-D audio directory joined with each clip's
    ///   file identifier
    /// * `cremad_metadata` - path of the CREMA-D rater-vote summary CSV
    pub fn build(
        &self,
        iemocap_root: &Path,
        cremad_root: &Path,
        cremad_metadata: &Path,
    ) -> Result<DatasetBuild> {
        self.options.validate()?;

        tracing::info!(root = %iemocap_root.display(), "Extracting IEMOCAP labels");
        let extraction = IemocapExtractor::new(self.options.clone()).extract(iemocap_root)?;
        tracing::info!("{}", extraction.stats.display_string());

        tracing::info!(metadata = %cremad_metadata.display(), "Aggregating CREMA-D rater votes");
        let aggregation =
            CremadAggregator::new(self.options.clone()).aggregate(cremad_root, cremad_metadata)?;
        tracing::info!("{}", aggregation.stats.display_string());

        let renamed = rename_columns(extraction.table, iemocap_rename_map())?;
        let table = reconcile(renamed, aggregation.table)?;
        tracing::info!(
            rows = table.len(),
            labels = table.columns().len(),
            "Unified label table built"
        );

        Ok(DatasetBuild {
            table,
            stats: DatasetStats {
                extraction: extraction.stats,
                aggregation: aggregation.stats,
            },
        })
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}
