//! Service modules for the corpus unification pipeline
//!
//! Three phases composed by `DatasetBuilder`:
//! - `iemocap` — annotation-file extraction into per-utterance label sets
//! - `cremad` — rater-vote aggregation with an agreement threshold
//! - `reconciler` — label renaming, vocabulary union, zero-fill, concat

pub mod cremad;
pub mod dataset_builder;
pub mod iemocap;
pub mod reconciler;
pub mod statistics;

pub use cremad::{CremadAggregation, CremadAggregator, EMOTION_CLASSES};
pub use dataset_builder::{DatasetBuild, DatasetBuilder};
pub use iemocap::{IemocapExtraction, IemocapExtractor, VALID_CODES};
pub use reconciler::{
    align_columns, concat, iemocap_rename_map, reconcile, rename_columns, shared_vocabulary,
};
pub use statistics::{AggregationStats, DatasetStats, ExtractionStats};
