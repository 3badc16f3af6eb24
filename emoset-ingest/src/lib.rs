//! emoset-ingest - Emotional-speech corpus unification
//!
//! Reads two emotional-speech corpora with incompatible label taxonomies and
//! produces one multi-label table mapping each audio file path to a binary
//! vector over a shared emotion vocabulary:
//!
//! - IEMOCAP: per-session annotation text files referencing session-bucketed
//!   wav clips, parsed into per-utterance emotion-code sets
//! - CREMA-D: a flat audio directory plus a rater-vote summary CSV, reduced
//!   to per-class indicators with an agreement threshold
//!
//! The two readers run independently; the reconciler renames the IEMOCAP
//! codes to full names, unions both column sets, zero-fills absent labels,
//! and concatenates into the final table. `DatasetBuilder` composes the
//! whole pipeline.

pub mod services;

pub use emoset_common::{Error, IngestOptions, LabelRow, LabelTable, Result};
pub use services::dataset_builder::{DatasetBuild, DatasetBuilder};
