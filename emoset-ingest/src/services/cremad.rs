//! CREMA-D label aggregator
//!
//! Reads the corpus summary CSV (one row per clip, one `rater_*` column per
//! annotator) and reduces each clip's categorical votes to per-class binary
//! indicators: a class is set when its share of the clip's valid votes
//! reaches the agreement threshold. Votes outside the recognized class set
//! join neither the numerator nor the denominator.

use emoset_common::{Error, IngestOptions, LabelTable, Result, VotePolicy, ZeroVotePolicy};
use std::path::Path;

use super::statistics::AggregationStats;

/// Rater vote categories recognized in the summary table, alphabetical.
pub const EMOTION_CLASSES: [&str; 6] = ["ANG", "DIS", "FEA", "HAP", "NEU", "SAD"];

/// Column naming convention of the summary table.
const FILE_COLUMN: &str = "file";
const RATER_PREFIX: &str = "rater_";

/// Aggregation output: one binary-label row per clip, plus counters.
#[derive(Debug, Clone)]
pub struct CremadAggregation {
    pub table: LabelTable,
    pub stats: AggregationStats,
}

/// CREMA-D rater-vote aggregator
pub struct CremadAggregator {
    options: IngestOptions,
}

impl CremadAggregator {
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Aggregate per-rater votes into binary labels, one row per clip.
    ///
    /// Each output path is `corpus_root` joined with the row's `file`
    /// identifier; row order follows the CSV. Output columns are the class
    /// names lowercased.
    ///
    /// # Errors
    /// - `Error::NotFound` if the metadata file is missing
    /// - `Error::Schema` if the table has no `file` column, no `rater_*`
    ///   columns, or (under `VotePolicy::Strict`) an unrecognized vote
    /// - `Error::Data` for a zero-vote clip under `ZeroVotePolicy::Fail`,
    ///   or a row with an empty file identifier
    /// - `Error::Csv` for an unreadable or ragged table
    pub fn aggregate(&self, corpus_root: &Path, metadata_path: &Path) -> Result<CremadAggregation> {
        self.options.validate()?;

        if !metadata_path.is_file() {
            return Err(Error::NotFound(format!(
                "CREMA-D metadata table: {}",
                metadata_path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(metadata_path)?;
        let headers = reader.headers()?.clone();

        let file_idx = headers
            .iter()
            .position(|h| h == FILE_COLUMN)
            .ok_or_else(|| {
                Error::Schema(format!(
                    "Metadata table has no '{}' column: {}",
                    FILE_COLUMN,
                    metadata_path.display()
                ))
            })?;
        let rater_idx: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.starts_with(RATER_PREFIX))
            .map(|(i, _)| i)
            .collect();
        if rater_idx.is_empty() {
            return Err(Error::Schema(format!(
                "Metadata table has no '{}*' columns: {}",
                RATER_PREFIX,
                metadata_path.display()
            )));
        }

        // Lowercasing preserves the alphabetical class order, so row values
        // built in EMOTION_CLASSES order stay column-aligned.
        let columns: Vec<String> = EMOTION_CLASSES.iter().map(|c| c.to_lowercase()).collect();
        let mut table = LabelTable::new(columns)?;
        let mut stats = AggregationStats::default();

        for (row_no, record) in reader.records().enumerate() {
            let record = record?;
            let file = record.get(file_idx).unwrap_or("").trim();
            if file.is_empty() {
                return Err(Error::Data(format!(
                    "Metadata row {}: empty file identifier",
                    row_no + 1
                )));
            }

            let mut counts = [0usize; EMOTION_CLASSES.len()];
            let mut total_raters = 0usize;
            for &idx in &rater_idx {
                let vote = record.get(idx).unwrap_or("").trim();
                if vote.is_empty() {
                    continue;
                }
                match EMOTION_CLASSES.iter().position(|c| *c == vote) {
                    Some(class) => {
                        counts[class] += 1;
                        total_raters += 1;
                    }
                    None => match self.options.unknown_vote {
                        VotePolicy::Lenient => {
                            stats.unrecognized_votes += 1;
                            tracing::trace!(vote, row = row_no + 1, "Ignoring unrecognized vote");
                        }
                        VotePolicy::Strict => {
                            return Err(Error::Schema(format!(
                                "Metadata row {}: unrecognized rater vote '{}'",
                                row_no + 1,
                                vote
                            )));
                        }
                    },
                }
            }

            let values = if total_raters == 0 {
                stats.zero_vote_clips += 1;
                match self.options.zero_votes {
                    ZeroVotePolicy::ZeroFill => vec![0; EMOTION_CLASSES.len()],
                    ZeroVotePolicy::Exclude => {
                        stats.clips_excluded += 1;
                        tracing::trace!(file, "Excluding clip with no valid rater votes");
                        continue;
                    }
                    ZeroVotePolicy::Fail => {
                        return Err(Error::Data(format!(
                            "Metadata row {} ({}): no valid rater votes",
                            row_no + 1,
                            file
                        )));
                    }
                }
            } else {
                let denominator = total_raters as f64;
                counts
                    .iter()
                    .map(|&votes| {
                        u8::from(votes as f64 / denominator >= self.options.agreement_threshold)
                    })
                    .collect()
            };

            table.push_row(corpus_root.join(file), values)?;
            stats.clips_kept += 1;
        }

        tracing::debug!("CREMA-D aggregation: {}", stats.display_string());
        Ok(CremadAggregation { table, stats })
    }
}

impl Default for CremadAggregator {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}
