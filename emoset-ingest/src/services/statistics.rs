//! Ingest statistics tracking
//!
//! Per-phase skip/keep counters returned alongside each phase's table.
//! Skipped records are excluded silently from the output; these counters
//! are the observable record of every exclusion.

use serde::{Deserialize, Serialize};

/// IEMOCAP extraction phase counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Annotation files scanned
    pub annotation_files: usize,
    /// Utterances emitted (distinct audio paths with >=1 valid code)
    pub utterances_kept: usize,
    /// Significant lines with too few fields to parse
    pub malformed_lines: usize,
    /// Lines whose emotion code is outside the valid set
    pub unknown_codes: usize,
    /// Annotations whose referenced audio file does not exist
    pub missing_audio: usize,
}

impl ExtractionStats {
    pub fn display_string(&self) -> String {
        format!(
            "{} utterances kept from {} annotation files, {} malformed lines, {} unknown codes, {} missing audio",
            self.utterances_kept,
            self.annotation_files,
            self.malformed_lines,
            self.unknown_codes,
            self.missing_audio
        )
    }

    /// Fold another counter set into this one (per-session merge).
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.annotation_files += other.annotation_files;
        self.utterances_kept += other.utterances_kept;
        self.malformed_lines += other.malformed_lines;
        self.unknown_codes += other.unknown_codes;
        self.missing_audio += other.missing_audio;
    }
}

/// CREMA-D aggregation phase counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationStats {
    /// Clips emitted
    pub clips_kept: usize,
    /// Rater votes outside the recognized class set (lenient policy)
    pub unrecognized_votes: usize,
    /// Clips that had zero valid rater votes
    pub zero_vote_clips: usize,
    /// Clips dropped by the zero-vote exclude policy
    pub clips_excluded: usize,
}

impl AggregationStats {
    pub fn display_string(&self) -> String {
        format!(
            "{} clips kept, {} unrecognized votes, {} zero-vote clips, {} excluded",
            self.clips_kept, self.unrecognized_votes, self.zero_vote_clips, self.clips_excluded
        )
    }
}

/// Combined counters for one full dataset build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub extraction: ExtractionStats,
    pub aggregation: AggregationStats,
}
