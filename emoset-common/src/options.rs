//! Ingest options
//!
//! Thresholds and skip policies for corpus ingestion. All fields have
//! defaults, so a partial TOML fragment parses:
//!
//! ```toml
//! agreement-threshold = 0.4
//! zero-votes = "exclude"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Policy for an annotation whose referenced audio file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipPolicy {
    /// Exclude the utterance and count it
    #[default]
    Skip,
    /// Abort the run with `Error::MissingAudio`
    Fail,
}

/// Policy for a rater vote outside the recognized class set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VotePolicy {
    /// Ignore the vote (no numerator, no denominator) and count it
    #[default]
    Lenient,
    /// Abort the run with `Error::Schema`
    Strict,
}

/// Policy for a rated clip with zero valid rater votes.
///
/// The agreement fraction is undefined for such a clip; the division is
/// guarded by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroVotePolicy {
    /// Emit the row with all indicators 0
    #[default]
    ZeroFill,
    /// Drop the row and count it
    Exclude,
    /// Abort the run with `Error::Data`
    Fail,
}

/// Options shared by the corpus ingest services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IngestOptions {
    /// Minimum agreement fraction for a class indicator to be set.
    /// A fraction exactly at the threshold counts as agreement.
    pub agreement_threshold: f64,
    /// Missing-audio handling during annotation extraction
    pub missing_audio: SkipPolicy,
    /// Unrecognized rater-vote handling during aggregation
    pub unknown_vote: VotePolicy,
    /// Zero-valid-rater handling during aggregation
    pub zero_votes: ZeroVotePolicy,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            agreement_threshold: 0.3,
            missing_audio: SkipPolicy::default(),
            unknown_vote: VotePolicy::default(),
            zero_votes: ZeroVotePolicy::default(),
        }
    }
}

impl IngestOptions {
    /// Parse options from a TOML fragment; absent keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check option values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.agreement_threshold > 0.0 && self.agreement_threshold <= 1.0) {
            return Err(Error::Config(format!(
                "Agreement threshold out of range (0, 1]: {}",
                self.agreement_threshold
            )));
        }
        Ok(())
    }
}
