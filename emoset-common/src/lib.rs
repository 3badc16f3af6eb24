//! # EmoSet Common Library
//!
//! Shared code for the EmoSet corpus unification workspace:
//! - Common error type and `Result` alias
//! - Binary label row/table model
//! - Ingest options (thresholds and skip policies)

pub mod error;
pub mod labels;
pub mod options;

pub use error::{Error, Result};
pub use labels::{LabelRow, LabelTable};
pub use options::{IngestOptions, SkipPolicy, VotePolicy, ZeroVotePolicy};
