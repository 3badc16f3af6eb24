//! IEMOCAP label extractor
//!
//! Walks the corpus's five session directories, parses the bracketed
//! evaluation lines in `dialog/EmoEvaluation/*.txt`, and accumulates a set
//! of emotion codes per utterance. One utterance may appear on several
//! lines (multiple evaluators); the sets union. Only codes from the valid
//! set are kept, and only utterances whose wav file exists on disk.
//!
//! Sessions are independent, so they are extracted in parallel and merged
//! into one path-sorted table.

use emoset_common::{Error, IngestOptions, LabelTable, Result, SkipPolicy};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::statistics::ExtractionStats;

/// Emotion codes recognized in evaluation lines, alphabetical.
pub const VALID_CODES: [&str; 6] = ["ang", "exc", "fru", "hap", "neu", "sad"];

/// Fixed session subdirectories of an IEMOCAP corpus root.
const SESSIONS: [&str; 5] = ["Session1", "Session2", "Session3", "Session4", "Session5"];

/// Wav files are bucketed by the dialog prefix of the utterance id,
/// e.g. `Ses01F_impro01_F000` lives under `Ses01/`.
const BUCKET_LEN: usize = 5;

const AUDIO_EXTENSION: &str = "wav";

/// Extraction output: one binary-label row per utterance, plus counters.
#[derive(Debug, Clone)]
pub struct IemocapExtraction {
    pub table: LabelTable,
    pub stats: ExtractionStats,
}

/// Per-utterance label sets, keyed by audio path. BTreeMap keeps the merge
/// deterministic regardless of session scan order.
type LabelSets = BTreeMap<PathBuf, BTreeSet<&'static str>>;

/// IEMOCAP label extractor
pub struct IemocapExtractor {
    options: IngestOptions,
}

impl IemocapExtractor {
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// Extract per-utterance label sets from all five sessions.
    ///
    /// Sessions are scanned in parallel; each worker owns its own
    /// accumulator and the results merge into one path-sorted map.
    ///
    /// # Errors
    /// - `Error::NotFound` if the corpus root or a session's annotation or
    ///   audio directory is missing
    /// - `Error::MissingAudio` under `SkipPolicy::Fail` when an annotation
    ///   references a wav file that does not exist
    ///
    /// Malformed lines and unrecognized codes are never fatal; they are
    /// skipped and counted.
    pub fn extract(&self, corpus_root: &Path) -> Result<IemocapExtraction> {
        if !corpus_root.is_dir() {
            return Err(Error::NotFound(format!(
                "IEMOCAP corpus root: {}",
                corpus_root.display()
            )));
        }

        let per_session: Vec<(LabelSets, ExtractionStats)> = SESSIONS
            .par_iter()
            .map(|session| self.extract_session(corpus_root, session))
            .collect::<Result<Vec<_>>>()?;

        let mut label_sets = LabelSets::new();
        let mut stats = ExtractionStats::default();
        for (session_sets, session_stats) in per_session {
            stats.merge(&session_stats);
            for (path, codes) in session_sets {
                label_sets.entry(path).or_default().extend(codes);
            }
        }
        stats.utterances_kept = label_sets.len();

        let mut table = LabelTable::new(VALID_CODES.to_vec())?;
        for (path, codes) in label_sets {
            let values = VALID_CODES
                .iter()
                .map(|code| u8::from(codes.contains(code)))
                .collect();
            table.push_row(path, values)?;
        }

        tracing::debug!("IEMOCAP extraction: {}", stats.display_string());
        Ok(IemocapExtraction { table, stats })
    }

    /// Scan one session's annotation files.
    fn extract_session(
        &self,
        corpus_root: &Path,
        session: &str,
    ) -> Result<(LabelSets, ExtractionStats)> {
        let emo_dir = corpus_root.join(session).join("dialog").join("EmoEvaluation");
        let wav_base = corpus_root.join(session).join("sentences").join("wav");

        if !emo_dir.is_dir() {
            return Err(Error::NotFound(format!(
                "Annotation directory: {}",
                emo_dir.display()
            )));
        }
        if !wav_base.is_dir() {
            return Err(Error::NotFound(format!(
                "Audio directory: {}",
                wav_base.display()
            )));
        }

        let mut label_sets = LabelSets::new();
        let mut stats = ExtractionStats::default();

        for entry in WalkDir::new(&emo_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            stats.annotation_files += 1;
            let content = std::fs::read_to_string(entry.path())?;
            self.scan_annotation_file(&content, &wav_base, &mut label_sets, &mut stats)?;
        }

        tracing::debug!(
            session = session,
            files = stats.annotation_files,
            utterances = label_sets.len(),
            "Session scanned"
        );
        Ok((label_sets, stats))
    }

    /// Scan the lines of one annotation file into the accumulator.
    fn scan_annotation_file(
        &self,
        content: &str,
        wav_base: &Path,
        label_sets: &mut LabelSets,
        stats: &mut ExtractionStats,
    ) -> Result<()> {
        for line in content.lines() {
            // Evaluation records start with the bracketed timestamp span;
            // headers, turn transcripts and comment lines do not.
            if !line.starts_with('[') {
                continue;
            }

            let Some((utt_id, code)) = parse_evaluation_line(line) else {
                stats.malformed_lines += 1;
                tracing::trace!(line, "Skipping malformed evaluation line");
                continue;
            };

            let Some(code) = VALID_CODES.iter().find(|c| **c == code).copied() else {
                stats.unknown_codes += 1;
                tracing::trace!(code, "Skipping unrecognized emotion code");
                continue;
            };

            let Some(bucket) = utt_id.get(..BUCKET_LEN) else {
                stats.malformed_lines += 1;
                continue;
            };
            let wav_path = wav_base
                .join(bucket)
                .join(format!("{utt_id}.{AUDIO_EXTENSION}"));
            if !wav_path.is_file() {
                match self.options.missing_audio {
                    SkipPolicy::Skip => {
                        stats.missing_audio += 1;
                        tracing::trace!(path = %wav_path.display(), "Skipping missing audio file");
                        continue;
                    }
                    SkipPolicy::Fail => return Err(Error::MissingAudio(wav_path)),
                }
            }

            label_sets.entry(wav_path).or_default().insert(code);
        }
        Ok(())
    }
}

impl Default for IemocapExtractor {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}

/// Split an evaluation line into (utterance id, emotion code).
///
/// Fields are tab-separated; the bracketed timestamp span contains internal
/// spaces, so it must stay one field:
/// `[6.2901 - 8.2357]\tSes01F_impro01_F000\tneu\t[2.5, 2.5, 2.5]`
fn parse_evaluation_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t');
    let _span = fields.next()?;
    let utt_id = fields.next()?.trim();
    let code = fields.next()?.trim();
    if utt_id.is_empty() || code.is_empty() {
        return None;
    }
    Some((utt_id, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EVAL_FILE: &str = concat!(
        "% [START_TIME - END_TIME] TURN_NAME EMOTION [V, A, D]\n",
        "\n",
        "[6.2901 - 8.2357]\tSes01F_impro01_F000\tneu\t[2.5000, 2.5000, 2.5000]\n",
        "[10.0100 - 11.3925]\tSes01F_impro01_F001\tfru\t[2.0000, 3.5000, 3.0000]\n",
        "[10.0100 - 11.3925]\tSes01F_impro01_F001\tang\t[2.0000, 3.5000, 3.0000]\n",
        "[14.8872 - 18.0175]\tSes01F_impro01_F002\txxx\t[2.5000, 2.5000, 2.5000]\n",
        "[19.2900 - 20.7875]\tSes01F_impro01_M000\n",
        "C-E1:\tNeutral;\t()\n",
    );

    /// Build a corpus with all five sessions; session 1 carries the fixture
    /// annotations, the rest are empty but structurally valid.
    fn fixture_corpus() -> TempDir {
        let dir = TempDir::new().unwrap();
        for session in SESSIONS {
            fs::create_dir_all(dir.path().join(session).join("dialog").join("EmoEvaluation"))
                .unwrap();
            fs::create_dir_all(dir.path().join(session).join("sentences").join("wav")).unwrap();
        }

        let s1 = dir.path().join("Session1");
        fs::write(
            s1.join("dialog/EmoEvaluation/Ses01F_impro01.txt"),
            EVAL_FILE,
        )
        .unwrap();
        let bucket = s1.join("sentences/wav/Ses01");
        fs::create_dir_all(&bucket).unwrap();
        fs::write(bucket.join("Ses01F_impro01_F000.wav"), b"RIFF").unwrap();
        fs::write(bucket.join("Ses01F_impro01_F001.wav"), b"RIFF").unwrap();
        // F002's wav intentionally absent (and its code is invalid anyway)
        dir
    }

    #[test]
    fn test_extract_accumulates_codes_per_utterance() {
        let corpus = fixture_corpus();
        let extraction = IemocapExtractor::default().extract(corpus.path()).unwrap();
        let table = &extraction.table;

        assert_eq!(table.columns(), VALID_CODES);
        assert_eq!(table.len(), 2);

        // F000: neu only
        assert_eq!(table.value(0, "neu"), Some(1));
        assert_eq!(table.value(0, "ang"), Some(0));
        // F001: union of fru and ang across two evaluation lines
        assert_eq!(table.value(1, "fru"), Some(1));
        assert_eq!(table.value(1, "ang"), Some(1));
        assert_eq!(table.value(1, "neu"), Some(0));
    }

    #[test]
    fn test_rows_sorted_by_path() {
        let corpus = fixture_corpus();
        let extraction = IemocapExtractor::default().extract(corpus.path()).unwrap();
        let paths: Vec<_> = extraction.table.rows().iter().map(|r| r.path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_skip_counters() {
        let corpus = fixture_corpus();
        let extraction = IemocapExtractor::default().extract(corpus.path()).unwrap();
        let stats = &extraction.stats;

        assert_eq!(stats.annotation_files, 1);
        assert_eq!(stats.utterances_kept, 2);
        assert_eq!(stats.unknown_codes, 1); // xxx
        assert_eq!(stats.malformed_lines, 1); // bracketed line with 2 fields
        assert_eq!(stats.missing_audio, 0); // the xxx line never reaches the audio check
    }

    #[test]
    fn test_missing_audio_skipped_and_counted() {
        let corpus = fixture_corpus();
        fs::write(
            corpus
                .path()
                .join("Session2/dialog/EmoEvaluation/Ses02F_impro01.txt"),
            "[1.0 - 2.0]\tSes02F_impro01_F000\thap\t[3.0, 3.0, 3.0]\n",
        )
        .unwrap();

        let extraction = IemocapExtractor::default().extract(corpus.path()).unwrap();
        assert_eq!(extraction.stats.missing_audio, 1);
        assert_eq!(extraction.table.len(), 2);
    }

    #[test]
    fn test_missing_audio_fatal_under_fail_policy() {
        let corpus = fixture_corpus();
        fs::write(
            corpus
                .path()
                .join("Session2/dialog/EmoEvaluation/Ses02F_impro01.txt"),
            "[1.0 - 2.0]\tSes02F_impro01_F000\thap\t[3.0, 3.0, 3.0]\n",
        )
        .unwrap();

        let options = IngestOptions {
            missing_audio: SkipPolicy::Fail,
            ..IngestOptions::default()
        };
        let result = IemocapExtractor::new(options).extract(corpus.path());
        assert!(matches!(result, Err(Error::MissingAudio(_))));
    }

    #[test]
    fn test_missing_session_directory_is_fatal() {
        let corpus = fixture_corpus();
        fs::remove_dir_all(corpus.path().join("Session4")).unwrap();
        let result = IemocapExtractor::default().extract(corpus.path());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_missing_corpus_root_is_fatal() {
        let result =
            IemocapExtractor::default().extract(Path::new("/nonexistent/iemocap"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_parse_evaluation_line_fields() {
        let line = "[6.2901 - 8.2357]\tSes01F_impro01_F000\tneu\t[2.5000, 2.5000, 2.5000]";
        assert_eq!(
            parse_evaluation_line(line),
            Some(("Ses01F_impro01_F000", "neu"))
        );
        assert_eq!(parse_evaluation_line("[6.2901 - 8.2357]"), None);
        assert_eq!(parse_evaluation_line("[6.2901 - 8.2357]\t\tneu"), None);
    }

    #[test]
    fn test_non_txt_annotation_files_ignored() {
        let corpus = fixture_corpus();
        fs::write(
            corpus
                .path()
                .join("Session3/dialog/EmoEvaluation/notes.bak"),
            "[1.0 - 2.0]\tSes03F_impro01_F000\thap\t[3.0, 3.0, 3.0]\n",
        )
        .unwrap();
        let extraction = IemocapExtractor::default().extract(corpus.path()).unwrap();
        assert_eq!(extraction.stats.annotation_files, 1);
    }
}
