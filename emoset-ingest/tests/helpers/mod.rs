//! Fixture corpora for integration tests

use std::fs;
use std::path::{Path, PathBuf};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Lay out a miniature IEMOCAP tree under `root`.
///
/// All five sessions exist; sessions 1 and 2 carry annotations:
/// - `Ses01F_impro01_F000` — neu, wav present
/// - `Ses01F_impro01_F001` — fru and ang on two evaluator lines, wav present
/// - `Ses01F_impro01_F002` — invalid code `xxx`
/// - `Ses01F_impro01_M000` — hap, wav intentionally missing
/// - `Ses02M_script01_1_M001` — exc and sad on two lines, wav present
pub fn write_iemocap_corpus(root: &Path) {
    for session in ["Session1", "Session2", "Session3", "Session4", "Session5"] {
        fs::create_dir_all(root.join(session).join("dialog").join("EmoEvaluation")).unwrap();
        fs::create_dir_all(root.join(session).join("sentences").join("wav")).unwrap();
    }

    let s1_eval = concat!(
        "% [START_TIME - END_TIME] TURN_NAME EMOTION [V, A, D]\n",
        "\n",
        "[6.2901 - 8.2357]\tSes01F_impro01_F000\tneu\t[2.5000, 2.5000, 2.5000]\n",
        "[10.0100 - 11.3925]\tSes01F_impro01_F001\tfru\t[2.0000, 3.5000, 3.0000]\n",
        "[10.0100 - 11.3925]\tSes01F_impro01_F001\tang\t[2.0000, 3.5000, 3.0000]\n",
        "[14.8872 - 18.0175]\tSes01F_impro01_F002\txxx\t[2.5000, 2.5000, 2.5000]\n",
        "[19.2900 - 20.7875]\tSes01F_impro01_M000\thap\t[3.0000, 3.0000, 3.0000]\n",
    );
    fs::write(
        root.join("Session1/dialog/EmoEvaluation/Ses01F_impro01.txt"),
        s1_eval,
    )
    .unwrap();
    let s1_bucket = root.join("Session1/sentences/wav/Ses01");
    fs::create_dir_all(&s1_bucket).unwrap();
    fs::write(s1_bucket.join("Ses01F_impro01_F000.wav"), b"RIFF").unwrap();
    fs::write(s1_bucket.join("Ses01F_impro01_F001.wav"), b"RIFF").unwrap();

    let s2_eval = concat!(
        "[1.0000 - 2.0000]\tSes02M_script01_1_M001\texc\t[4.0000, 4.0000, 3.0000]\n",
        "[3.0000 - 4.0000]\tSes02M_script01_1_M001\tsad\t[2.0000, 2.0000, 2.0000]\n",
    );
    fs::write(
        root.join("Session2/dialog/EmoEvaluation/Ses02M_script01_1.txt"),
        s2_eval,
    )
    .unwrap();
    let s2_bucket = root.join("Session2/sentences/wav/Ses02");
    fs::create_dir_all(&s2_bucket).unwrap();
    fs::write(s2_bucket.join("Ses02M_script01_1_M001.wav"), b"RIFF").unwrap();
}

/// Write a miniature CREMA-D corpus under `dir`: an audio root and the
/// rater-vote summary table.
///
/// - `1001_DFA_HAP_XX.wav` — HAP, HAP, SAD
/// - `1002_IEO_DIS_HI.wav` — DIS, DIS, DIS
/// - `1003_TIE_NEU_XX.wav` — one unrecognized vote, two absent (zero valid)
pub fn write_cremad_corpus(dir: &Path) -> (PathBuf, PathBuf) {
    let audio_root = dir.join("AudioWAV");
    fs::create_dir_all(&audio_root).unwrap();

    let metadata = dir.join("summary.csv");
    fs::write(
        &metadata,
        concat!(
            "file,rater_1,rater_2,rater_3\n",
            "1001_DFA_HAP_XX.wav,HAP,HAP,SAD\n",
            "1002_IEO_DIS_HI.wav,DIS,DIS,DIS\n",
            "1003_TIE_NEU_XX.wav,other,,\n",
        ),
    )
    .unwrap();

    (audio_root, metadata)
}
