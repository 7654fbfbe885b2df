//! End-to-end tests of the ngramcat binary

#[path = "../../ngramcat-classifiers/tests/corpus/mod.rs"]
mod corpus;

use corpus::*;
use std::path::Path;
use std::process::{Command, Output};

fn ngramcat(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ngramcat"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run ngramcat")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Train English, French and German into `languages.ngcp` inside `dir`
fn train_languages(dir: &Path) {
    for (id, text) in [
        (ENGLISH, ENGLISH_TRAINING),
        (FRENCH, FRENCH_TRAINING),
        (GERMAN, GERMAN_TRAINING),
    ] {
        let sample = dir.join(format!("{}.txt", id));
        std::fs::write(&sample, text).unwrap();

        let output = ngramcat(
            dir,
            &[
                "train",
                "--profiles",
                "languages.ngcp",
                "--category",
                &id.to_string(),
                sample.to_str().unwrap(),
            ],
        );
        assert!(output.status.success(), "train failed: {:?}", output);
    }
}

#[test]
fn test_train_then_list() {
    let dir = tempfile::tempdir().unwrap();
    train_languages(dir.path());

    let output = ngramcat(dir.path(), &["list", "--profiles", "languages.ngcp"]);
    assert!(output.status.success());

    let ids: Vec<String> = stdout(&output)
        .lines()
        .map(|line| line.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_classify_each_language() {
    let dir = tempfile::tempdir().unwrap();
    train_languages(dir.path());

    for (probe, expected) in [
        (ENGLISH_PROBE, ENGLISH),
        (FRENCH_PROBE, FRENCH),
        (GERMAN_PROBE, GERMAN),
    ] {
        let output = ngramcat(
            dir.path(),
            &["classify", "--profiles", "languages.ngcp", "--max-candidates", "3", probe],
        );
        assert!(output.status.success(), "classify failed: {:?}", output);

        let best = stdout(&output).split(',').next().unwrap().to_string();
        assert_eq!(best, expected.to_string());
    }
}

#[test]
fn test_classify_enabled_subset_as_json() {
    let dir = tempfile::tempdir().unwrap();
    train_languages(dir.path());

    let output = ngramcat(
        dir.path(),
        &[
            "classify",
            "--profiles",
            "languages.ngcp",
            "--enable",
            "1,3",
            "--json",
            ENGLISH_PROBE,
        ],
    );
    assert!(output.status.success(), "classify failed: {:?}", output);

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["categories"][0], 1);
    let scored: Vec<i64> = result["scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_i64().unwrap())
        .collect();
    assert!(!scored.contains(&FRENCH));
}

#[test]
fn test_short_document_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    train_languages(dir.path());

    let output = ngramcat(
        dir.path(),
        &["classify", "--profiles", "languages.ngcp", "Hello there, friend!"],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("too short"));
}

#[test]
fn test_config_file_sets_profile_path() {
    let dir = tempfile::tempdir().unwrap();
    train_languages(dir.path());
    std::fs::write(
        dir.path().join("ngramcat.yaml"),
        "profiles: languages.ngcp\nthreshold_value: 10.0\nmax_candidates: 1\n",
    )
    .unwrap();

    // the wide threshold from the file makes every language a candidate
    let output = ngramcat(dir.path(), &["classify", ENGLISH_PROBE]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ambiguous"));

    // flags override the file
    let output = ngramcat(dir.path(), &["classify", "--threshold", "1.0", ENGLISH_PROBE]);
    assert!(output.status.success(), "classify failed: {:?}", output);
    assert_eq!(stdout(&output), ENGLISH.to_string());
}

#[test]
fn test_corrupt_profile_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.ngcp"), b"not a profile file").unwrap();

    let output = ngramcat(dir.path(), &["list", "--profiles", "broken.ngcp"]);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
}

#[test]
fn test_patterns_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = ngramcat(dir.path(), &["patterns", "--limit", "5", "banana"]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "0\t3\ta");
    assert_eq!(lines[1], "1\t2\tan");
}
