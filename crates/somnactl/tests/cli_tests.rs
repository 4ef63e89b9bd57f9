//! CLI surface tests
//!
//! Spawns the built somnactl binary. Each test skips quietly when the
//! binary has not been built yet, so the suite stays safe to run in any
//! order of the build.

use somna_common::question_bank;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

fn binary_path() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let target = manifest_dir.parent()?.parent()?.join("target");
    ["debug", "release"]
        .iter()
        .map(|profile| target.join(profile).join("somnactl"))
        .find(|candidate| candidate.exists())
}

fn complete_answers_file() -> NamedTempFile {
    let entries: Vec<String> = question_bank()
        .iter()
        .map(|q| format!("\"{}\":\"{}\"", q.key, q.options[0].canonical))
        .collect();
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{{}}}", entries.join(",")).expect("write answers");
    file
}

#[test]
fn help_lists_the_subcommands() {
    let Some(binary) = binary_path() else { return };
    let output = Command::new(binary)
        .arg("--help")
        .output()
        .expect("run somnactl --help");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quiz"));
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("questions"));
}

#[test]
fn questions_json_lists_all_25_questions() {
    let Some(binary) = binary_path() else { return };
    let output = Command::new(binary)
        .args(["questions", "--json"])
        .output()
        .expect("run somnactl questions");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("question bank JSON");
    assert_eq!(parsed.as_array().map(Vec::len), Some(25));
}

#[test]
fn analyze_json_emits_a_report() {
    let Some(binary) = binary_path() else { return };
    let answers = complete_answers_file();
    let output = Command::new(binary)
        .args(["analyze", "--json", "--answers"])
        .arg(answers.path())
        .output()
        .expect("run somnactl analyze");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report JSON");
    assert!(parsed.get("diagnoses").is_some());
    assert!(parsed.get("confidence").is_some());
    assert!(parsed.get("recommendations").is_some());
}

#[test]
fn analyze_refuses_an_incomplete_answers_file() {
    let Some(binary) = binary_path() else { return };
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"sleep_quality":"good"}}"#).expect("write answers");
    let output = Command::new(binary)
        .args(["analyze", "--answers"])
        .arg(file.path())
        .output()
        .expect("run somnactl analyze");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("question(s) remaining"));
}
