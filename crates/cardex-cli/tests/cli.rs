//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn cardex() -> Command {
    Command::cargo_bin("cardex").expect("binary builds")
}

#[test]
fn test_banks_lists_supported_issuers() {
    cardex()
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("HDFC Bank"))
        .stdout(predicate::str::contains("Citibank"));
}

#[test]
fn test_banks_json_output() {
    cardex()
        .args(["banks", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"sbi\""));
}

#[test]
fn test_extract_reads_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hdfc.txt");
    std::fs::write(&path, cardex_core::samples::HDFC).unwrap();

    cardex()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"detected_bank\": \"Hdfc\""))
        .stdout(predicate::str::contains("RAJESH KUMAR"))
        .stdout(predicate::str::contains("39432"));
}

#[test]
fn test_extract_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icici.txt");
    std::fs::write(&path, cardex_core::samples::ICICI).unwrap();

    cardex()
        .arg("extract")
        .arg(&path)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card ending:      4321"))
        .stdout(predicate::str::contains("Total amount due: 38765.00"));
}

#[test]
fn test_extract_rejects_unknown_statement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.txt");
    std::fs::write(&path, "quarterly investor letter\n").unwrap();

    cardex()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No supported issuer"));
}

#[test]
fn test_extract_missing_file_fails() {
    cardex()
        .arg("extract")
        .arg("does-not-exist.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_samples_round_trip_through_batch() {
    let dir = tempfile::tempdir().unwrap();
    let samples_dir = dir.path().join("samples");
    let out_dir = dir.path().join("out");

    cardex()
        .args(["samples", "--output-dir"])
        .arg(&samples_dir)
        .assert()
        .success();

    cardex()
        .arg("batch")
        .arg(samples_dir.join("*.txt").display().to_string())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 ok, 0 failed"));

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("Axis"));
    assert!(summary.contains("41123.00"));
}
