//! Integration tests for CSV export

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{holter_cmd, holter_in, init_diary};

const HEADER: &str = r#""Date","Time","Activity","Symptoms","Notes""#;

#[test]
fn test_export_empty_diary_is_header_only() {
    let temp = init_diary();

    holter_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 entries"));

    let csv = fs::read_to_string(temp.path().join("holter_diary.csv")).unwrap();
    assert_eq!(csv, HEADER);
}

#[test]
fn test_export_entry() {
    let temp = init_diary();
    holter_in(
        temp.path(),
        &[
            "add",
            "--date",
            "2024-01-05",
            "--time",
            "14:30",
            "--activity",
            "Walking",
            "--symptom",
            "Dizziness",
            "--symptom",
            "Tired or fatigued",
            "--notes",
            "felt odd\nafter stairs",
        ],
    );

    holter_in(temp.path(), &["export"]);

    let csv = fs::read_to_string(temp.path().join("holter_diary.csv")).unwrap();
    assert_eq!(
        csv,
        format!(
            "{}\n{}",
            HEADER,
            r#""2024-01-05","14:30","Walking","Dizziness; Tired or fatigued","felt odd after stairs""#
        )
    );
}

#[test]
fn test_export_doubles_embedded_quotes() {
    let temp = init_diary();
    holter_in(temp.path(), &["add", "--notes", r#"the "big" climb"#]);

    holter_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""the ""big"" climb""#));
}

#[test]
fn test_export_to_output_directory() {
    let temp = init_diary();
    holter_in(temp.path(), &["add"]);
    holter_in(temp.path(), &["add"]);
    let out = temp.path().join("out");

    holter_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    let csv = fs::read_to_string(out.join("holter_diary.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_export_uses_configured_directory() {
    let temp = init_diary();
    holter_in(temp.path(), &["config", "export_dir", "clinic"]);

    holter_in(temp.path(), &["export"]);

    assert!(temp.path().join("clinic/holter_diary.csv").exists());
    assert!(!temp.path().join("holter_diary.csv").exists());
}

#[test]
fn test_export_does_not_change_storage() {
    let temp = init_diary();
    holter_in(temp.path(), &["add", "--symptom", "Light-headedness"]);
    let storage = temp.path().join(".holter/holterEntries.json");
    let before = fs::read_to_string(&storage).unwrap();

    holter_in(temp.path(), &["export", "--stdout"]);

    assert_eq!(fs::read_to_string(&storage).unwrap(), before);
}
