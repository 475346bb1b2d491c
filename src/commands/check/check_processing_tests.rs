use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::checker::{FileResult, FindingKind, RuleEvaluator};

use super::{check_file, check_files};

#[test]
fn check_file_evaluates_readable_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Form.tsx");
    fs::write(&path, "export const F = () => <button>Go</button>;").unwrap();

    let result = check_file(&path, &RuleEvaluator::new());

    assert!(!result.is_unreadable());
    assert_eq!(result.count_of(FindingKind::ForbiddenHtml), 1);
}

#[test]
fn check_file_missing_file_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Gone.tsx");

    let result = check_file(&path, &RuleEvaluator::new());

    assert!(result.is_unreadable());
    assert!(result.findings().is_empty());
    assert!(result.unreadable_reason().is_some());
}

#[test]
fn check_file_invalid_utf8_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Binary.tsx");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let result = check_file(&path, &RuleEvaluator::new());

    assert!(result.is_unreadable());
}

#[test]
fn check_files_preserves_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..20)
        .map(|i| {
            let path = temp_dir.path().join(format!("C{i:02}.tsx"));
            let body = if i % 3 == 0 {
                "<input />"
            } else {
                "export const X = 1;"
            };
            fs::write(&path, body).unwrap();
            path
        })
        .collect();

    let results = check_files(&files, &RuleEvaluator::new());

    let paths: Vec<&Path> = results.iter().map(FileResult::path).collect();
    let expected: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    assert_eq!(paths, expected);

    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.is_compliant(), i % 3 != 0, "file {i}");
    }
}

#[test]
fn check_files_empty_input() {
    let results = check_files(&[], &RuleEvaluator::new());
    assert!(results.is_empty());
}
