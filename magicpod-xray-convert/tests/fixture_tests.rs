// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion tests against a realistic MagicPod batch-run export.

use camino::Utf8PathBuf;
use camino_tempfile::Utf8TempDir;
use magicpod_xray_convert::{ExecutionStatus, ReportError, TestIdentity, convert_file};
use pretty_assertions::assert_eq;
use std::io::Write;

fn fixture_path() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/batch_run.json")
}

#[test]
fn converts_full_batch_run_export() {
    let doc = convert_file(&fixture_path(), None).expect("fixture converts");

    assert_eq!(
        doc.info.summary,
        "MagicPod Batch Run: https://app.magicpod.com/demo-org/shopping-app/batch-run/117/"
    );
    assert_eq!(
        doc.info.description,
        "Imported automatically from MagicPod. \n MagicPod URL: \
         https://app.magicpod.com/demo-org/shopping-app/batch-run/117/"
    );

    // One entry per result record, groups then results.
    assert_eq!(doc.tests.len(), 5);

    let statuses: Vec<_> = doc.tests.iter().map(|t| t.status).collect();
    assert_eq!(
        statuses,
        [
            ExecutionStatus::Passed,
            ExecutionStatus::Failed,
            ExecutionStatus::Todo,
            ExecutionStatus::Passed,
            ExecutionStatus::Passed,
        ]
    );

    let keys: Vec<_> = doc
        .tests
        .iter()
        .map(|t| match &t.identity {
            TestIdentity::Tracked { test_key } => Some(test_key.as_str()),
            TestIdentity::AdHoc { .. } => None,
        })
        .collect();
    // "Search results [localized]" has brackets but no hyphen, and the
    // nameless result falls back to the placeholder; both stay ad-hoc.
    assert_eq!(keys, [Some("SHOP-101"), Some("SHOP-114"), None, None, None]);

    match &doc.tests[4].identity {
        TestIdentity::AdHoc { test_info } => assert_eq!(test_info.summary, "Unnamed Test"),
        TestIdentity::Tracked { .. } => panic!("nameless result must be ad-hoc"),
    }
}

#[test]
fn summary_override_applies_to_info_only() {
    let doc = convert_file(&fixture_path(), Some("Release 2.3 smoke")).expect("fixture converts");
    assert_eq!(doc.info.summary, "Release 2.3 smoke");
    assert!(doc.info.description.contains("batch-run/117"));
}

#[test]
fn converting_twice_is_byte_identical() {
    let first = convert_file(&fixture_path(), None).unwrap().to_json_pretty();
    let second = convert_file(&fixture_path(), None).unwrap().to_json_pretty();
    assert_eq!(first, second);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = Utf8TempDir::new().unwrap();
    let err = convert_file(&dir.path().join("nope.json"), None).unwrap_err();
    assert!(matches!(err, ReportError::Read { .. }), "got {err:?}");
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = Utf8TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{{\"url\": ").unwrap();

    let err = convert_file(&path, None).unwrap_err();
    assert!(matches!(err, ReportError::Parse { .. }), "got {err:?}");
}
