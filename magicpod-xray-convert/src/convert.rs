// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversion core: MagicPod batch-run report to Xray execution document.

use crate::{
    errors::ReportError,
    execution::{ExecutionDocument, ExecutionInfo, TestEntry, TestIdentity, TestInfo, TestType},
    report::{BatchRunReport, CaseResult},
    status::ExecutionStatus,
    test_key::extract_test_key,
};
use camino::Utf8Path;

/// Converts a parsed batch-run report into an Xray execution document.
///
/// Pure and deterministic: the same report and summary always produce the
/// same document. Every case result in the report becomes exactly one test
/// entry, in document order; nothing is filtered or deduplicated.
///
/// `summary` overrides the generated batch summary. The description is always
/// derived from the report URL, whether or not a summary override is given.
pub fn convert_report(report: &BatchRunReport, summary: Option<&str>) -> ExecutionDocument {
    let info = ExecutionInfo {
        summary: summary.map_or_else(
            || format!("MagicPod Batch Run: {}", report.url),
            str::to_owned,
        ),
        description: format!(
            "Imported automatically from MagicPod. \n MagicPod URL: {}",
            report.url
        ),
    };

    let tests = report.iter_results().map(convert_result).collect();

    ExecutionDocument { info, tests }
}

/// Reads a batch-run report from a file and converts it.
///
/// Fails with [`ReportError`] if the file cannot be read or is not valid
/// MagicPod result JSON; no document is produced in that case.
pub fn convert_file(
    path: &Utf8Path,
    summary: Option<&str>,
) -> Result<ExecutionDocument, ReportError> {
    let report = BatchRunReport::from_path(path)?;
    Ok(convert_report(&report, summary))
}

fn convert_result(result: &CaseResult) -> TestEntry {
    let name = result.display_name();
    let status = ExecutionStatus::from_magicpod(result.status.as_deref().unwrap_or(""));

    let identity = match extract_test_key(name) {
        Some(key) => TestIdentity::Tracked {
            test_key: key.to_owned(),
        },
        None => TestIdentity::AdHoc {
            test_info: TestInfo {
                summary: name.to_owned(),
                test_type: TestType::Manual,
            },
        },
    };

    TestEntry {
        status,
        comment: format!("Imported from MagicPod. Original test: {name}"),
        identity,
    }
}
