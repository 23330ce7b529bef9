// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model for MagicPod batch-run result documents.
//!
//! Only the fields the converter consumes are modeled; MagicPod exports carry
//! a number of other fields (durations, device info, etc.) which are ignored
//! during deserialization.

use crate::errors::ReportError;
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

/// A MagicPod batch-run result document.
///
/// This is the root of the JSON document produced by MagicPod's batch-run
/// API. Obtain one with [`BatchRunReport::from_path`] or by deserializing
/// JSON directly.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchRunReport {
    /// The URL identifying this batch run on MagicPod.
    pub url: String,

    /// Test case results, grouped into detail groups.
    ///
    /// Absent in reports for batch runs that executed no tests.
    #[serde(default)]
    pub test_cases: TestCases,
}

impl BatchRunReport {
    /// Reads and deserializes a batch-run report from a file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path).map_err(|error| ReportError::Read {
            path: path.to_owned(),
            error,
        })?;
        serde_json::from_str(&contents).map_err(|error| ReportError::Parse {
            path: path.to_owned(),
            error,
        })
    }

    /// Iterates over every case result in document order: detail groups in
    /// order, then the results within each group.
    pub fn iter_results(&self) -> impl Iterator<Item = &CaseResult> + '_ {
        self.test_cases
            .details
            .iter()
            .flat_map(|group| group.results.iter())
    }
}

/// The `test_cases` section of a batch-run report.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TestCases {
    /// Ordered detail groups.
    #[serde(default)]
    pub details: Vec<DetailGroup>,
}

/// One detail group: an ordered list of case results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DetailGroup {
    /// Results within this group, in execution order.
    #[serde(default)]
    pub results: Vec<CaseResult>,
}

/// The outcome of a single test case run.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CaseResult {
    /// Metadata about the test case that produced this result.
    #[serde(default)]
    pub test_case: CaseInfo,

    /// MagicPod's status label for this run, e.g. `"succeeded"`.
    #[serde(default)]
    pub status: Option<String>,
}

impl CaseResult {
    /// The display name for this result's test case.
    ///
    /// MagicPod omits the name for deleted test cases; those fall back to a
    /// placeholder.
    pub fn display_name(&self) -> &str {
        self.test_case.name.as_deref().unwrap_or("Unnamed Test")
    }
}

/// Metadata about a test case.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CaseInfo {
    /// The human-readable test case name.
    pub name: Option<String>,
}
