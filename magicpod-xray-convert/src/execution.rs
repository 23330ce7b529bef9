// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model for Xray execution-import payloads.
//!
//! The wire format is documented at
//! <https://docs.getxray.app/display/XRAYCLOUD/Import+Execution+Results>.

use crate::status::ExecutionStatus;
use serde::Serialize;

/// An Xray execution-import payload.
///
/// This is the JSON body POSTed to Xray Cloud's `import/execution` endpoint.
/// Built fresh on each conversion; immutable once handed to the uploader.
#[derive(Clone, Debug, Serialize)]
pub struct ExecutionDocument {
    /// Human-readable labels for the whole import batch.
    pub info: ExecutionInfo,

    /// One entry per source test result, in source document order.
    pub tests: Vec<TestEntry>,
}

impl ExecutionDocument {
    /// Serializes this document as human-readable JSON for logging.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("execution document serialization is infallible")
    }
}

/// Labels describing the import batch as a whole.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExecutionInfo {
    /// Summary for the created Test Execution issue.
    pub summary: String,

    /// Description for the created Test Execution issue.
    pub description: String,
}

/// One imported test result.
#[derive(Clone, Debug, Serialize)]
pub struct TestEntry {
    /// The run status, in Xray's vocabulary.
    pub status: ExecutionStatus,

    /// Provenance note embedding the original MagicPod test name.
    pub comment: String,

    /// Whether this result maps to a tracked Xray test or an ad-hoc one.
    #[serde(flatten)]
    pub identity: TestIdentity,
}

/// The identity of an imported test: tracked or ad-hoc.
///
/// Serializes as exactly one of `testKey` or `testInfo`; the enum makes the
/// exclusive-or structural rather than a runtime invariant.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum TestIdentity {
    /// A test already registered in Xray, referenced by issue key.
    Tracked {
        /// The Jira issue key of the tracked test, e.g. `PROJ-12`.
        #[serde(rename = "testKey")]
        test_key: String,
    },
    /// A test not registered in Xray, defined inline at import time.
    AdHoc {
        /// Inline metadata Xray uses to create the test.
        #[serde(rename = "testInfo")]
        test_info: TestInfo,
    },
}

/// Inline metadata for an ad-hoc test.
#[derive(Clone, Debug, Serialize)]
pub struct TestInfo {
    /// Summary for the test created by Xray, the original test name.
    pub summary: String,

    /// The Xray test type.
    #[serde(rename = "type")]
    pub test_type: TestType,
}

/// Xray test types used for ad-hoc tests.
///
/// MagicPod results are imported as `Manual` so they can be re-run and
/// curated from the Xray UI.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum TestType {
    /// A manually executed test.
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tracked_entry_serializes_with_test_key() {
        let entry = TestEntry {
            status: ExecutionStatus::Passed,
            comment: "Imported from MagicPod. Original test: Login [PROJ-12]".to_owned(),
            identity: TestIdentity::Tracked {
                test_key: "PROJ-12".to_owned(),
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "PASSED",
                "comment": "Imported from MagicPod. Original test: Login [PROJ-12]",
                "testKey": "PROJ-12",
            })
        );
    }

    #[test]
    fn ad_hoc_entry_serializes_with_test_info() {
        let entry = TestEntry {
            status: ExecutionStatus::Todo,
            comment: "Imported from MagicPod. Original test: Smoke [nohyphen]".to_owned(),
            identity: TestIdentity::AdHoc {
                test_info: TestInfo {
                    summary: "Smoke [nohyphen]".to_owned(),
                    test_type: TestType::Manual,
                },
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "TODO",
                "comment": "Imported from MagicPod. Original test: Smoke [nohyphen]",
                "testInfo": {
                    "summary": "Smoke [nohyphen]",
                    "type": "Manual",
                },
            })
        );
    }

    #[test]
    fn entry_never_carries_both_identities() {
        // Structural: an entry holds one TestIdentity variant, so the JSON
        // object can only ever contain one of the two fields.
        let entry = TestEntry {
            status: ExecutionStatus::Failed,
            comment: String::new(),
            identity: TestIdentity::Tracked {
                test_key: "X-1".to_owned(),
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("testKey"));
        assert!(!object.contains_key("testInfo"));
    }
}
