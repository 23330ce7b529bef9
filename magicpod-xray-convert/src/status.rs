// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;
use std::fmt;

/// An Xray test-run status.
///
/// Xray accepts a closed vocabulary of status strings in execution imports.
/// MagicPod's free-text status labels are folded into it by
/// [`from_magicpod`](Self::from_magicpod).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// The test run passed.
    Passed,
    /// The test run failed.
    Failed,
    /// The test has not been run. Used for skipped results and as the
    /// fallback for unrecognized labels.
    Todo,
}

impl ExecutionStatus {
    /// Maps a MagicPod status label to an Xray status.
    ///
    /// Matching is case-insensitive and exact: only `"succeeded"`,
    /// `"failed"` and `"skipped"` are recognized. Any other label (including
    /// the empty string, and spellings like `"passed"` that MagicPod does not
    /// emit) maps to [`Todo`](Self::Todo). This is a total function; it never
    /// fails.
    pub fn from_magicpod(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "succeeded" => Self::Passed,
            "failed" => Self::Failed,
            "skipped" => Self::Todo,
            _ => Self::Todo,
        }
    }

    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Todo => "TODO",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("succeeded", ExecutionStatus::Passed; "succeeded lowercase")]
    #[test_case("Succeeded", ExecutionStatus::Passed; "succeeded titlecase")]
    #[test_case("SUCCEEDED", ExecutionStatus::Passed; "succeeded uppercase")]
    #[test_case("failed", ExecutionStatus::Failed; "failed lowercase")]
    #[test_case("FAILED", ExecutionStatus::Failed; "failed uppercase")]
    #[test_case("skipped", ExecutionStatus::Todo; "skipped lowercase")]
    #[test_case("Skipped", ExecutionStatus::Todo; "skipped titlecase")]
    #[test_case("", ExecutionStatus::Todo; "empty string")]
    #[test_case("running", ExecutionStatus::Todo; "unknown label")]
    #[test_case("succeeded ", ExecutionStatus::Todo; "trailing whitespace is not trimmed")]
    // MagicPod emits "succeeded", never "passed". The table is exact on
    // purpose; see the status mapping notes in DESIGN.md.
    #[test_case("passed", ExecutionStatus::Todo; "passed is not a recognized label")]
    fn from_magicpod(label: &str, expected: ExecutionStatus) {
        assert_eq!(ExecutionStatus::from_magicpod(label), expected);
    }

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ExecutionStatus::Passed).unwrap(),
            r#""PASSED""#
        );
        assert_eq!(
            serde_json::to_string(&ExecutionStatus::Failed).unwrap(),
            r#""FAILED""#
        );
        assert_eq!(
            serde_json::to_string(&ExecutionStatus::Todo).unwrap(),
            r#""TODO""#
        );
    }
}
