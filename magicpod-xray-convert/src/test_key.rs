// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Extracts a tracked-test key embedded in a test name, if present.
///
/// By convention, MagicPod test names that correspond to a Jira-tracked Xray
/// test embed the issue key in trailing square brackets, e.g.
/// `"Login [PROJ-12]"`. The candidate is the text after the *last* `[` with a
/// trailing `]` stripped; it counts as a key only if it contains a `-`
/// (issue keys are always `PROJECT-number`).
///
/// Returns `None` for names without a bracket pair or whose bracket content
/// has no hyphen; those are imported as ad-hoc tests instead.
pub fn extract_test_key(name: &str) -> Option<&str> {
    if !name.contains('[') || !name.contains(']') {
        return None;
    }
    let candidate = name
        .rsplit('[')
        .next()
        .expect("rsplit yields at least one element")
        .trim_end_matches(']');
    candidate.contains('-').then_some(candidate)
}
