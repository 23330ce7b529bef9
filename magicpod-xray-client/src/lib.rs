// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clients for the services MagicPod results are uploaded to.
//!
//! Two independent clients share nothing but the HTTP agent configuration:
//!
//! * [`XrayClient`] authenticates against Xray Cloud and uploads execution
//!   documents produced by `magicpod-xray-convert`.
//! * [`JiraClient`] creates Test Plan issues in the Jira site hosting Xray.
//!
//! All calls are bounded, blocking round-trips. There is no retry logic and
//! no caching; a failed call surfaces as a typed error carrying the remote
//! status and body.

#![warn(missing_docs)]

mod errors;
mod jira;
mod xray;

pub use errors::*;
pub use jira::*;
pub use xray::*;

use ureq::Agent;

/// Builds the blocking agent used by both clients.
///
/// Non-2xx statuses are handled by inspecting the response rather than
/// through `ureq`'s status errors, so that rejection bodies can be captured
/// and surfaced to the caller.
pub(crate) fn build_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}
