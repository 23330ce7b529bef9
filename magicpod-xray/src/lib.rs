// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Import MagicPod batch-run results into Xray Cloud.
//!
//! This binary converts MagicPod's batch-run result JSON into Xray's
//! execution-import payload and uploads it, and can also create Test Plan
//! issues in the Jira site hosting Xray. The conversion logic lives in
//! `magicpod-xray-convert`; the service clients live in
//! `magicpod-xray-client`.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::OutputContext;
