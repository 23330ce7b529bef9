// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convert MagicPod batch-run results into Xray execution-import payloads.
//!
//! This crate is the pure core of the importer: it deserializes a MagicPod
//! result document, classifies each test result, and assembles the JSON
//! payload accepted by Xray Cloud's `import/execution` endpoint. It performs
//! no network I/O; uploading is handled by `magicpod-xray-client`.

#![warn(missing_docs)]

mod convert;
mod errors;
mod execution;
mod report;
mod status;
mod test_key;

pub use convert::*;
pub use errors::*;
pub use execution::*;
pub use report::*;
pub use status::*;
pub use test_key::*;
