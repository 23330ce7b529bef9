// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while exchanging credentials for an Xray token.
///
/// Authentication failures abort the invocation before an import is
/// attempted.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication request could not be sent or the response could
    /// not be read.
    #[error("error calling Xray authenticate endpoint at `{url}`")]
    Request {
        /// The endpoint URL.
        url: String,
        /// The underlying transport error.
        #[source]
        error: Box<ureq::Error>,
    },

    /// Xray rejected the credentials.
    #[error("Xray authentication at `{url}` rejected with HTTP {status}:\n{body}")]
    Rejected {
        /// The endpoint URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },
}

/// An error that occurs while importing an execution document into Xray.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The import request could not be sent or the response could not be
    /// read.
    #[error("error calling Xray import endpoint at `{url}`")]
    Request {
        /// The endpoint URL.
        url: String,
        /// The underlying transport error.
        #[source]
        error: Box<ureq::Error>,
    },

    /// Xray rejected the payload. The response body is captured before this
    /// error is produced and carried verbatim for diagnostics.
    #[error("Xray import at `{url}` rejected with HTTP {status}:\n{body}")]
    Rejected {
        /// The endpoint URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },

    /// Xray accepted the import but returned a body that is not valid JSON.
    #[error("error parsing Xray import response:\n{body}")]
    Parse {
        /// The response body, verbatim.
        body: String,
        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },
}

/// An error that occurs while creating a Test Plan issue in Jira.
#[derive(Debug, Error)]
pub enum CreatePlanError {
    /// The issue-creation request could not be sent or the response could
    /// not be read.
    #[error("error calling Jira issue endpoint at `{url}`")]
    Request {
        /// The endpoint URL.
        url: String,
        /// The underlying transport error.
        #[source]
        error: Box<ureq::Error>,
    },

    /// Jira rejected the issue creation.
    #[error("Jira issue creation at `{url}` rejected with HTTP {status}:\n{body}")]
    Rejected {
        /// The endpoint URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },

    /// Jira accepted the issue but returned a body that is not valid JSON.
    #[error("error parsing Jira issue response:\n{body}")]
    Parse {
        /// The response body, verbatim.
        body: String,
        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },
}
