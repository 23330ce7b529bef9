// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::StderrStyles;
use magicpod_xray_client::{AuthError, CreatePlanError, ImportError};
use magicpod_xray_convert::ReportError;
use owo_colors::OwoColorize;
use std::error::Error;
use thiserror::Error;
use tracing::error;

/// Documented exit codes for `magicpod-xray` failures.
///
/// Unknown/unexpected failures will always result in exit code 1.
pub enum ImporterExitCode {}

impl ImporterExitCode {
    /// No errors occurred and the command exited normally.
    pub const OK: i32 = 0;

    /// A user issue happened while setting up the invocation, such as
    /// missing credentials.
    pub const SETUP_ERROR: i32 = 96;

    /// The import endpoint rejected the execution payload.
    pub const IMPORT_FAILED: i32 = 100;

    /// Creating the Test Plan issue in Jira failed.
    pub const CREATE_PLAN_FAILED: i32 = 101;

    /// The MagicPod report could not be read or converted.
    pub const REPORT_CONVERT_FAILED: i32 = 102;

    /// The credential exchange with Xray was rejected.
    pub const AUTH_FAILED: i32 = 103;
}

// The #[error()] strings are mostly placeholders -- the expected way to print
// out errors is with the display_to_stderr method, which colorizes them.

/// An error expected to occur during a `magicpod-xray` invocation.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("missing Xray credentials")]
    XrayCredentialsMissing,
    #[error("missing Jira credentials")]
    JiraCredentialsMissing,
    #[error("failed to convert MagicPod report")]
    ReportConvertFailed {
        #[from]
        err: ReportError,
    },
    #[error("failed to authenticate against Xray")]
    AuthFailed {
        #[from]
        err: AuthError,
    },
    #[error("failed to import execution into Xray")]
    ImportFailed {
        #[from]
        err: ImportError,
    },
    #[error("failed to create Test Plan in Jira")]
    CreatePlanFailed {
        #[from]
        err: CreatePlanError,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::XrayCredentialsMissing | Self::JiraCredentialsMissing => {
                ImporterExitCode::SETUP_ERROR
            }
            Self::ReportConvertFailed { .. } => ImporterExitCode::REPORT_CONVERT_FAILED,
            Self::AuthFailed { .. } => ImporterExitCode::AUTH_FAILED,
            Self::ImportFailed { .. } => ImporterExitCode::IMPORT_FAILED,
            Self::CreatePlanFailed { .. } => ImporterExitCode::CREATE_PLAN_FAILED,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match &self {
            Self::XrayCredentialsMissing => {
                error!(
                    "missing Xray credentials (pass {} and {}, or set XRAY_ID and XRAY_SECRET)",
                    "--client-id".style(styles.bold),
                    "--client-secret".style(styles.bold),
                );
                None
            }
            Self::JiraCredentialsMissing => {
                error!(
                    "missing Jira credentials (pass {}, {} and {}, or set JIRA_URL, JIRA_USER \
                     and JIRA_API_TOKEN)",
                    "--jira-url".style(styles.bold),
                    "--jira-user".style(styles.bold),
                    "--jira-token".style(styles.bold),
                );
                None
            }
            Self::ReportConvertFailed { err } => {
                error!("{err}");
                err.source()
            }
            Self::AuthFailed { err } => {
                error!("{err}");
                err.source()
            }
            Self::ImportFailed { err } => {
                error!("{err}");
                err.source()
            }
            Self::CreatePlanFailed { err } => {
                error!("{err}");
                err.source()
            }
        };

        while let Some(err) = next_error {
            error!(target: "magicpod_xray::no_heading", "\nCaused by:\n  {err}");
            next_error = err.source();
        }
    }
}
