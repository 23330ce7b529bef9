// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for Xray Cloud's execution-import API.

use crate::errors::{AuthError, ImportError};
use debug_ignore::DebugIgnore;
use magicpod_xray_convert::ExecutionDocument;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Agent;

#[derive(Serialize)]
struct AuthRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

/// An unauthenticated Xray Cloud client.
///
/// Construction performs no I/O; call [`authenticate`](Self::authenticate)
/// to exchange the API-key credentials for a session. The two steps are
/// separate so that configuration errors and network errors stay
/// distinguishable.
#[derive(Clone, Debug)]
pub struct XrayClient {
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl XrayClient {
    /// Creates a client for the given Xray Cloud base URL and API key pair.
    ///
    /// A trailing `/` on the base URL is trimmed.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Exchanges the client's credentials for a bearer token.
    ///
    /// Xray returns the token as a bare quoted JSON string; the quotes are
    /// stripped here. A non-2xx response fails with
    /// [`AuthError::Rejected`] carrying the response body.
    pub fn authenticate(self) -> Result<XraySession, AuthError> {
        let url = format!("{}/api/v2/authenticate", self.base_url);
        debug!("authenticating against {url}");

        let agent = crate::build_agent();
        let mut response = agent
            .post(&url)
            .send_json(AuthRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .map_err(|error| AuthError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|error| AuthError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let token = body.trim().trim_matches('"').to_owned();
        Ok(XraySession {
            base_url: self.base_url,
            token,
            agent: DebugIgnore(agent),
        })
    }
}

/// An authenticated Xray Cloud session.
///
/// Holds the bearer token obtained by [`XrayClient::authenticate`] and
/// attaches it to import requests. Sessions are short-lived: one per
/// invocation, nothing cached across invocations.
#[derive(Clone, Debug)]
pub struct XraySession {
    base_url: String,
    token: String,
    agent: DebugIgnore<Agent>,
}

impl XraySession {
    /// The bearer token for this session.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Uploads an execution document to Xray's import endpoint.
    ///
    /// On a non-2xx response the body is read first and surfaced verbatim in
    /// [`ImportError::Rejected`]; nothing is retried.
    pub fn import_execution(&self, document: &ExecutionDocument) -> Result<ImportResponse, ImportError> {
        let url = format!("{}/api/v2/import/execution", self.base_url);
        debug!("importing {} test results to {url}", document.tests.len());

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .send_json(document)
            .map_err(|error| ImportError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|error| ImportError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        if !status.is_success() {
            return Err(ImportError::Rejected {
                url,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|error| ImportError::Parse { body, error })
    }
}

/// Xray's response to a successful execution import.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportResponse {
    /// The internal id of the created Test Execution issue.
    #[serde(default)]
    pub id: Option<String>,

    /// The issue key of the created Test Execution, e.g. `PROJ-130`.
    #[serde(default)]
    pub key: Option<String>,

    /// The REST URL of the created issue.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

impl ImportResponse {
    /// Serializes this response as human-readable JSON for logging.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("import response serialization is infallible")
    }
}
