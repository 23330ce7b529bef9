// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for creating Test Plan issues in Jira.

use crate::errors::CreatePlanError;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Local};
use debug_ignore::DebugIgnore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use ureq::Agent;

/// A client for the Jira site hosting Xray.
///
/// Uses basic authentication with a user email and API token. Construction
/// performs no I/O.
#[derive(Clone, Debug)]
pub struct JiraClient {
    jira_url: String,
    user: String,
    api_token: String,
    agent: DebugIgnore<Agent>,
}

impl JiraClient {
    /// Creates a client for the given Jira Cloud base URL.
    ///
    /// A trailing `/` on the URL is trimmed.
    pub fn new(
        jira_url: impl Into<String>,
        user: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let mut jira_url = jira_url.into();
        while jira_url.ends_with('/') {
            jira_url.pop();
        }
        Self {
            jira_url,
            user: user.into(),
            api_token: api_token.into(),
            agent: DebugIgnore(crate::build_agent()),
        }
    }

    /// Creates a Test Plan issue in the given project.
    ///
    /// `now` feeds the default summary (`YYYY-MM-DD-HH-MM MagicPod Test
    /// Plan`) when no summary is supplied; it is a parameter rather than a
    /// clock read so callers and tests control it. The default description is
    /// a fixed provenance note.
    pub fn create_test_plan(
        &self,
        project_key: &str,
        summary: Option<&str>,
        description: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<CreatedIssue, CreatePlanError> {
        let url = format!("{}/rest/api/3/issue", self.jira_url);
        let summary = summary.map_or_else(|| default_summary(now), str::to_owned);
        let description = description.unwrap_or("Created automatically by script");
        debug!("creating Test Plan `{summary}` in project {project_key} via {url}");

        let payload = json!({
            "fields": {
                "project": {"key": project_key},
                "summary": summary,
                "description": description,
                "issuetype": {"name": "Test Plan"},
            }
        });

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", &self.basic_auth_header())
            .send_json(&payload)
            .map_err(|error| CreatePlanError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|error| CreatePlanError::Request {
                url: url.clone(),
                error: Box::new(error),
            })?;

        if !status.is_success() {
            return Err(CreatePlanError::Rejected {
                url,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|error| CreatePlanError::Parse { body, error })
    }

    fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.user, self.api_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

/// The default summary for a Test Plan created at `now`.
pub fn default_summary(now: DateTime<Local>) -> String {
    format!("{} MagicPod Test Plan", now.format("%Y-%m-%d-%H-%M"))
}

/// Jira's response to a successful issue creation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatedIssue {
    /// The internal id of the created issue.
    #[serde(default)]
    pub id: Option<String>,

    /// The issue key, e.g. `XSP-24`.
    #[serde(default)]
    pub key: Option<String>,

    /// The REST URL of the created issue.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
}

impl CreatedIssue {
    /// Serializes this response as human-readable JSON for logging.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("issue response serialization is infallible")
    }
}
