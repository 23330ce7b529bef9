// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{ExpectedError, ImporterExitCode},
    output::{OutputContext, OutputOpts},
};
use camino::Utf8PathBuf;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use magicpod_xray_client::{JiraClient, XrayClient};
use magicpod_xray_convert::convert_file;
use tracing::info;

/// Import MagicPod batch-run results into Xray Cloud.
#[derive(Debug, Parser)]
#[command(version, name = "magicpod-xray")]
pub struct MagicPodXrayApp {
    #[command(flatten)]
    output: OutputOpts,

    #[command(subcommand)]
    command: Command,
}

impl MagicPodXrayApp {
    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    pub fn exec(self) -> Result<i32, ExpectedError> {
        match self.command {
            Command::Import(opts) => opts.exec(),
            Command::CreateTestPlan(opts) => opts.exec(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a MagicPod batch-run report and upload it to Xray
    ///
    /// Reads the MagicPod result JSON, converts it into an Xray
    /// execution-import payload, authenticates against Xray Cloud and
    /// uploads the payload in a single pass.
    Import(ImportOpts),
    /// Create a Test Plan issue in the Jira site hosting Xray
    CreateTestPlan(CreateTestPlanOpts),
}

#[derive(Debug, Args)]
struct ImportOpts {
    /// Xray Cloud base URL
    #[arg(
        long,
        value_name = "URL",
        env = "XRAY_BASE_URL",
        default_value = "https://xray.cloud.getxray.app"
    )]
    base_url: String,

    /// Xray API client id
    #[arg(long, value_name = "ID", env = "XRAY_ID")]
    client_id: Option<String>,

    /// Xray API client secret
    #[arg(long, value_name = "SECRET", env = "XRAY_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Path to the MagicPod batch-run result JSON
    #[arg(long, value_name = "PATH", default_value = "magicpod_result")]
    magicpod_json: Utf8PathBuf,

    /// Summary for the Test Execution created in Xray
    #[arg(long, value_name = "SUMMARY")]
    summary: Option<String>,
}

impl ImportOpts {
    fn exec(self) -> Result<i32, ExpectedError> {
        // Credentials are checked before any file or network I/O.
        let (Some(client_id), Some(client_secret)) = (self.client_id, self.client_secret) else {
            return Err(ExpectedError::XrayCredentialsMissing);
        };

        let document = convert_file(&self.magicpod_json, self.summary.as_deref())?;
        info!(
            "payload being sent to Xray:\n{}",
            document.to_json_pretty()
        );

        let session = XrayClient::new(self.base_url, client_id, client_secret).authenticate()?;
        let response = session.import_execution(&document)?;
        info!(
            "upload successful. Xray response:\n{}",
            response.to_json_pretty()
        );

        Ok(ImporterExitCode::OK)
    }
}

#[derive(Debug, Args)]
struct CreateTestPlanOpts {
    /// Jira Cloud base URL, e.g. https://yourcompany.atlassian.net
    #[arg(long, value_name = "URL", env = "JIRA_URL")]
    jira_url: Option<String>,

    /// Jira user email
    #[arg(long, value_name = "EMAIL", env = "JIRA_USER")]
    jira_user: Option<String>,

    /// Jira API token
    #[arg(long, value_name = "TOKEN", env = "JIRA_API_TOKEN", hide_env_values = true)]
    jira_token: Option<String>,

    /// Project key in Jira, e.g. XSP
    #[arg(long, value_name = "KEY")]
    project: String,

    /// Summary for the Test Plan
    #[arg(long, value_name = "SUMMARY")]
    summary: Option<String>,

    /// Description for the Test Plan
    #[arg(long, value_name = "DESCRIPTION")]
    description: Option<String>,
}

impl CreateTestPlanOpts {
    fn exec(self) -> Result<i32, ExpectedError> {
        let (Some(jira_url), Some(jira_user), Some(jira_token)) =
            (self.jira_url, self.jira_user, self.jira_token)
        else {
            return Err(ExpectedError::JiraCredentialsMissing);
        };

        let client = JiraClient::new(jira_url, jira_user, jira_token);
        let issue = client.create_test_plan(
            &self.project,
            self.summary.as_deref(),
            self.description.as_deref(),
            Local::now(),
        )?;
        info!(
            "Test Plan created successfully:\n{}",
            issue.to_json_pretty()
        );

        Ok(ImporterExitCode::OK)
    }
}
