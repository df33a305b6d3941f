//! Issue replies: comments, labels, state

use octocrab::models::IssueState;
use onboard_core::IssueRef;
use tracing::debug;

use crate::{GitHubClient, Result};

impl GitHubClient {
    /// Post a comment on an issue
    pub async fn post_comment(&self, issue: &IssueRef, body: &str) -> Result<()> {
        debug!(%issue, "Creating comment");

        self.client()
            .issues(&issue.owner, &issue.repo)
            .create_comment(issue.number, body)
            .await?;

        Ok(())
    }

    /// Add labels to an issue
    pub async fn add_labels(&self, issue: &IssueRef, labels: &[String]) -> Result<()> {
        debug!(%issue, ?labels, "Adding labels");

        self.client()
            .issues(&issue.owner, &issue.repo)
            .add_labels(issue.number, labels)
            .await?;

        Ok(())
    }

    /// Close an issue
    pub async fn close(&self, issue: &IssueRef) -> Result<()> {
        debug!(%issue, "Closing issue");

        self.client()
            .issues(&issue.owner, &issue.repo)
            .update(issue.number)
            .state(IssueState::Closed)
            .send()
            .await?;

        Ok(())
    }
}
