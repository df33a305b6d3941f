//! [`GitHubApi`] implementation backed by octocrab

use async_trait::async_trait;
use onboard_core::{CollaborationStatus, GitHubApi, IssueRef, Permission, TargetRepo};

use crate::GitHubClient;

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn check_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
    ) -> onboard_core::Result<CollaborationStatus> {
        Ok(self.collaboration_status(target, username).await?)
    }

    async fn add_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
        permission: Permission,
    ) -> onboard_core::Result<()> {
        Ok(self.invite_collaborator(target, username, permission).await?)
    }

    async fn create_comment(&self, issue: &IssueRef, body: &str) -> onboard_core::Result<()> {
        Ok(self.post_comment(issue, body).await?)
    }

    async fn add_label(&self, issue: &IssueRef, label: &str) -> onboard_core::Result<()> {
        Ok(self.add_labels(issue, &[label.to_string()]).await?)
    }

    async fn close_issue(&self, issue: &IssueRef) -> onboard_core::Result<()> {
        Ok(self.close(issue).await?)
    }
}
