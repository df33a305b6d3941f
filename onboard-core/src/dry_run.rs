//! Read-only wrapper around a [`GitHubApi`]

use async_trait::async_trait;
use tracing::info;

use crate::api::{GitHubApi, Permission};
use crate::config::TargetRepo;
use crate::event::IssueRef;
use crate::status::CollaborationStatus;
use crate::Result;

/// Forwards membership checks and logs writes instead of sending them
#[derive(Debug)]
pub struct DryRun<A> {
    inner: A,
}

impl<A> DryRun<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

#[async_trait]
impl<A: GitHubApi> GitHubApi for DryRun<A> {
    async fn check_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
    ) -> Result<CollaborationStatus> {
        self.inner.check_collaborator(target, username).await
    }

    async fn add_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
        permission: Permission,
    ) -> Result<()> {
        info!(username, %target, %permission, "[DRY RUN] Would invite collaborator");
        Ok(())
    }

    async fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<()> {
        info!(%issue, body, "[DRY RUN] Would comment");
        Ok(())
    }

    async fn add_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        info!(%issue, label, "[DRY RUN] Would add label");
        Ok(())
    }

    async fn close_issue(&self, issue: &IssueRef) -> Result<()> {
        info!(%issue, "[DRY RUN] Would close issue");
        Ok(())
    }
}
