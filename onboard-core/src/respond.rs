//! Issue replies: comment, label, close

use tracing::info;

use crate::api::GitHubApi;
use crate::event::IssueRef;
use crate::Result;

/// What gets posted back on the issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub comment: String,
    pub label: String,
}

impl Reply {
    /// Reply after `username` was invited
    pub fn added(username: &str, label: impl Into<String>) -> Self {
        Self {
            comment: format!(
                "@{} has been added as a member of this repository. \
                 Please check your email or notifications for an invitation.",
                username
            ),
            label: label.into(),
        }
    }

    /// Reply when `username` already has access
    pub fn already_member(username: &str, label: impl Into<String>) -> Self {
        Self {
            comment: format!("@{} is already a member of this repository.", username),
            label: label.into(),
        }
    }
}

/// Comment, label, then close the issue
///
/// Each step is its own request. The first failure is returned and anything
/// already posted stays on the issue.
pub async fn respond<A>(api: &A, issue: &IssueRef, reply: &Reply) -> Result<()>
where
    A: GitHubApi + ?Sized,
{
    api.create_comment(issue, &reply.comment).await?;
    api.add_label(issue, &reply.label).await?;
    api.close_issue(issue).await?;

    info!(%issue, label = %reply.label, "Answered and closed issue");
    Ok(())
}
