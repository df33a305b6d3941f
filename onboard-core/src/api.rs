//! The platform operations the bot depends on
//!
//! Everything the workflow does to GitHub goes through [`GitHubApi`], so the
//! workflow can run against the octocrab client in production and against an
//! in-memory recorder in tests.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::TargetRepo;
use crate::event::IssueRef;
use crate::status::CollaborationStatus;
use crate::Result;

/// Wait used when a throttled response carries no reset information
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Repository permission granted with an invitation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read access
    #[default]
    #[serde(alias = "read")]
    Pull,
    Triage,
    /// Write access
    #[serde(alias = "write")]
    Push,
    Maintain,
    Admin,
}

impl Permission {
    /// Value sent in the add-collaborator request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Throttling details taken from a rejected response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// `x-ratelimit-reset`: Unix time (seconds) the window resets
    pub reset_at: Option<i64>,
    /// `retry-after`: seconds to wait, sent with secondary limits
    pub retry_after: Option<u64>,
}

impl RateLimit {
    /// How long to wait before retrying, measured from `now` (Unix seconds)
    ///
    /// `retry-after` wins over the reset timestamp. A reset time already in
    /// the past means no wait.
    pub fn wait_from(&self, now: i64) -> Duration {
        if let Some(secs) = self.retry_after {
            return Duration::from_secs(secs);
        }
        match self.reset_at {
            Some(reset) => Duration::from_secs(u64::try_from(reset.saturating_sub(now)).unwrap_or(0)),
            None => DEFAULT_RATE_LIMIT_WAIT,
        }
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.retry_after, self.reset_at) {
            (Some(secs), _) => write!(f, "retry after {}s", secs),
            (None, Some(reset)) => write!(f, "resets at {}", reset),
            (None, None) => f.write_str("no reset time given"),
        }
    }
}

/// GitHub operations used by the onboarding workflow
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Ask whether `username` is a collaborator on `target`
    async fn check_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
    ) -> Result<CollaborationStatus>;

    /// Invite `username` to `target`
    ///
    /// Throttled requests fail with [`crate::Error::RateLimited`].
    async fn add_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
        permission: Permission,
    ) -> Result<()>;

    /// Append a comment to an issue
    async fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<()>;

    /// Attach a single label to an issue
    async fn add_label(&self, issue: &IssueRef, label: &str) -> Result<()>;

    /// Move an issue to the closed state
    async fn close_issue(&self, issue: &IssueRef) -> Result<()>;
}
