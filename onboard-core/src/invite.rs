//! Collaborator invitation with bounded rate-limit retries

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::api::{GitHubApi, Permission};
use crate::config::{RetrySettings, TargetRepo};
use crate::{Error, Result};

/// How long and how often to wait out rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Ceiling on a single wait
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetrySettings::default().into()
    }
}

impl From<RetrySettings> for RetryPolicy {
    fn from(settings: RetrySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            max_wait: settings.max_wait,
        }
    }
}

/// Invite `username` to `target`, waiting out rate-limit windows
///
/// Each throttled attempt sleeps until the window resets (capped at
/// `max_wait`) and tries again. Non-throttling errors return immediately.
pub async fn invite<A>(
    api: &A,
    target: &TargetRepo,
    username: &str,
    permission: Permission,
    policy: &RetryPolicy,
) -> Result<()>
where
    A: GitHubApi + ?Sized,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match api.add_collaborator(target, username, permission).await {
            Ok(()) => {
                info!(username, %target, %permission, attempt, "Invited collaborator");
                return Ok(());
            }
            Err(Error::RateLimited(limit)) if attempt < policy.max_attempts => {
                let wait = limit.wait_from(Utc::now().timestamp()).min(policy.max_wait);
                warn!(
                    username,
                    attempt,
                    wait_secs = wait.as_secs(),
                    %limit,
                    "Rate limit exceeded, waiting before retrying"
                );
                sleep(wait).await;
            }
            Err(Error::RateLimited(limit)) => {
                warn!(username, attempt, %limit, "Rate limited on final attempt");
                return Err(Error::RetriesExhausted { attempts: attempt });
            }
            Err(e) => return Err(e),
        }
    }
}
