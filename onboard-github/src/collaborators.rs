//! Collaborator lookups and invitations

use onboard_core::{CollaborationStatus, Permission, RateLimit, TargetRepo};
use serde::Serialize;
use tracing::debug;

use crate::{Error, GitHubClient, Result};

#[derive(Serialize)]
struct InviteBody<'a> {
    permission: &'a str,
}

fn collaborator_route(target: &TargetRepo, username: &str) -> String {
    format!(
        "/repos/{}/{}/collaborators/{}",
        target.owner, target.name, username
    )
}

impl GitHubClient {
    /// Check collaborator membership (204 member, 404 not)
    ///
    /// Uses the raw response since the status code is the answer.
    pub async fn collaboration_status(
        &self,
        target: &TargetRepo,
        username: &str,
    ) -> Result<CollaborationStatus> {
        let route = collaborator_route(target, username);
        debug!(%route, "Checking collaborator");

        let response = self.client()._get(route).await?;
        Ok(CollaborationStatus::from_status(response.status().as_u16()))
    }

    /// Invite a collaborator
    ///
    /// A 403 with an exhausted quota, or a 429, becomes
    /// [`Error::RateLimited`] carrying the reset headers.
    pub async fn invite_collaborator(
        &self,
        target: &TargetRepo,
        username: &str,
        permission: Permission,
    ) -> Result<()> {
        let route = collaborator_route(target, username);
        debug!(%route, %permission, "Inviting collaborator");

        let body = InviteBody {
            permission: permission.as_str(),
        };
        let response = self.client()._put(route, Some(&body)).await?;
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(());
        }

        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let limit = rate_limit(
            status,
            header("x-ratelimit-remaining").as_deref(),
            header("x-ratelimit-reset").as_deref(),
            header("retry-after").as_deref(),
        );
        if let Some(limit) = limit {
            return Err(Error::RateLimited(limit));
        }

        let body = self.client().body_to_string(response).await.unwrap_or_default();
        Err(Error::Status {
            status,
            message: error_message(&body),
        })
    }
}

/// Classify a rejected response as throttling
///
/// Primary limits answer 403 with `x-ratelimit-remaining: 0`; secondary
/// limits answer 403 or 429 with `retry-after`.
fn rate_limit(
    status: u16,
    remaining: Option<&str>,
    reset: Option<&str>,
    retry_after: Option<&str>,
) -> Option<RateLimit> {
    let exhausted = remaining.map(str::trim) == Some("0");
    let retry_after = retry_after.and_then(|v| v.trim().parse::<u64>().ok());

    let throttled = match status {
        403 => exhausted || retry_after.is_some(),
        429 => true,
        _ => false,
    };
    if !throttled {
        return None;
    }

    Some(RateLimit {
        reset_at: reset.and_then(|v| v.trim().parse::<i64>().ok()),
        retry_after,
    })
}

/// Pull `message` out of a GitHub error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
