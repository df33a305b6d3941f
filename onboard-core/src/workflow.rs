//! The onboarding run: parse, check, invite, answer

use std::fmt;

use tracing::{info, warn};

use crate::api::GitHubApi;
use crate::config::{Config, InviteFailure};
use crate::event::IssueEvent;
use crate::invite::{invite, RetryPolicy};
use crate::respond::{respond, Reply};
use crate::status::{check_collaborator, CollaborationStatus};
use crate::username::extract_username;
use crate::Result;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The requester owns the target repository; nothing was done
    OwnerRequest { username: String },
    /// The requester was invited and the issue closed
    Invited { username: String },
    /// The requester already had access and the issue closed
    AlreadyMember { username: String },
    /// The check gave no actionable answer; the issue was left alone
    NoAction {
        username: String,
        status: CollaborationStatus,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::OwnerRequest { username } => {
                write!(f, "{} owns the target repository; skipped", username)
            }
            Outcome::Invited { username } => write!(f, "invited {}", username),
            Outcome::AlreadyMember { username } => {
                write!(f, "{} is already a collaborator", username)
            }
            Outcome::NoAction { username, status } => {
                write!(f, "no action for {} ({})", username, status)
            }
        }
    }
}

/// Runs the onboarding workflow for one issue event
pub struct Onboarding<'a, A: ?Sized> {
    api: &'a A,
    config: &'a Config,
    policy: RetryPolicy,
}

impl<'a, A> Onboarding<'a, A>
where
    A: GitHubApi + ?Sized,
{
    pub fn new(api: &'a A, config: &'a Config) -> Self {
        Self {
            api,
            config,
            policy: config.settings.retry.clone().into(),
        }
    }

    /// Handle one issue event
    ///
    /// Errors from parsing, the invitation (under the `abort` policy) and
    /// the issue reply propagate; the caller marks the run failed.
    pub async fn run(&self, event: &IssueEvent) -> Result<Outcome> {
        let target = &self.config.target;
        let username = extract_username(&event.issue.title)?;
        let issue = event.issue_ref();

        info!(
            target_repo = %target,
            requester = %username,
            owner = %target.owner,
            issue = %issue,
            action = event.action.as_deref().unwrap_or("unknown"),
            "Parsed event values"
        );

        if username.eq_ignore_ascii_case(&target.owner) {
            info!(requester = %username, "Requester is the owner of the target repository; exiting");
            return Ok(Outcome::OwnerRequest { username });
        }

        let labels = &self.config.settings.labels;
        match check_collaborator(self.api, target, &username).await {
            CollaborationStatus::NotFound => {
                self.invite(&username).await?;
                respond(self.api, &issue, &Reply::added(&username, &labels.added)).await?;
                Ok(Outcome::Invited { username })
            }
            CollaborationStatus::AlreadyCollaborator => {
                respond(
                    self.api,
                    &issue,
                    &Reply::already_member(&username, &labels.duplicate),
                )
                .await?;
                Ok(Outcome::AlreadyMember { username })
            }
            status @ (CollaborationStatus::NotCollaborator | CollaborationStatus::Error(_)) => {
                warn!(requester = %username, %status, "No actionable collaborator status; leaving issue open");
                Ok(Outcome::NoAction { username, status })
            }
        }
    }

    async fn invite(&self, username: &str) -> Result<()> {
        let settings = &self.config.settings.invite;
        let result = invite(
            self.api,
            &self.config.target,
            username,
            settings.permission,
            &self.policy,
        )
        .await;

        match (result, settings.on_failure) {
            (Ok(()), _) => Ok(()),
            (Err(e), InviteFailure::BestEffort) => {
                warn!(
                    requester = %username,
                    error = %e,
                    "Invitation failed; answering the issue anyway (best-effort)"
                );
                Ok(())
            }
            (Err(e), InviteFailure::Abort) => Err(e),
        }
    }
}
