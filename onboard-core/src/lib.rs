//! Onboard Core - Core library for the collaborator onboarding bot
//!
//! An issue titled with an `@username` asks for access to a target
//! repository. This crate parses the triggering event, checks whether the
//! requester already collaborates on the target, invites them if not, and
//! answers the issue. GitHub itself sits behind the [`GitHubApi`] trait.

pub mod api;
pub mod config;
pub mod dry_run;
pub mod error;
pub mod event;
pub mod invite;
pub mod respond;
pub mod status;
pub mod username;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use api::{GitHubApi, Permission, RateLimit};
pub use config::{AppCredentials, Config, InviteFailure, Settings, TargetRepo};
pub use dry_run::DryRun;
pub use error::{Error, Result};
pub use event::{IssueEvent, IssueRef};
pub use invite::RetryPolicy;
pub use respond::Reply;
pub use status::CollaborationStatus;
pub use username::extract_username;
pub use workflow::{Onboarding, Outcome};
