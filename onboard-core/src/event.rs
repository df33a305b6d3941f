//! Triggering issue event
//!
//! The workflow runner writes the webhook payload to the file named by
//! `GITHUB_EVENT_PATH`; only the fields the bot acts on are modeled.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Issue-event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEvent {
    /// Webhook action (`opened`, `edited`, ...)
    #[serde(default)]
    pub action: Option<String>,
    pub issue: EventIssue,
    pub repository: EventRepository,
}

/// The issue that triggered the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventIssue {
    pub number: u64,
    pub title: String,
}

/// The repository the issue was opened in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepository {
    pub name: String,
    pub owner: EventOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOwner {
    pub login: String,
}

impl IssueEvent {
    /// Parse a payload from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the payload file written by the workflow runner
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Reading event payload");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The issue the bot answers on
    pub fn issue_ref(&self) -> IssueRef {
        IssueRef {
            owner: self.repository.owner.login.clone(),
            repo: self.repository.name.clone(),
            number: self.issue.number,
        }
    }
}

/// Address of an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
