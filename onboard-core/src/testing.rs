//! In-memory GitHub used by the unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{GitHubApi, Permission};
use crate::config::TargetRepo;
use crate::event::IssueRef;
use crate::status::CollaborationStatus;
use crate::{Error, Result};

/// A recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Check(String),
    Invite(String, Permission),
    Comment(IssueRef, String),
    Label(IssueRef, String),
    Close(IssueRef),
}

/// Records every call and answers from scripted responses
pub struct FakeGitHub {
    status: CollaborationStatus,
    check_error: Mutex<Option<Error>>,
    invite_results: Mutex<VecDeque<Result<()>>>,
    label_error: Mutex<Option<Error>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for FakeGitHub {
    fn default() -> Self {
        Self {
            status: CollaborationStatus::NotFound,
            check_error: Mutex::new(None),
            invite_results: Mutex::new(VecDeque::new()),
            label_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeGitHub {
    /// Everyone is unknown to the target (check returns 404)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: CollaborationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_check_error(self, error: Error) -> Self {
        *self.check_error.lock().unwrap() = Some(error);
        self
    }

    /// Queue add-collaborator results; once drained, invites succeed
    pub fn with_invite_results(self, results: impl IntoIterator<Item = Result<()>>) -> Self {
        self.invite_results.lock().unwrap().extend(results);
        self
    }

    pub fn with_label_error(self, error: Error) -> Self {
        *self.label_error.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn invites(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Invite(user, _) => Some(user),
                _ => None,
            })
            .collect()
    }

    pub fn comments(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Comment(_, body) => Some(body),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Label(_, label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn closed(&self) -> Vec<IssueRef> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Close(issue) => Some(issue),
                _ => None,
            })
            .collect()
    }

    /// Calls that change state on GitHub
    pub fn writes(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, Call::Check(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn check_collaborator(
        &self,
        _target: &TargetRepo,
        username: &str,
    ) -> Result<CollaborationStatus> {
        self.record(Call::Check(username.to_string()));
        match self.check_error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(self.status.clone()),
        }
    }

    async fn add_collaborator(
        &self,
        _target: &TargetRepo,
        username: &str,
        permission: Permission,
    ) -> Result<()> {
        self.record(Call::Invite(username.to_string(), permission));
        self.invite_results.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<()> {
        self.record(Call::Comment(issue.clone(), body.to_string()));
        Ok(())
    }

    async fn add_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        if let Some(e) = self.label_error.lock().unwrap().take() {
            return Err(e);
        }
        self.record(Call::Label(issue.clone(), label.to_string()));
        Ok(())
    }

    async fn close_issue(&self, issue: &IssueRef) -> Result<()> {
        self.record(Call::Close(issue.clone()));
        Ok(())
    }
}
