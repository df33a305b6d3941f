//! Collaboration status lookup

use std::fmt;

use tracing::{debug, warn};

use crate::api::GitHubApi;
use crate::config::TargetRepo;

/// Outcome of a check-collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaborationStatus {
    /// 204: the user already has access
    AlreadyCollaborator,
    /// Any other success status
    NotCollaborator,
    /// 404: not a collaborator
    NotFound,
    /// The check itself failed
    Error(String),
}

impl CollaborationStatus {
    /// Map the HTTP status of a check-collaborator response
    pub fn from_status(status: u16) -> Self {
        match status {
            204 => CollaborationStatus::AlreadyCollaborator,
            404 => CollaborationStatus::NotFound,
            200..=299 => CollaborationStatus::NotCollaborator,
            other => CollaborationStatus::Error(format!("unexpected status {}", other)),
        }
    }
}

impl fmt::Display for CollaborationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaborationStatus::AlreadyCollaborator => f.write_str("already collaborator"),
            CollaborationStatus::NotCollaborator => f.write_str("not collaborator"),
            CollaborationStatus::NotFound => f.write_str("not found"),
            CollaborationStatus::Error(detail) => write!(f, "error: {}", detail),
        }
    }
}

/// Check membership, folding request failures into [`CollaborationStatus::Error`]
pub async fn check_collaborator<A>(api: &A, target: &TargetRepo, username: &str) -> CollaborationStatus
where
    A: GitHubApi + ?Sized,
{
    match api.check_collaborator(target, username).await {
        Ok(status) => {
            debug!(username, %target, %status, "Checked collaborator");
            status
        }
        Err(e) => {
            warn!(username, %target, error = %e, "Collaborator check failed");
            CollaborationStatus::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGitHub;
    use crate::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CollaborationStatus::from_status(204),
            CollaborationStatus::AlreadyCollaborator
        );
        assert_eq!(CollaborationStatus::from_status(404), CollaborationStatus::NotFound);
        assert_eq!(
            CollaborationStatus::from_status(200),
            CollaborationStatus::NotCollaborator
        );
        assert!(matches!(
            CollaborationStatus::from_status(500),
            CollaborationStatus::Error(_)
        ));
        assert!(matches!(
            CollaborationStatus::from_status(403),
            CollaborationStatus::Error(_)
        ));
    }

    #[tokio::test]
    async fn test_request_failure_becomes_error_status() {
        let api = FakeGitHub::new().with_check_error(Error::Transport("connection reset".to_string()));
        let target = TargetRepo::new("acme", "handbook").unwrap();

        let status = check_collaborator(&api, &target, "jane").await;
        assert_eq!(
            status,
            CollaborationStatus::Error("GitHub request failed: connection reset".to_string())
        );
    }
}
