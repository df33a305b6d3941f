//! Configuration management for the onboarding bot
//!
//! Configuration is resolved with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (TARGET_OWNER, TARGET_REPO, APP_ID, ...)
//! 3. Settings file (~/.config/onboard/config.toml or --config)
//! 4. Default values
//!
//! The resolved [`Config`] is built once at startup and handed to every
//! component by reference.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::Permission;
use crate::{Error, Result};

/// Repository that requesters are invited to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRepo {
    pub owner: String,
    pub name: String,
}

impl TargetRepo {
    /// Build a target from an owner and repository name
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into().trim().to_string();
        let name = name.into().trim().to_string();

        if owner.is_empty() {
            return Err(Error::Config("target owner is empty".to_string()));
        }
        if name.is_empty() {
            return Err(Error::Config("target repository name is empty".to_string()));
        }

        Ok(Self { owner, name })
    }

    /// Resolve the target from `TARGET_OWNER` / `TARGET_REPO` values
    ///
    /// `repo` may be a bare name, `owner/repo`, or a GitHub URL. A slug
    /// supplies the owner when none is given; if both are given they must
    /// agree.
    pub fn resolve(owner: Option<&str>, repo: &str) -> Result<Self> {
        let owner = owner.map(str::trim).filter(|o| !o.is_empty());

        if repo.contains('/') || repo.contains(':') {
            let (slug_owner, slug_name) = parse_repo_slug(repo)?;
            if let Some(owner) = owner {
                if !owner.eq_ignore_ascii_case(&slug_owner) {
                    return Err(Error::Config(format!(
                        "TARGET_OWNER {} does not match owner in TARGET_REPO {}",
                        owner, repo
                    )));
                }
            }
            return Self::new(owner.map(str::to_string).unwrap_or(slug_owner), slug_name);
        }

        let owner = owner.ok_or_else(|| Error::MissingEnv("TARGET_OWNER".to_string()))?;
        Self::new(owner, repo)
    }
}

impl fmt::Display for TargetRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Split a repository reference into owner and name
///
/// Supports formats:
/// - owner/repo
/// - https://github.com/owner/repo
/// - git@github.com:owner/repo.git
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    let invalid = || Error::Config(format!("Invalid repository format: {}. Expected owner/repo", slug));

    let path = if slug.starts_with("https://") || slug.starts_with("http://") {
        let url = url::Url::parse(slug).map_err(|e| Error::Config(e.to_string()))?;
        url.path().trim_start_matches('/').to_string()
    } else if let Some(rest) = slug.strip_prefix("git@") {
        rest.split_once(':').map(|(_, path)| path.to_string()).ok_or_else(invalid)?
    } else {
        slug.to_string()
    };

    let path = path.trim_end_matches('/').trim_end_matches(".git");
    let mut parts = path.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(invalid()),
    }
}

/// GitHub App identity used to mint an installation client
#[derive(Clone)]
pub struct AppCredentials {
    pub app_id: u64,
    /// PEM-encoded RSA private key with real newlines
    pub private_key: String,
    pub installation_id: u64,
}

impl AppCredentials {
    /// Build credentials, turning literal `\n` escapes in the key into newlines
    pub fn new(app_id: u64, private_key: &str, installation_id: u64) -> Result<Self> {
        let private_key = normalize_private_key(private_key);
        if private_key.trim().is_empty() {
            return Err(Error::Auth("PRIVATE_KEY is empty".to_string()));
        }

        Ok(Self {
            app_id,
            private_key,
            installation_id,
        })
    }
}

impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_id", &self.app_id)
            .field("installation_id", &self.installation_id)
            .finish_non_exhaustive()
    }
}

/// Secrets stores usually flatten PEM files to one line with `\n` escapes
fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// What to do when the invitation itself fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InviteFailure {
    /// Fail the run before anything is posted to the issue
    #[default]
    Abort,
    /// Log the failure and answer the issue as if the invite went out
    BestEffort,
}

/// Invitation settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InviteSettings {
    pub permission: Permission,
    pub on_failure: InviteFailure,
}

/// Rate-limit retry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Total add-collaborator attempts, including the first
    pub max_attempts: u32,

    /// Longest single wait for a rate-limit window to reset
    #[serde(with = "humantime_serde")]
    pub max_wait: Duration,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            max_wait: Duration::from_secs(15 * 60),
        }
    }
}

/// Labels applied when answering an issue
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Applied after a successful invitation
    pub added: String,
    /// Applied when the requester already has access
    pub duplicate: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            added: "collaborator added".to_string(),
            duplicate: "duplicate request".to_string(),
        }
    }
}

/// Optional tuning loaded from the settings file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub invite: InviteSettings,
    pub retry: RetrySettings,
    pub labels: LabelSettings,
}

impl Settings {
    /// Load settings from `path`, or from the default location
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let settings: Settings = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        if settings.retry.max_attempts == 0 {
            return Err(Error::Config("retry.max_attempts must be at least 1".to_string()));
        }

        Ok(settings)
    }

    /// Get the default settings file path
    ///
    /// Returns `~/.config/onboard/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("onboard").join("config.toml"))
    }
}

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub target: TargetRepo,
    pub credentials: AppCredentials,
    pub settings: Settings,
    /// Check membership but skip every write
    pub dry_run: bool,
}
