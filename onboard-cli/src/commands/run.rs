//! Run command - Answer one access-request issue

use std::path::PathBuf;

use clap::Args;
use onboard_core::{
    AppCredentials, Config, DryRun, Error, GitHubApi, IssueEvent, Onboarding, Settings, TargetRepo,
};
use onboard_github::GitHubClient;

/// Arguments for the run command
///
/// Every value falls back to the environment the workflow runner provides.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Owner of the repository collaborators are invited to
    #[arg(long, env = "TARGET_OWNER")]
    pub target_owner: Option<String>,

    /// Repository collaborators are invited to (name, owner/name or URL)
    #[arg(long, env = "TARGET_REPO")]
    pub target_repo: Option<String>,

    /// GitHub App ID
    #[arg(long, env = "APP_ID")]
    pub app_id: Option<String>,

    /// GitHub App private key (PEM, `\n` escapes allowed)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// GitHub App installation ID
    #[arg(long, env = "INSTALLATION_ID")]
    pub installation_id: Option<String>,

    /// Path to the triggering event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event: Option<PathBuf>,

    /// Check membership but do not invite, comment, label or close
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, settings: Settings) -> anyhow::Result<()> {
        let config = self.resolve(settings)?;
        let event_path = self
            .event
            .as_deref()
            .ok_or_else(|| Error::MissingEnv("GITHUB_EVENT_PATH".to_string()))?;
        let event = IssueEvent::from_file(event_path)?;

        let client = GitHubClient::from_app(&config.credentials).await?;
        let api: Box<dyn GitHubApi> = if config.dry_run {
            Box::new(DryRun::new(client))
        } else {
            Box::new(client)
        };

        let outcome = Onboarding::new(api.as_ref(), &config).run(&event).await?;
        tracing::info!(%outcome, dry_run = config.dry_run, "Run complete");

        Ok(())
    }

    /// Build the run configuration from flags and environment
    pub fn resolve(&self, settings: Settings) -> onboard_core::Result<Config> {
        let repo = required("TARGET_REPO", &self.target_repo)?;
        let target = TargetRepo::resolve(self.target_owner.as_deref(), repo)?;

        let credentials = AppCredentials::new(
            parse_id("APP_ID", required("APP_ID", &self.app_id)?)?,
            required("PRIVATE_KEY", &self.private_key)?,
            parse_id("INSTALLATION_ID", required("INSTALLATION_ID", &self.installation_id)?)?,
        )?;

        Ok(Config {
            target,
            credentials,
            settings,
            dry_run: self.dry_run,
        })
    }
}

fn required<'a>(name: &str, value: &'a Option<String>) -> onboard_core::Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::MissingEnv(name.to_string()))
}

fn parse_id(name: &str, value: &str) -> onboard_core::Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a number, got {:?}", name, value)))
}
