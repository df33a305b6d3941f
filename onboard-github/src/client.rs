//! GitHub App client using octocrab

use octocrab::models::{AppId, InstallationId};
use octocrab::Octocrab;
use onboard_core::AppCredentials;
use tracing::{debug, info};

use crate::{Error, Result};

/// Installation-scoped GitHub API client
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Authenticate as a GitHub App installation
    ///
    /// Signs a JWT with the app's private key, then exchanges it for an
    /// installation token. Both steps fail with [`Error::Auth`].
    pub async fn from_app(credentials: &AppCredentials) -> Result<Self> {
        debug!(
            app_id = credentials.app_id,
            installation_id = credentials.installation_id,
            "Authenticating as GitHub App"
        );

        let key = jsonwebtoken::EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .map_err(|e| Error::Auth(format!("Invalid private key: {}", e)))?;

        let app = Octocrab::builder()
            .app(AppId(credentials.app_id), key)
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        let (client, _token) = app
            .installation_and_token(InstallationId(credentials.installation_id))
            .await
            .map_err(|e| {
                Error::Auth(format!(
                    "Failed to get token for installation {}: {}",
                    credentials.installation_id, e
                ))
            })?;

        info!(
            installation_id = credentials.installation_id,
            "Created installation client"
        );

        Ok(Self { client })
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient").finish_non_exhaustive()
    }
}
