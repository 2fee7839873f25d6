//! Vault API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use url::Url;

use super::{AccessToken, LoginRequest, LoginResponse, VaultAuthApi};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Vault client bound to a single Kubernetes auth mount
pub struct VaultClient {
    http: HttpClient,
    login_url: Url,
}

impl VaultClient {
    /// Create a client for the address, mount and timeout in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::from)?;

        Ok(Self {
            http,
            login_url: login_url(&config.vault_addr, &config.mount_path),
        })
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }
}

/// Build `<addr>/v1/auth/<mount>/login`.
///
/// A trailing slash on the address and stray slashes around the mount path
/// are dropped; nested mounts such as `k8s/prod` keep their segments.
fn login_url(addr: &Url, mount_path: &str) -> Url {
    let mut url = addr.clone();
    // Config rejects cannot-be-a-base addresses, so this always succeeds
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(["v1", "auth"])
            .extend(mount_path.split('/').filter(|s| !s.is_empty()))
            .push("login");
    }
    url
}

#[async_trait]
impl VaultAuthApi for VaultClient {
    async fn authenticate(&self, role: &str, jwt: &str) -> Result<AccessToken> {
        debug!("Logging in as role {}", role);

        let response = self
            .http
            .post(self.login_url.clone())
            .json(&LoginRequest { role, jwt })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("Login response status: {}", status);

        if status != StatusCode::OK {
            let body = response.bytes().await.map_err(ApiError::from)?;
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        let login: LoginResponse =
            serde_json::from_slice(&body).map_err(ApiError::InvalidResponse)?;

        let auth = login
            .auth
            .filter(|auth| !auth.client_token.is_empty())
            .ok_or(ApiError::EmptyClientToken)?;

        debug!(
            "Vault token issued: policies={:?}, lease_duration={}s, renewable={}",
            auth.policies, auth.lease_duration, auth.renewable
        );

        Ok(AccessToken::new(auth.client_token))
    }
}
