//! Vault Kubernetes auth client

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod vault;

#[cfg(test)]
pub use mock::MockVaultClient;
pub use vault::VaultClient;

/// Vault auth API trait
#[async_trait]
pub trait VaultAuthApi: Send + Sync {
    /// Exchange a service account JWT for a Vault token
    async fn authenticate(&self, role: &str, jwt: &str) -> Result<AccessToken>;
}

/// Body of `POST /v1/auth/<mount>/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub role: &'a str,
    pub jwt: &'a str,
}

/// Login response; only the `auth` block is read
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub auth: Option<AuthInfo>,
}

/// `auth` block of a login response
#[derive(Deserialize)]
pub struct AuthInfo {
    #[serde(default)]
    pub client_token: String,

    #[serde(default)]
    pub policies: Vec<String>,

    /// Token TTL in seconds
    #[serde(default)]
    pub lease_duration: u64,

    #[serde(default)]
    pub renewable: bool,
}

impl fmt::Debug for AuthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthInfo")
            .field("client_token", &"<redacted>")
            .field("policies", &self.policies)
            .field("lease_duration", &self.lease_duration)
            .field("renewable", &self.renewable)
            .finish()
    }
}

/// A Vault client token. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
