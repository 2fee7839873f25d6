//! Mock Vault client for testing
//!
//! Records every login attempt and replays a canned outcome without
//! touching the network.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{AccessToken, VaultAuthApi};
use crate::error::{ApiError, Result};

/// A login attempt captured by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLogin {
    pub role: String,
    pub jwt: String,
}

/// Mock auth client.
///
/// # Example
/// ```ignore
/// let mock = MockVaultClient::new().with_token("hvs.test");
/// let token = mock.authenticate("app", "eyJ...").await?;
/// ```
#[derive(Default)]
pub struct MockVaultClient {
    /// Token returned on success
    token: Arc<Mutex<Option<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Logins seen so far
    captured: Arc<Mutex<Vec<CapturedLogin>>>,
}

impl MockVaultClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `token`
    pub fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.try_lock().expect("mock not shared yet") = Some(token.into());
        self
    }

    /// Fail the next login with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Logins the mock has received
    pub async fn captured(&self) -> Vec<CapturedLogin> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl VaultAuthApi for MockVaultClient {
    async fn authenticate(&self, role: &str, jwt: &str) -> Result<AccessToken> {
        self.captured.lock().await.push(CapturedLogin {
            role: role.to_string(),
            jwt: jwt.to_string(),
        });

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        match self.token.lock().await.clone() {
            Some(token) => Ok(AccessToken::new(token)),
            None => Err(ApiError::EmptyClientToken.into()),
        }
    }
}
