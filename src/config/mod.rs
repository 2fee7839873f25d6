//! Configuration resolved from the process environment

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{ConfigError, Result};

/// Default Vault address
pub const DEFAULT_VAULT_ADDR: &str = "https://127.0.0.1:8200";

/// Default mount path of the Kubernetes auth method
pub const DEFAULT_MOUNT_PATH: &str = "kubernetes";

/// Default destination for the Vault token
pub const DEFAULT_TOKEN_DEST_PATH: &str = "/.vault-token";

/// Default location of the projected service account token
pub const DEFAULT_SERVICE_ACCOUNT_PATH: &str =
    "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Login settings, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Vault base address (`VAULT_ADDR`)
    pub vault_addr: Url,

    /// Mount path of the Kubernetes auth method (`VAULT_K8S_MOUNT_PATH`)
    pub mount_path: String,

    /// Vault role to log in as (`VAULT_ROLE`)
    pub role: String,

    /// Where the Vault token is written (`TOKEN_DEST_PATH`)
    pub token_dest_path: PathBuf,

    /// Where the service account token is read from (`SERVICE_ACCOUNT_PATH`)
    pub service_account_path: PathBuf,

    /// Whole-request timeout for the login call (`VAULT_CLIENT_TIMEOUT`, seconds)
    pub timeout: Option<Duration>,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let role = get("VAULT_ROLE").ok_or(ConfigError::MissingRole)?;

        let addr = get("VAULT_ADDR").unwrap_or_else(|| DEFAULT_VAULT_ADDR.to_string());
        let vault_addr = parse_addr(&addr)?;

        let timeout = match get("VAULT_CLIENT_TIMEOUT") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            vault_addr,
            mount_path: get("VAULT_K8S_MOUNT_PATH")
                .unwrap_or_else(|| DEFAULT_MOUNT_PATH.to_string()),
            role,
            token_dest_path: get("TOKEN_DEST_PATH")
                .unwrap_or_else(|| DEFAULT_TOKEN_DEST_PATH.to_string())
                .into(),
            service_account_path: get("SERVICE_ACCOUNT_PATH")
                .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_PATH.to_string())
                .into(),
            timeout,
        })
    }
}

fn parse_addr(value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidAddress {
        value: value.to_string(),
        source,
    })?;

    // Addresses like `mailto:` parse but have no path to extend
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(value.to_string()).into());
    }

    Ok(url)
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid(format!(
            "VAULT_CLIENT_TIMEOUT must be a positive number of seconds, got {:?}",
            value
        ))
        .into()),
    }
}
