//! Service account token to Vault token exchange

use log::{debug, info};

use crate::client::VaultAuthApi;
use crate::config::Config;
use crate::credentials::load_identity_token;
use crate::error::Result;
use crate::token::persist_token;

/// Read the service account token, log in to Vault, and store the Vault token.
///
/// The destination is only written after a successful login, so a failed run
/// leaves any existing token file as it was.
pub async fn run<C>(config: &Config, client: &C) -> Result<()>
where
    C: VaultAuthApi + ?Sized,
{
    debug!(
        "Reading identity token from {}",
        config.service_account_path.display()
    );
    let jwt = load_identity_token(&config.service_account_path).await?;

    let token = client.authenticate(&config.role, &jwt).await?;

    persist_token(&token, &config.token_dest_path).await?;

    info!(
        "successfully stored vault token at {}",
        config.token_dest_path.display()
    );
    Ok(())
}
