//! vault-k8s-login - exchange a Kubernetes service account token for a Vault token

use log::{debug, error};

mod client;
mod config;
mod credentials;
mod error;
mod exchange;
mod token;

use client::VaultClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{}", err.chain());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = VaultClient::new(&config)?;
    debug!("Vault login endpoint: {}", client.login_url());

    exchange::run(&config, &client).await
}
