//! CLI command implementations.
//!
//! Every command opens one vSphere session, runs its queries and logs out
//! before printing, whether or not the queries succeeded.

pub mod list_datastores;
pub mod list_storage_policies;
pub mod storage_policy_compatibility;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use vsphere_client::{PbmClient, VimClient};
use vsphere_config::Config;

pub fn build_client_from_config(config: &Config) -> Result<VimClient> {
    VimClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create vSphere client")
}

/// Build a client and log in.
pub async fn open_session(config: &Config) -> Result<VimClient> {
    let mut client = build_client_from_config(config)?;
    let base_url = client.base_url().to_string();
    info!("Connecting to {}", base_url);
    client
        .login()
        .await
        .map(|_| ())
        .with_context(|| format!("Failed to log in to {base_url}"))?;
    Ok(client)
}

/// Log out, reporting but otherwise ignoring failures.
pub async fn close_session(client: &mut VimClient) {
    if let Err(e) = client.logout().await {
        warn!("Logout failed: {}", e);
    }
}

/// Open the Storage Policy sub-session for a logged-in client.
pub async fn connect_pbm(client: &VimClient, config: &Config) -> Result<PbmClient> {
    let pbm = PbmClient::connect(client, config.connection.skip_verify)
        .await
        .context("Failed to connect to the Storage Policy service")?;
    debug!(
        url = pbm.url(),
        profile_manager = %pbm.content().profile_manager.value,
        placement_solver = %pbm.content().placement_solver.value,
        "Storage Policy session ready"
    );
    Ok(pbm)
}
