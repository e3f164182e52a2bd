//! Storage policy compatibility command implementation.

use anyhow::Result;
use tracing::info;
use vsphere_client::{VimClient, compatible_datastores};
use vsphere_config::Config;

use crate::commands::{close_session, connect_pbm, open_session};
use crate::formatters::{OutputFormat, get_formatter};

async fn compatible_hub_ids(
    client: &VimClient,
    config: &Config,
    policy_name: &str,
) -> Result<Vec<String>> {
    let pbm = connect_pbm(client, config).await?;

    let profile = pbm.find_profile(policy_name).await?;
    info!(
        profile = %profile.name,
        id = %profile.profile_id.unique_id,
        "Resolved storage profile"
    );

    let results = pbm.check_compatibility(&profile.profile_id).await?;
    Ok(compatible_datastores(&results))
}

pub async fn run(config: Config, policy_name: &str, format: OutputFormat) -> Result<()> {
    let mut client = open_session(&config).await?;
    let result = compatible_hub_ids(&client, &config, policy_name).await;
    close_session(&mut client).await;

    let output = get_formatter(format).format_datastore_ids(&result?)?;
    print!("{}", output);
    Ok(())
}
