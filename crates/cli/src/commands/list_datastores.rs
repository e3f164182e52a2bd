//! Datastore inventory report command implementation.

use anyhow::{Context, Result};
use tracing::info;
use vsphere_config::Config;

use crate::commands::{close_session, open_session};
use crate::formatters::{DatastoreUsage, OutputFormat, get_formatter};

pub async fn run(config: Config, datacenter_name: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut client = open_session(&config).await?;
    let result = client
        .datastores_for_datacenter(datacenter_name)
        .await
        .context("Failed to list datastores");
    close_session(&mut client).await;

    let datastores = result?;
    info!(count = datastores.len(), "Fetched datastores");

    let usage: Vec<DatastoreUsage> = datastores.iter().map(DatastoreUsage::from).collect();
    let output = get_formatter(format).format_datastores(&usage)?;
    print!("{}", output);
    Ok(())
}
