//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).

use anyhow::Result;
use vsphere_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    match cli.command {
        Commands::StoragePolicyCompatibility {
            storage_policy_name,
        } => {
            commands::storage_policy_compatibility::run(config, &storage_policy_name, format)
                .await?;
        }
        Commands::ListDatastores { datacenter_name } => {
            commands::list_datastores::run(config, datacenter_name.as_deref(), format).await?;
        }
        Commands::ListStoragePolicies => {
            commands::list_storage_policies::run(config, format).await?;
        }
    }

    Ok(())
}
