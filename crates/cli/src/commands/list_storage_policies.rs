//! Storage policy listing command implementation.

use anyhow::Result;
use vsphere_config::Config;

use crate::commands::{close_session, connect_pbm, open_session};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(config: Config, format: OutputFormat) -> Result<()> {
    let mut client = open_session(&config).await?;
    let result = async {
        let pbm = connect_pbm(&client, &config).await?;
        Ok::<_, anyhow::Error>(pbm.list_profiles().await?)
    }
    .await;
    close_session(&mut client).await;

    let output = get_formatter(format).format_profiles(&result?)?;
    print!("{}", output);
    Ok(())
}
